//! Error types for usersync.
//!
//! Transport failures carry a fixed, per-operation message that is what the
//! presentation layer shows; the underlying cause is kept as the error source
//! for logging. Validation failures are local and never reach the network.

use std::fmt;

use thiserror::Error;

/// The unified error type for usersync operations.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A request to the remote service failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A draft or edit patch is missing a required field.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Input validation errors (bad base path, bad identifier).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// The HTTP client could not be set up.
    #[error("client setup failed: {message}")]
    Setup { message: String },
}

/// The remote operation a [`TransportError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `GET {base}`
    Load,
    /// `POST {base}`
    Create,
    /// `PUT {base}/{id}`
    Update,
    /// `DELETE {base}/{id}`
    Delete,
}

impl Operation {
    /// The fixed message surfaced for a failure of this operation.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Load => "Failed to fetch users",
            Operation::Create => "Failed to create user",
            Operation::Update => "Failed to update user",
            Operation::Delete => "Failed to delete user",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Load => "load",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed request against the remote service.
///
/// `Display` yields only the per-operation message; the cause is available
/// through [`std::error::Error::source`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .operation.failure_message())]
pub struct TransportError {
    /// Which operation failed.
    pub operation: Operation,
    /// What went wrong underneath.
    #[source]
    pub cause: TransportCause,
}

impl TransportError {
    pub fn new(operation: Operation, cause: TransportCause) -> Self {
        Self { operation, cause }
    }

    /// Shorthand for a non-success HTTP status.
    pub fn status(operation: Operation, status: u16) -> Self {
        Self::new(operation, TransportCause::Status { status })
    }

    /// The message shown to the user.
    pub fn message(&self) -> &'static str {
        self.operation.failure_message()
    }
}

/// Underlying cause of a [`TransportError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportCause {
    /// The server answered outside the 2xx range.
    #[error("HTTP status {status}")]
    Status { status: u16 },

    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// The response body could not be decoded.
    #[error("could not decode response: {message}")]
    Decode { message: String },

    /// Any other HTTP client error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A required field of a draft or edit patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => f.write_str("name"),
            Field::Email => f.write_str("email"),
        }
    }
}

/// Raised when a submission has empty required fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    missing: Vec<Field>,
}

impl ValidationError {
    pub(crate) fn new(missing: Vec<Field>) -> Self {
        Self { missing }
    }

    /// The fields that were empty, in form order.
    pub fn missing(&self) -> &[Field] {
        &self.missing
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("please enter a value for ")?;
        for (i, field) in self.missing.iter().enumerate() {
            if i > 0 {
                f.write_str(" and ")?;
            }
            write!(f, "{}", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Input validation errors.
#[derive(Debug, Clone, Error)]
pub enum InvalidInputError {
    /// Invalid API base path or URL.
    #[error("invalid API path '{value}': {reason}")]
    ApiPath { value: String, reason: String },

    /// Invalid record identifier.
    #[error("invalid record id '{value}': {reason}")]
    RecordId { value: String, reason: String },
}
