//! One-way failure latch.

use tracing::{error, warn};

use crate::error::{Operation, TransportError};

/// The failure a latch holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Latched {
    pub operation: Operation,
    pub message: String,
}

/// Captures the first transport failure of the session.
///
/// There is no way to clear it; once tripped the consuming view shows only
/// the failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorChannel {
    latched: Option<Latched>,
}

impl ErrorChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `err` unless a failure is already latched.
    pub fn trip(&mut self, err: &TransportError) {
        if let Some(existing) = &self.latched {
            warn!(
                operation = %err.operation,
                cause = %err.cause,
                latched = %existing.message,
                "transport failure after latch; keeping the first"
            );
            return;
        }

        error!(operation = %err.operation, cause = %err.cause, "{}", err.message());
        self.latched = Some(Latched {
            operation: err.operation,
            message: err.message().to_string(),
        });
    }

    pub fn is_set(&self) -> bool {
        self.latched.is_some()
    }

    pub fn latched(&self) -> Option<&Latched> {
        self.latched.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.latched.as_ref().map(|l| l.message.as_str())
    }
}
