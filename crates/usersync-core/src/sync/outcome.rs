//! Result of a user-initiated submission.

use std::fmt;

use crate::error::{TransportError, ValidationError};

/// What happened to a submission.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The request succeeded and its result was merged into the store.
    Applied,
    /// A required field was empty; nothing was sent and the dialog is open.
    Invalid(ValidationError),
    /// The submission was dropped without a request.
    Skipped(SkipReason),
    /// The request failed; the store is unchanged and the latch is set.
    Failed(TransportError),
}

/// Why a submission was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A failure is latched; the interactive surface is gone.
    Latched,
    /// The operation's in-flight marker is pending.
    InFlight,
    /// No edit slot is open for the record.
    NotEditing,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Latched => f.write_str("a previous request failed"),
            SkipReason::InFlight => f.write_str("a request is already in flight"),
            SkipReason::NotEditing => f.write_str("the record is not open for editing"),
        }
    }
}
