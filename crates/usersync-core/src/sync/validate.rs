//! Field-completeness gate for drafts and edit patches.

use crate::error::{Field, ValidationError};
use crate::record::Draft;

/// Accept a draft iff `name` and `email` are both non-empty.
///
/// No trimming and no e-mail shape checks: `" "` is a valid name.
pub fn validate(draft: &Draft) -> Result<(), ValidationError> {
    let mut missing = Vec::new();
    if draft.name.is_empty() {
        missing.push(Field::Name);
    }
    if draft.email.is_empty() {
        missing.push(Field::Email);
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(missing))
    }
}
