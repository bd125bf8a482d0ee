//! In-flight markers for create, update and delete.

use crate::types::RecordId;

/// Identifies one in-flight marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    Create,
    Save(RecordId),
    Delete(RecordId),
}

/// Three independent markers, each `idle -> pending -> idle`.
///
/// Save and delete hold a single optional id each. A submission for the id
/// already pending is refused; a submission for another id takes the marker
/// over, and whichever request settles first returns it to idle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationGuard {
    creating: bool,
    saving: Option<RecordId>,
    deleting: Option<RecordId>,
}

impl OperationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the submission pending. Returns false if the same submission already is.
    pub fn try_acquire(&mut self, marker: &Marker) -> bool {
        match marker {
            Marker::Create => {
                if self.creating {
                    return false;
                }
                self.creating = true;
            }
            Marker::Save(id) => {
                if self.saving.as_ref() == Some(id) {
                    return false;
                }
                self.saving = Some(id.clone());
            }
            Marker::Delete(id) => {
                if self.deleting.as_ref() == Some(id) {
                    return false;
                }
                self.deleting = Some(id.clone());
            }
        }
        true
    }

    /// Return the marker to idle, whichever id currently holds it.
    pub fn release(&mut self, marker: &Marker) {
        match marker {
            Marker::Create => self.creating = false,
            Marker::Save(_) => self.saving = None,
            Marker::Delete(_) => self.deleting = None,
        }
    }

    pub fn is_creating(&self) -> bool {
        self.creating
    }

    pub fn saving(&self) -> Option<&RecordId> {
        self.saving.as_ref()
    }

    pub fn deleting(&self) -> Option<&RecordId> {
        self.deleting.as_ref()
    }

    pub fn is_saving(&self, id: &RecordId) -> bool {
        self.saving.as_ref() == Some(id)
    }

    pub fn is_deleting(&self, id: &RecordId) -> bool {
        self.deleting.as_ref() == Some(id)
    }

    /// True when every marker is idle.
    pub fn is_idle(&self) -> bool {
        !self.creating && self.saving.is_none() && self.deleting.is_none()
    }
}
