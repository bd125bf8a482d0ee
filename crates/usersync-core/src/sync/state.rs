//! Composed synchronization state and its transitions.
//!
//! Every user interaction is a method on [`SyncState`] that runs to completion
//! without suspending. A network round trip is split into a `begin_*` step
//! that validates and admits the submission and a `finish_*` step that merges
//! the result. Guard release is separate (see [`SyncState::release`]) so that
//! the caller can tie it to scope exit.

use tracing::debug;

use crate::error::TransportError;
use crate::record::{Draft, Record};
use crate::types::RecordId;

use super::guard::{Marker, OperationGuard};
use super::latch::ErrorChannel;
use super::outcome::{Outcome, SkipReason};
use super::store::RecordStore;
use super::validate::validate;
use super::view::{ReadyView, RowView, View};

/// Everything the interaction layer keeps between events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncState {
    store: RecordStore,
    guard: OperationGuard,
    errors: ErrorChannel,
    draft: Draft,
    editing: Option<Record>,
    dialog_open: bool,
    created: Option<RecordId>,
}

impl SyncState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn guard(&self) -> &OperationGuard {
        &self.guard
    }

    pub fn errors(&self) -> &ErrorChannel {
        &self.errors
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The record currently open for in-place editing.
    pub fn editing(&self) -> Option<&Record> {
        self.editing.as_ref()
    }

    /// Whether the missing-fields dialog is showing.
    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// The record the most recent successful create returned, as cached.
    pub fn last_created(&self) -> Option<&Record> {
        self.created.as_ref().and_then(|id| self.store.get(id))
    }

    // ------------------------------------------------------------------
    // Load
    // ------------------------------------------------------------------

    /// Merge a list response. A failure trips the latch; success never clears it.
    pub fn finish_load(&mut self, result: Result<Vec<Record>, TransportError>) -> Outcome {
        match result {
            Ok(records) => {
                debug!(count = records.len(), "loaded records");
                self.store.reset(records);
                Outcome::Applied
            }
            Err(err) => self.fail(err),
        }
    }

    // ------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_draft_email(&mut self, email: impl Into<String>) {
        self.draft.email = email.into();
    }

    /// Validate the draft and admit a create. Returns the body to send.
    pub fn begin_create(&mut self) -> Result<Draft, Outcome> {
        self.ensure_interactive()?;
        let draft = self.draft.clone();
        self.check(&draft)?;
        self.admit(&Marker::Create)?;
        Ok(draft)
    }

    pub fn finish_create(&mut self, result: Result<Record, TransportError>) -> Outcome {
        match result {
            Ok(record) => {
                debug!(id = %record.id, "created record");
                self.created = Some(record.id.clone());
                self.store.append(record);
                self.draft = Draft::default();
                Outcome::Applied
            }
            Err(err) => self.fail(err),
        }
    }

    // ------------------------------------------------------------------
    // Edit / update
    // ------------------------------------------------------------------

    /// Open the stored record `id` for editing.
    ///
    /// Refused while latched, while a create is pending, while `id` is being
    /// deleted, or when `id` is not cached.
    pub fn begin_edit(&mut self, id: &RecordId) -> bool {
        if self.errors.is_set() || self.guard.is_creating() || self.guard.is_deleting(id) {
            return false;
        }
        match self.store.get(id) {
            Some(record) => {
                self.editing = Some(record.clone());
                true
            }
            None => false,
        }
    }

    pub fn set_edit_name(&mut self, name: impl Into<String>) {
        if let Some(slot) = self.editing.as_mut() {
            slot.name = name.into();
        }
    }

    pub fn set_edit_email(&mut self, email: impl Into<String>) {
        if let Some(slot) = self.editing.as_mut() {
            slot.email = email.into();
        }
    }

    /// Close the edit slot. Refused while the slot's record is saving.
    pub fn cancel_edit(&mut self) -> bool {
        match &self.editing {
            Some(slot) if self.guard.is_saving(&slot.id) => false,
            Some(_) => {
                self.editing = None;
                true
            }
            None => false,
        }
    }

    /// Validate the edit slot for `id` and admit a save. Returns the patch to send.
    pub fn begin_update(&mut self, id: &RecordId) -> Result<Draft, Outcome> {
        self.ensure_interactive()?;
        let patch = match &self.editing {
            Some(slot) if &slot.id == id => slot.fields(),
            _ => return Err(Outcome::Skipped(SkipReason::NotEditing)),
        };
        self.check(&patch)?;
        self.admit(&Marker::Save(id.clone()))?;
        Ok(patch)
    }

    pub fn finish_update(
        &mut self,
        id: &RecordId,
        result: Result<Record, TransportError>,
    ) -> Outcome {
        match result {
            Ok(record) => {
                debug!(%id, "updated record");
                self.store.replace_by_id(id, record);
                // Closes whichever row is open, even if the slot moved during the save.
                self.editing = None;
                Outcome::Applied
            }
            Err(err) => self.fail(err),
        }
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    pub fn begin_delete(&mut self, id: &RecordId) -> Result<(), Outcome> {
        self.ensure_interactive()?;
        self.admit(&Marker::Delete(id.clone()))
    }

    pub fn finish_delete(&mut self, id: &RecordId, result: Result<(), TransportError>) -> Outcome {
        match result {
            Ok(()) => {
                debug!(%id, "deleted record");
                self.store.remove_by_id(id);
                Outcome::Applied
            }
            Err(err) => self.fail(err),
        }
    }

    // ------------------------------------------------------------------
    // Shared
    // ------------------------------------------------------------------

    /// Return `marker` to idle. Called exactly once per admitted submission.
    pub fn release(&mut self, marker: &Marker) {
        self.guard.release(marker);
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog_open = false;
    }

    /// Project the state into what a view should render.
    pub fn view(&self) -> View {
        if let Some(message) = self.errors.message() {
            return View::Failed {
                message: message.to_string(),
            };
        }

        let rows = self
            .store
            .records()
            .iter()
            .map(|record| {
                let saving = self.guard.is_saving(&record.id);
                let deleting = self.guard.is_deleting(&record.id);
                RowView {
                    record: record.clone(),
                    editing: self
                        .editing
                        .as_ref()
                        .filter(|slot| slot.id == record.id)
                        .map(Record::fields),
                    saving,
                    deleting,
                    can_edit: !self.guard.is_creating() && !deleting,
                    can_cancel: !saving,
                }
            })
            .collect();

        View::Ready(ReadyView {
            draft: self.draft.clone(),
            creating: self.guard.is_creating(),
            dialog_open: self.dialog_open,
            rows,
        })
    }

    fn ensure_interactive(&self) -> Result<(), Outcome> {
        if self.errors.is_set() {
            return Err(Outcome::Skipped(SkipReason::Latched));
        }
        Ok(())
    }

    fn check(&mut self, fields: &Draft) -> Result<(), Outcome> {
        validate(fields).map_err(|err| {
            self.dialog_open = true;
            Outcome::Invalid(err)
        })
    }

    fn admit(&mut self, marker: &Marker) -> Result<(), Outcome> {
        if self.guard.try_acquire(marker) {
            Ok(())
        } else {
            debug!(?marker, "submission already in flight");
            Err(Outcome::Skipped(SkipReason::InFlight))
        }
    }

    fn fail(&mut self, err: TransportError) -> Outcome {
        self.errors.trip(&err);
        Outcome::Failed(err)
    }
}
