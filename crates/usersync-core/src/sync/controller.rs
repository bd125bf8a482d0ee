//! Drives [`SyncState`] against a [`RecordService`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, instrument};

use crate::record::Draft;
use crate::traits::RecordService;
use crate::types::RecordId;

use super::guard::Marker;
use super::outcome::Outcome;
use super::state::SyncState;
use super::view::View;

/// Releases its marker when dropped, whether the request succeeded, failed
/// or the future was dropped mid-flight.
struct InFlight {
    state: Arc<Mutex<SyncState>>,
    marker: Marker,
}

impl InFlight {
    fn new(state: &Arc<Mutex<SyncState>>, marker: Marker) -> Self {
        Self {
            state: Arc::clone(state),
            marker,
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        lock(&self.state).release(&self.marker);
    }
}

fn lock(state: &Mutex<SyncState>) -> MutexGuard<'_, SyncState> {
    // Transitions never panic midway, so a poisoned state is still consistent.
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The synchronization controller a view talks to.
///
/// Submissions take `&self`, so several can be outstanding at once; the state
/// lock is held only for the synchronous `begin_*`/`finish_*` steps and never
/// across a request.
pub struct SyncController<S> {
    service: S,
    state: Arc<Mutex<SyncState>>,
}

impl<S: RecordService> SyncController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: Arc::new(Mutex::new(SyncState::new())),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// A copy of the current state.
    pub fn state(&self) -> SyncState {
        lock(&self.state).clone()
    }

    pub fn view(&self) -> View {
        lock(&self.state).view()
    }

    /// Fetch all records and replace the cache.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Outcome {
        let result = self.service.list().await;
        lock(&self.state).finish_load(result)
    }

    pub fn set_draft_name(&self, name: impl Into<String>) {
        lock(&self.state).set_draft_name(name);
    }

    pub fn set_draft_email(&self, email: impl Into<String>) {
        lock(&self.state).set_draft_email(email);
    }

    /// Submit the draft.
    #[instrument(skip(self))]
    pub async fn create(&self) -> Outcome {
        let draft = match lock(&self.state).begin_create() {
            Ok(draft) => draft,
            Err(outcome) => {
                debug!(?outcome, "create not submitted");
                return outcome;
            }
        };

        let ticket = InFlight::new(&self.state, Marker::Create);
        let result = self.service.create(&draft).await;
        // Merge under the lock first; the ticket takes the lock again to release.
        let outcome = lock(&self.state).finish_create(result);
        drop(ticket);
        outcome
    }

    pub fn begin_edit(&self, id: &RecordId) -> bool {
        lock(&self.state).begin_edit(id)
    }

    pub fn set_edit_name(&self, name: impl Into<String>) {
        lock(&self.state).set_edit_name(name);
    }

    pub fn set_edit_email(&self, email: impl Into<String>) {
        lock(&self.state).set_edit_email(email);
    }

    pub fn cancel_edit(&self) -> bool {
        lock(&self.state).cancel_edit()
    }

    /// Save the edit slot for `id`.
    #[instrument(skip(self), fields(%id))]
    pub async fn update(&self, id: &RecordId) -> Outcome {
        let patch: Draft = match lock(&self.state).begin_update(id) {
            Ok(patch) => patch,
            Err(outcome) => {
                debug!(?outcome, "update not submitted");
                return outcome;
            }
        };

        let ticket = InFlight::new(&self.state, Marker::Save(id.clone()));
        let result = self.service.update(id, &patch).await;
        let outcome = lock(&self.state).finish_update(id, result);
        drop(ticket);
        outcome
    }

    /// Delete the record `id`.
    #[instrument(skip(self), fields(%id))]
    pub async fn delete(&self, id: &RecordId) -> Outcome {
        if let Err(outcome) = lock(&self.state).begin_delete(id) {
            debug!(?outcome, "delete not submitted");
            return outcome;
        }

        let ticket = InFlight::new(&self.state, Marker::Delete(id.clone()));
        let result = self.service.delete(id).await.map(|ack| {
            debug!(?ack, "delete acknowledged");
        });
        let outcome = lock(&self.state).finish_delete(id, result);
        drop(ticket);
        outcome
    }

    pub fn dismiss_dialog(&self) {
        lock(&self.state).dismiss_dialog();
    }
}

impl<S> std::fmt::Debug for SyncController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncController")
            .field("state", &*lock(&self.state))
            .finish_non_exhaustive()
    }
}
