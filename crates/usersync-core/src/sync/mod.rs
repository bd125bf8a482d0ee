//! Client-side synchronization of the record cache.
//!
//! [`SyncState`] composes the store, the in-flight guard, the error latch,
//! the draft and the edit slot; [`SyncController`] runs its transitions
//! around calls to a [`RecordService`](crate::RecordService).

mod controller;
mod guard;
mod latch;
mod outcome;
mod state;
mod store;
mod validate;
mod view;

pub use controller::SyncController;
pub use guard::{Marker, OperationGuard};
pub use latch::{ErrorChannel, Latched};
pub use outcome::{Outcome, SkipReason};
pub use state::SyncState;
pub use store::RecordStore;
pub use validate::validate;
pub use view::{ReadyView, RowView, View};
