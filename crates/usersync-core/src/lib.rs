//! usersync-core - Record cache, guards and error latch for a remote users API.
//!
//! The remote service is abstracted behind [`RecordService`]; everything the
//! interaction layer keeps between events lives in one [`SyncState`] value,
//! driven by a [`SyncController`].
//!
//! # Example
//!
//! ```no_run
//! use usersync_core::{Outcome, RecordService, SyncController, View};
//!
//! # async fn example(service: impl RecordService) {
//! let controller = SyncController::new(service);
//! let _ = controller.load().await;
//!
//! controller.set_draft_name("Ann");
//! controller.set_draft_email("ann@x.com");
//! if let Outcome::Invalid(err) = controller.create().await {
//!     eprintln!("{}", err);
//! }
//!
//! match controller.view() {
//!     View::Failed { message } => eprintln!("Failed to load: {}", message),
//!     View::Ready(view) => println!("{} users", view.rows.len()),
//! }
//! # }
//! ```

pub mod config;
pub mod error;
pub mod record;
pub mod sync;
pub mod traits;
pub mod types;

pub use config::SyncConfig;
pub use error::{Error, Operation, TransportCause, TransportError, ValidationError};
pub use record::{Acknowledgement, Draft, Record};
pub use sync::{Outcome, RecordStore, SkipReason, SyncController, SyncState, View};
pub use traits::RecordService;
pub use types::{ApiPath, RecordId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
