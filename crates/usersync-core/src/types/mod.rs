//! Core usersync types.
//!
//! These types enforce their invariants at construction time.

mod api_path;
mod record_id;

pub use api_path::ApiPath;
pub use record_id::RecordId;
