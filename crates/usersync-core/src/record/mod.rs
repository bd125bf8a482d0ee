//! Record and draft types.
//!
//! This module defines the payloads exchanged with the remote service.
//! The operations themselves live on [`RecordService`](crate::RecordService).

mod types;

pub use types::{Acknowledgement, Draft, Record};
