//! Core traits for the remote record service.

mod service;

pub use service::RecordService;
