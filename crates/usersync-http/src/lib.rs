//! usersync-http - HTTP-backed record service.

mod client;
mod service;

pub use client::HttpClient;
pub use service::HttpRecordService;
