//! Remote record service trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::record::{Acknowledgement, Draft, Record};
use crate::types::RecordId;

/// The remote CRUD boundary.
///
/// Implementations issue exactly one request per call and never retry.
/// They do not touch local state; merging results is the caller's job.
#[async_trait]
pub trait RecordService: Send + Sync {
    /// Fetch every record, in server order.
    async fn list(&self) -> Result<Vec<Record>, TransportError>;

    /// Create a record from a draft; the response carries the new id.
    async fn create(&self, draft: &Draft) -> Result<Record, TransportError>;

    /// Replace the fields of the record identified by `id`.
    async fn update(&self, id: &RecordId, patch: &Draft) -> Result<Record, TransportError>;

    /// Delete the record identified by `id`.
    async fn delete(&self, id: &RecordId) -> Result<Acknowledgement, TransportError>;
}

#[async_trait]
impl<T> RecordService for Arc<T>
where
    T: RecordService + ?Sized,
{
    async fn list(&self) -> Result<Vec<Record>, TransportError> {
        (**self).list().await
    }

    async fn create(&self, draft: &Draft) -> Result<Record, TransportError> {
        (**self).create(draft).await
    }

    async fn update(&self, id: &RecordId, patch: &Draft) -> Result<Record, TransportError> {
        (**self).update(id, patch).await
    }

    async fn delete(&self, id: &RecordId) -> Result<Acknowledgement, TransportError> {
        (**self).delete(id).await
    }
}
