//! HTTP-backed record service.

use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, instrument};

use usersync_core::error::{Operation, TransportError};
use usersync_core::record::{Acknowledgement, Draft, Record};
use usersync_core::traits::RecordService;
use usersync_core::types::{ApiPath, RecordId};
use usersync_core::{Result, SyncConfig};

use crate::client::HttpClient;

/// A [`RecordService`] speaking JSON to a REST collection.
///
/// | operation | request              |
/// |-----------|----------------------|
/// | list      | `GET {base}`         |
/// | create    | `POST {base}`        |
/// | update    | `PUT {base}/{id}`    |
/// | delete    | `DELETE {base}/{id}` |
#[derive(Debug, Clone)]
pub struct HttpRecordService {
    api: ApiPath,
    client: HttpClient,
}

impl HttpRecordService {
    /// Create a service for the collection at `api`.
    pub fn new(api: ApiPath) -> Result<Self> {
        Ok(Self::with_client(api, HttpClient::new()?))
    }

    pub fn with_client(api: ApiPath, client: HttpClient) -> Self {
        Self { api, client }
    }

    /// Create a service from resolved configuration.
    pub fn from_config(config: &SyncConfig) -> Result<Self> {
        Self::new(config.api.clone())
    }

    /// Returns the base this service talks to.
    pub fn api(&self) -> &ApiPath {
        &self.api
    }
}

#[async_trait]
impl RecordService for HttpRecordService {
    #[instrument(skip(self), fields(api = %self.api))]
    async fn list(&self) -> std::result::Result<Vec<Record>, TransportError> {
        debug!("Listing records");
        self.client
            .get(Operation::Load, &self.api.collection_url())
            .await
    }

    #[instrument(skip(self, draft), fields(api = %self.api))]
    async fn create(&self, draft: &Draft) -> std::result::Result<Record, TransportError> {
        debug!("Creating record");
        self.client
            .send(
                Operation::Create,
                Method::POST,
                &self.api.collection_url(),
                draft,
            )
            .await
    }

    #[instrument(skip(self, patch), fields(api = %self.api, %id))]
    async fn update(
        &self,
        id: &RecordId,
        patch: &Draft,
    ) -> std::result::Result<Record, TransportError> {
        debug!("Updating record");
        self.client
            .send(Operation::Update, Method::PUT, &self.api.record_url(id), patch)
            .await
    }

    #[instrument(skip(self), fields(api = %self.api, %id))]
    async fn delete(&self, id: &RecordId) -> std::result::Result<Acknowledgement, TransportError> {
        debug!("Deleting record");
        self.client
            .delete(Operation::Delete, &self.api.record_url(id))
            .await
    }
}
