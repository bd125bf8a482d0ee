//! JSON-over-HTTP client.

use reqwest::{Method, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use usersync_core::error::{Error, Operation, TransportCause, TransportError};

/// Thin wrapper over a shared `reqwest::Client`.
///
/// Every method performs exactly one request and maps any failure to a
/// [`TransportError`] tagged with the caller's [`Operation`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("usersync/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Setup {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// `GET url`, decoding a JSON body.
    #[instrument(skip(self))]
    pub async fn get<R>(&self, op: Operation, url: &str) -> Result<R, TransportError>
    where
        R: DeserializeOwned,
    {
        debug!("GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport(op, e))?;

        self.handle_response(op, response).await
    }

    /// Send a JSON body with `method`, decoding a JSON body.
    #[instrument(skip(self, body))]
    pub async fn send<B, R>(
        &self,
        op: Operation,
        method: Method,
        url: &str,
        body: &B,
    ) -> Result<R, TransportError>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!("sending JSON body");
        trace!(?body, "request body");

        let response = self
            .client
            .request(method, url)
            .json(body)
            .send()
            .await
            .map_err(|e| transport(op, e))?;

        self.handle_response(op, response).await
    }

    /// `DELETE url`, decoding a JSON body.
    #[instrument(skip(self))]
    pub async fn delete<R>(&self, op: Operation, url: &str) -> Result<R, TransportError>
    where
        R: DeserializeOwned,
    {
        debug!("DELETE");
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|e| transport(op, e))?;

        self.handle_response(op, response).await
    }

    /// Accept any 2xx and decode its body; anything else is a status failure.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        op: Operation,
        response: reqwest::Response,
    ) -> Result<R, TransportError> {
        let status = response.status();
        trace!(status = %status, "response");

        if !status.is_success() {
            return Err(status_error(op, status));
        }

        let bytes = response.bytes().await.map_err(|e| transport(op, e))?;
        serde_json::from_slice(&bytes).map_err(|e| {
            TransportError::new(
                op,
                TransportCause::Decode {
                    message: e.to_string(),
                },
            )
        })
    }
}

fn status_error(op: Operation, status: StatusCode) -> TransportError {
    TransportError::status(op, status.as_u16())
}

/// Classify a `reqwest` failure.
fn transport(op: Operation, err: reqwest::Error) -> TransportError {
    let cause = if err.is_timeout() {
        TransportCause::Timeout
    } else if err.is_connect() {
        TransportCause::Connection {
            message: err.to_string(),
        }
    } else if err.is_decode() {
        TransportCause::Decode {
            message: err.to_string(),
        }
    } else {
        TransportCause::Http {
            message: err.to_string(),
        }
    };
    TransportError::new(op, cause)
}
