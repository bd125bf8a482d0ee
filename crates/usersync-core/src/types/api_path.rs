//! API base path type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

use super::RecordId;

/// A validated base URL for the users resource.
///
/// The collection lives at the base itself and individual records at
/// `{base}/{id}`.
///
/// # Example
///
/// ```
/// use usersync_core::{ApiPath, RecordId};
///
/// let api = ApiPath::resolve("http://localhost:3000", "/api/users").unwrap();
/// assert_eq!(api.collection_url(), "http://localhost:3000/api/users");
/// assert_eq!(api.record_url(&RecordId::from(7)), "http://localhost:3000/api/users/7");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiPath(Url);

impl ApiPath {
    /// Create an API path from an absolute URL, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not absolute or not http(s).
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiPath {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::from_url(url, s)
    }

    /// Resolve `path` against `origin`.
    ///
    /// An absolute `path` wins over the origin, so a full URL can be given
    /// wherever a path is accepted.
    pub fn resolve(origin: impl AsRef<str>, path: impl AsRef<str>) -> Result<Self, Error> {
        let path = path.as_ref();
        if let Ok(url) = Url::parse(path) {
            return Self::from_url(url, path);
        }

        let origin = origin.as_ref();
        let base = Url::parse(origin).map_err(|e| InvalidInputError::ApiPath {
            value: origin.to_string(),
            reason: e.to_string(),
        })?;
        let joined = base.join(path).map_err(|e| InvalidInputError::ApiPath {
            value: path.to_string(),
            reason: e.to_string(),
        })?;

        Self::from_url(joined, path)
    }

    fn from_url(mut url: Url, original: &str) -> Result<Self, Error> {
        Self::validate(&url, original)?;

        // Normalize: drop trailing slashes so `{base}/{id}` never doubles up
        let trimmed = url.path().trim_end_matches('/').to_string();
        url.set_path(&trimmed);

        Ok(Self(url))
    }

    /// URL for list and create requests.
    pub fn collection_url(&self) -> String {
        self.0.as_str().trim_end_matches('/').to_string()
    }

    /// URL for update and delete requests on one record.
    pub fn record_url(&self, id: &RecordId) -> String {
        let mut url = self.0.clone();
        // Only cannot-be-a-base URLs refuse segments, and validate() rejects those.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&id.to_string());
        }
        url.to_string()
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ApiPath {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(InvalidInputError::ApiPath {
                value: original.to_string(),
                reason: format!("unsupported scheme '{}'", scheme),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ApiPath {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiPath::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ApiPath {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_default_path_against_origin() {
        let api = ApiPath::resolve("http://localhost:3000", "/api/users").unwrap();
        assert_eq!(api.collection_url(), "http://localhost:3000/api/users");
    }

    #[test]
    fn absolute_path_overrides_origin() {
        let api = ApiPath::resolve("http://localhost:3000", "https://example.com/v2/people").unwrap();
        assert_eq!(api.collection_url(), "https://example.com/v2/people");
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let api = ApiPath::new("https://example.com/api/users/").unwrap();
        assert_eq!(api.collection_url(), "https://example.com/api/users");
        assert_eq!(
            api.record_url(&RecordId::from(3)),
            "https://example.com/api/users/3"
        );
    }

    #[test]
    fn record_url_encodes_text_ids() {
        let api = ApiPath::new("https://example.com/api/users").unwrap();
        assert_eq!(
            api.record_url(&RecordId::from("a b/c")),
            "https://example.com/api/users/a%20b%2Fc"
        );
    }

    #[test]
    fn rejects_non_http_scheme() {
        assert!(ApiPath::new("file:///tmp/users").is_err());
    }

    #[test]
    fn rejects_relative_without_valid_origin() {
        assert!(ApiPath::resolve("not a url", "/api/users").is_err());
        assert!(ApiPath::new("/api/users").is_err());
    }
}
