//! Where the users resource lives.

use tracing::debug;

use crate::Result;
use crate::types::ApiPath;

/// Environment variable holding the base path (or a full URL).
pub const API_PATH_ENV: &str = "USERS_API_PATH";

/// Environment variable holding the origin a relative base path resolves against.
pub const API_ORIGIN_ENV: &str = "USERS_API_ORIGIN";

pub const DEFAULT_API_PATH: &str = "/api/users";

pub const DEFAULT_API_ORIGIN: &str = "http://localhost:3000";

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub api: ApiPath,
}

impl SyncConfig {
    /// Build from explicit values, falling back to the defaults.
    pub fn new(origin: Option<&str>, path: Option<&str>) -> Result<Self> {
        let origin = origin.unwrap_or(DEFAULT_API_ORIGIN);
        let path = path.unwrap_or(DEFAULT_API_PATH);
        let api = ApiPath::resolve(origin, path)?;
        debug!(%api, "resolved API base");
        Ok(Self { api })
    }

    /// Read [`API_ORIGIN_ENV`] and [`API_PATH_ENV`]; unset or empty values use the defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Like [`SyncConfig::from_env`], reading variables through `lookup`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let read = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let origin = read(API_ORIGIN_ENV);
        let path = read(API_PATH_ENV);
        Self::new(origin.as_deref(), path.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_to_local_users_endpoint() {
        let config = SyncConfig::new(None, None).unwrap();
        assert_eq!(config.api.collection_url(), "http://localhost:3000/api/users");
    }

    #[test]
    fn path_override_is_resolved_against_origin() {
        let config = SyncConfig::new(Some("https://example.com"), Some("/v1/members")).unwrap();
        assert_eq!(config.api.collection_url(), "https://example.com/v1/members");
    }

    #[test]
    fn env_overrides_are_read() {
        let vars: HashMap<&str, &str> = [
            (API_ORIGIN_ENV, "https://users.example.com"),
            (API_PATH_ENV, "/v2/people/"),
        ]
        .into_iter()
        .collect();

        let config = SyncConfig::from_vars(|key| vars.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(
            config.api.collection_url(),
            "https://users.example.com/v2/people"
        );
    }

    #[test]
    fn empty_env_values_fall_back_to_defaults() {
        let config = SyncConfig::from_vars(|_| Some(String::new())).unwrap();
        assert_eq!(config, SyncConfig::new(None, None).unwrap());
    }

    #[test]
    fn from_env_defaults_when_unset() {
        // Skipped when the caller's environment sets either variable.
        if std::env::var(API_ORIGIN_ENV).is_err() && std::env::var(API_PATH_ENV).is_err() {
            assert_eq!(SyncConfig::from_env().unwrap(), SyncConfig::new(None, None).unwrap());
        }
    }

    #[test]
    fn invalid_origin_is_rejected() {
        assert!(SyncConfig::new(Some("::nope"), None).is_err());
    }
}
