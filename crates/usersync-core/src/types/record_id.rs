//! Server-assigned record identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// An opaque record identifier assigned by the remote service.
///
/// Servers send either JSON numbers or JSON strings; both are kept in their
/// original form so they serialize back unchanged. Two ids are equal when
/// their textual forms match, so `7` and `"7"` address the same record.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(serde_json::Number),
    Text(String),
}

impl RecordId {
    /// Take an id typed by a user. Surrounding whitespace is dropped; the rest
    /// is kept verbatim, so `007` stays `007`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref().trim();
        if s.is_empty() {
            return Err(InvalidInputError::RecordId {
                value: s.to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        Ok(RecordId::Text(s.to_string()))
    }
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RecordId::Number(a), RecordId::Number(b)) => a == b,
            (RecordId::Text(a), RecordId::Text(b)) => a == b,
            (RecordId::Number(n), RecordId::Text(t)) | (RecordId::Text(t), RecordId::Number(n)) => {
                *t == n.to_string()
            }
        }
    }
}

impl Eq for RecordId {}

impl Hash for RecordId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            RecordId::Number(n) => n.to_string().hash(state),
            RecordId::Text(t) => t.hash(state),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => fmt::Display::fmt(n, f),
            RecordId::Text(t) => f.write_str(t),
        }
    }
}

impl FromStr for RecordId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n.into())
    }
}

impl From<i32> for RecordId {
    fn from(n: i32) -> Self {
        RecordId::Number(n.into())
    }
}

impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        RecordId::Number(n.into())
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deserializes_numbers_and_strings() {
        let n: RecordId = serde_json::from_str("7").unwrap();
        let t: RecordId = serde_json::from_str("\"65f1c0\"").unwrap();
        assert!(matches!(n, RecordId::Number(ref n) if n.as_i64() == Some(7)));
        assert!(matches!(t, RecordId::Text(ref s) if s == "65f1c0"));
    }

    #[test]
    fn serializes_in_original_form() {
        assert_eq!(serde_json::to_string(&RecordId::from(7)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&RecordId::from("7")).unwrap(), "\"7\"");
    }

    #[test]
    fn numeric_and_textual_forms_are_equal() {
        assert_eq!(RecordId::from(7), RecordId::from("7"));
        let mut set = HashSet::new();
        set.insert(RecordId::from(7));
        assert!(set.contains(&RecordId::from("7")));
    }

    #[test]
    fn numbers_outside_i64_round_trip() {
        let big: RecordId = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(big, RecordId::from(u64::MAX));
        assert_eq!(serde_json::to_string(&big).unwrap(), "18446744073709551615");

        let frac: RecordId = serde_json::from_str("1.5").unwrap();
        assert_eq!(frac.to_string(), "1.5");
        assert_eq!(frac, RecordId::from("1.5"));
    }

    #[test]
    fn parses_user_input() {
        assert_eq!(RecordId::new(" 12 ").unwrap(), RecordId::from(12));
        assert_eq!(RecordId::new("abc").unwrap(), RecordId::from("abc"));
        assert!(RecordId::new("  ").is_err());
    }

    #[test]
    fn user_input_is_kept_verbatim() {
        let id = RecordId::new("007").unwrap();
        assert_eq!(id.to_string(), "007");
        assert_ne!(id, RecordId::from(7));

        let signed = RecordId::new("+7").unwrap();
        assert_eq!(signed.to_string(), "+7");
        assert_ne!(signed, RecordId::from(7));
    }
}
