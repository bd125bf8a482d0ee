//! Record payload types.

use serde::{Deserialize, Serialize};

use crate::types::RecordId;

/// A persisted user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Server-assigned, immutable identifier.
    pub id: RecordId,
    pub name: String,
    pub email: String,
}

impl Record {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// The editable fields of this record, as sent in an update body.
    pub fn fields(&self) -> Draft {
        Draft {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Unsaved `{name, email}` payload.
///
/// Used both for the creation form and as the body of an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub email: String,
}

impl Draft {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Body returned by a successful delete.
///
/// Its shape is server-defined; it is kept only for logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Acknowledgement(pub serde_json::Value);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_ignores_unknown_fields() {
        let record: Record = serde_json::from_value(json!({
            "id": 7,
            "name": "Ann",
            "email": "ann@x.com",
            "createdAt": "2024-01-01"
        }))
        .unwrap();
        assert_eq!(record, Record::new(7, "Ann", "ann@x.com"));
    }

    #[test]
    fn draft_serializes_as_name_and_email_only() {
        let body = serde_json::to_value(Draft::new("Bo", "bo@x.com")).unwrap();
        assert_eq!(body, json!({"name": "Bo", "email": "bo@x.com"}));
    }
}
