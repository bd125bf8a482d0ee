//! Ordered in-memory record cache.

use tracing::warn;

use crate::record::Record;
use crate::types::RecordId;

/// Records in arrival order, unique by id.
///
/// Order is the order of the last load with creates appended at the tail.
/// Replacements and removals never move the remaining entries. Every
/// mutation is total: a missing id is silently ignored, which is what keeps a
/// late update from resurrecting a record that was deleted meanwhile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the result of a list load, keeping the first of any duplicate ids.
    pub fn reset(&mut self, records: Vec<Record>) {
        let mut unique: Vec<Record> = Vec::with_capacity(records.len());
        for record in records {
            if unique.iter().any(|r| r.id == record.id) {
                warn!(id = %record.id, "dropping duplicate id from list response");
                continue;
            }
            unique.push(record);
        }
        self.records = unique;
    }

    /// Read-only copy of the current contents.
    pub fn snapshot(&self) -> Vec<Record> {
        self.records.clone()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Add a record at the tail.
    ///
    /// If the id is already present the existing entry is replaced in place
    /// instead, so ids stay unique.
    pub fn append(&mut self, record: Record) {
        if let Some(slot) = self.records.iter_mut().find(|r| r.id == record.id) {
            warn!(id = %record.id, "appended id already cached; replacing in place");
            *slot = record;
            return;
        }
        self.records.push(record);
    }

    /// Swap the record with `id` for `record` without moving it.
    pub fn replace_by_id(&mut self, id: &RecordId, record: Record) {
        if let Some(slot) = self.records.iter_mut().find(|r| &r.id == id) {
            *slot = record;
        }
    }

    /// Drop the record with `id`.
    pub fn remove_by_id(&mut self, id: &RecordId) {
        self.records.retain(|r| &r.id != id);
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
