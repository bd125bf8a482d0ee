//! What the presentation layer renders.

use std::fmt;

use crate::record::{Draft, Record};

/// Projection of [`SyncState`](super::SyncState) for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// A failure is latched; nothing else may be shown.
    Failed { message: String },
    /// The interactive list.
    Ready(ReadyView),
}

impl View {
    pub fn is_failed(&self) -> bool {
        matches!(self, View::Failed { .. })
    }
}

/// The creation form plus one row per cached record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyView {
    pub draft: Draft,
    /// A create is in flight; the submit control is disabled.
    pub creating: bool,
    pub dialog_open: bool,
    pub rows: Vec<RowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub record: Record,
    /// Unsaved values when this row is open for editing.
    pub editing: Option<Draft>,
    pub saving: bool,
    pub deleting: bool,
    pub can_edit: bool,
    pub can_cancel: bool,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Failed { message } => write!(f, "Failed to load: {}", message),
            View::Ready(view) => {
                for row in &view.rows {
                    writeln!(f, "{}", row)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for RowView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.editing {
            Some(draft) => write!(
                f,
                "{} [editing] {} <{}>",
                self.record.id, draft.name, draft.email
            )?,
            None => write!(
                f,
                "{} {} <{}>",
                self.record.id, self.record.name, self.record.email
            )?,
        }
        if self.saving {
            f.write_str(" (saving...)")?;
        }
        if self.deleting {
            f.write_str(" (deleting...)")?;
        }
        Ok(())
    }
}
