//! The single writer of the session draft.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::draft::ReceiptDraft;
use crate::schema::{DraftField, ItemField};

/// One user edit, as sent by a form or typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "op", rename_all = "snake_case")]
#[ts(export)]
pub enum Edit {
    UpdateField {
        field: DraftField,
        value: String,
    },
    UpdateItem {
        index: usize,
        field: ItemField,
        value: String,
    },
    AddItem,
    RemoveItem {
        index: usize,
    },
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Changed,
    Unchanged,
}

/// Owns the draft for one session.
///
/// Readers get a shared borrow through [`draft`](Self::draft); the only way
/// to change the draft is [`apply`](Self::apply).
#[derive(Debug, Clone, Default)]
pub struct DraftController {
    draft: ReceiptDraft,
}

impl DraftController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft(draft: ReceiptDraft) -> Self {
        Self { draft }
    }

    pub fn draft(&self) -> &ReceiptDraft {
        &self.draft
    }

    pub fn apply(&mut self, edit: &Edit) -> EditOutcome {
        let next = match edit {
            Edit::UpdateField { field, value } => self.draft.update_field(*field, value.as_str()),
            Edit::UpdateItem {
                index,
                field,
                value,
            } => self.draft.update_item(*index, *field, value),
            Edit::AddItem => self.draft.add_item(),
            Edit::RemoveItem { index } => self.draft.remove_item(*index),
            Edit::Reset => self.draft.reset(),
        };

        if next == self.draft {
            return EditOutcome::Unchanged;
        }
        self.draft = next;
        EditOutcome::Changed
    }

    /// Consume the controller at session end.
    pub fn into_draft(self) -> ReceiptDraft {
        self.draft
    }
}
