//! Field display policy and placeholder text.
//!
//! Each scalar field is either always shown (with sample text when empty)
//! or shown only when it has a value. The table is resolved once per
//! render; the draft itself is never touched.

use docket_core::schema::DraftField;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPolicy {
    AlwaysShowWithPlaceholder,
    ShowOnlyIfPresent,
}

/// One [`FieldPolicy`] per [`DraftField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyTable {
    policies: [FieldPolicy; DraftField::COUNT],
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self::always_show()
    }
}

impl PolicyTable {
    /// Every field visible, placeholders where empty.
    pub const fn always_show() -> Self {
        Self {
            policies: [FieldPolicy::AlwaysShowWithPlaceholder; DraftField::COUNT],
        }
    }

    pub fn with(mut self, field: DraftField, policy: FieldPolicy) -> Self {
        self.policies[field.index()] = policy;
        self
    }

    pub fn get(&self, field: DraftField) -> FieldPolicy {
        self.policies[field.index()]
    }
}

pub const PLACEHOLDER_PART_NUMBER: &str = "PN-XXXXX";
pub const PLACEHOLDER_DESCRIPTION: &str = "Product description";

/// Sample text shown in place of an empty field.
pub fn placeholder(field: DraftField) -> &'static str {
    match field {
        DraftField::Date => "January 1, 2024",
        DraftField::RecipientName => "Recipient Company Name",
        DraftField::RecipientAddress => "123 Business Street\nSuite 100\nCity, State 12345",
        DraftField::DeliveryNoteNumber => "DN-2024-0001",
        DraftField::DeliveredBy => "Driver Name",
        DraftField::ContactInfo => "contact@company.com",
        DraftField::OrderReference => "ORD-2024-0001",
        DraftField::SpecialInstructions => {
            "Any special delivery instructions, handling requirements, \
             or additional notes will appear here..."
        }
    }
}

/// Whitespace-only values count as empty.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}
