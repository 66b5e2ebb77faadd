use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Wire names of the draft fields, as used by the browser form and the
/// serialized draft.
pub mod field {
    pub const DATE: &str = "date";
    pub const RECIPIENT_NAME: &str = "recipientName";
    pub const RECIPIENT_ADDRESS: &str = "recipientAddress";
    pub const DELIVERY_NOTE_NUMBER: &str = "deliveryNoteNumber";
    pub const DELIVERED_BY: &str = "deliveredBy";
    pub const CONTACT_INFO: &str = "contactInfo";
    pub const ORDER_REFERENCE: &str = "orderReference";
    pub const SPECIAL_INSTRUCTIONS: &str = "specialInstructions";
    pub const ITEMS: &str = "items";
}

/// Wire names of the line item fields.
pub mod item_field {
    pub const PART_NUMBER: &str = "partNumber";
    pub const DESCRIPTION: &str = "description";
    pub const QUANTITY: &str = "quantity";
}

/// A scalar field of a [`ReceiptDraft`](crate::models::draft::ReceiptDraft).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum DraftField {
    Date,
    RecipientName,
    RecipientAddress,
    DeliveryNoteNumber,
    DeliveredBy,
    ContactInfo,
    OrderReference,
    SpecialInstructions,
}

impl DraftField {
    pub const COUNT: usize = 8;

    pub const ALL: [DraftField; Self::COUNT] = [
        DraftField::Date,
        DraftField::RecipientName,
        DraftField::RecipientAddress,
        DraftField::DeliveryNoteNumber,
        DraftField::DeliveredBy,
        DraftField::ContactInfo,
        DraftField::OrderReference,
        DraftField::SpecialInstructions,
    ];

    /// Position in [`DraftField::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DraftField::Date => field::DATE,
            DraftField::RecipientName => field::RECIPIENT_NAME,
            DraftField::RecipientAddress => field::RECIPIENT_ADDRESS,
            DraftField::DeliveryNoteNumber => field::DELIVERY_NOTE_NUMBER,
            DraftField::DeliveredBy => field::DELIVERED_BY,
            DraftField::ContactInfo => field::CONTACT_INFO,
            DraftField::OrderReference => field::ORDER_REFERENCE,
            DraftField::SpecialInstructions => field::SPECIAL_INSTRUCTIONS,
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DraftField {
    type Err = CoreError;

    /// Accepts the camelCase wire name or its snake_case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        DraftField::ALL
            .into_iter()
            .find(|f| normalize(f.as_str()) == wanted)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

/// A field of a [`LineItem`](crate::models::draft::LineItem).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum ItemField {
    PartNumber,
    Description,
    Quantity,
}

impl ItemField {
    pub const ALL: [ItemField; 3] = [
        ItemField::PartNumber,
        ItemField::Description,
        ItemField::Quantity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemField::PartNumber => item_field::PART_NUMBER,
            ItemField::Description => item_field::DESCRIPTION,
            ItemField::Quantity => item_field::QUANTITY,
        }
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        ItemField::ALL
            .into_iter()
            .find(|f| normalize(f.as_str()) == wanted)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

// "recipient_name", "recipientName" and "RecipientName" all compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
