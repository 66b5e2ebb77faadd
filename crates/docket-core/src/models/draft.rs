use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use super::quantity::{self, DEFAULT_QUANTITY};
use crate::schema::{DraftField, ItemField};

/// One row of delivered goods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    #[serde(default)]
    pub part_number: String,
    #[serde(default)]
    pub description: String,
    /// Always at least 1.
    #[serde(
        default = "quantity::default_quantity",
        deserialize_with = "quantity::deserialize"
    )]
    pub quantity: u32,
}

impl Default for LineItem {
    fn default() -> Self {
        Self {
            part_number: String::new(),
            description: String::new(),
            quantity: DEFAULT_QUANTITY,
        }
    }
}

impl LineItem {
    /// Return a copy with one field replaced. Quantity text is coerced.
    pub fn with_field(&self, field: ItemField, value: &str) -> LineItem {
        let mut item = self.clone();
        match field {
            ItemField::PartNumber => item.part_number = value.to_string(),
            ItemField::Description => item.description = value.to_string(),
            ItemField::Quantity => item.quantity = quantity::coerce(value),
        }
        item
    }
}

/// The receipt record being edited.
///
/// Every operation borrows the current draft and returns the next one.
/// `items` is never empty: construction, deserialization and
/// [`remove_item`](Self::remove_item) all preserve at least one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReceiptDraft {
    /// Calendar date as `YYYY-MM-DD`; may be empty.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub recipient_address: String,
    #[serde(default)]
    pub delivery_note_number: String,
    #[serde(default)]
    pub delivered_by: String,
    #[serde(default)]
    pub contact_info: String,
    #[serde(default)]
    pub order_reference: String,
    #[serde(default)]
    pub special_instructions: String,
    #[serde(default = "default_items", deserialize_with = "deserialize_items")]
    pub items: Vec<LineItem>,
}

impl Default for ReceiptDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptDraft {
    /// A fresh draft dated today (local time zone).
    pub fn new() -> Self {
        Self::new_on(today())
    }

    /// A fresh draft with the given date.
    pub fn new_on(date: jiff::civil::Date) -> Self {
        Self {
            date: date.to_string(),
            recipient_name: String::new(),
            recipient_address: String::new(),
            delivery_note_number: String::new(),
            delivered_by: String::new(),
            contact_info: String::new(),
            order_reference: String::new(),
            special_instructions: String::new(),
            items: default_items(),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Date => &self.date,
            DraftField::RecipientName => &self.recipient_name,
            DraftField::RecipientAddress => &self.recipient_address,
            DraftField::DeliveryNoteNumber => &self.delivery_note_number,
            DraftField::DeliveredBy => &self.delivered_by,
            DraftField::ContactInfo => &self.contact_info,
            DraftField::OrderReference => &self.order_reference,
            DraftField::SpecialInstructions => &self.special_instructions,
        }
    }

    fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Date => &mut self.date,
            DraftField::RecipientName => &mut self.recipient_name,
            DraftField::RecipientAddress => &mut self.recipient_address,
            DraftField::DeliveryNoteNumber => &mut self.delivery_note_number,
            DraftField::DeliveredBy => &mut self.delivered_by,
            DraftField::ContactInfo => &mut self.contact_info,
            DraftField::OrderReference => &mut self.order_reference,
            DraftField::SpecialInstructions => &mut self.special_instructions,
        }
    }

    /// Replace one scalar field.
    pub fn update_field(&self, field: DraftField, value: impl Into<String>) -> ReceiptDraft {
        let mut next = self.clone();
        *next.field_mut(field) = value.into();
        next
    }

    /// Replace one field of the item at `index`. Out of bounds is a no-op.
    pub fn update_item(&self, index: usize, field: ItemField, value: &str) -> ReceiptDraft {
        let mut next = self.clone();
        if let Some(item) = next.items.get_mut(index) {
            *item = item.with_field(field, value);
        }
        next
    }

    /// Append an empty item with quantity 1.
    pub fn add_item(&self) -> ReceiptDraft {
        let mut next = self.clone();
        next.items.push(LineItem::default());
        next
    }

    /// Remove the item at `index`, shifting later items down by one.
    ///
    /// No-op when only one item is left or `index` is out of bounds.
    pub fn remove_item(&self, index: usize) -> ReceiptDraft {
        let mut next = self.clone();
        if next.items.len() > 1 && index < next.items.len() {
            next.items.remove(index);
        }
        next
    }

    /// The initial shape: today's date, empty text, one default item.
    pub fn reset(&self) -> ReceiptDraft {
        Self::new()
    }

    pub fn reset_on(&self, date: jiff::civil::Date) -> ReceiptDraft {
        Self::new_on(date)
    }

    /// Derived on demand, never stored.
    pub fn total_items(&self) -> usize {
        self.items.len()
    }
}

/// The current civil date in the system time zone.
pub fn today() -> jiff::civil::Date {
    jiff::Zoned::now().date()
}

fn default_items() -> Vec<LineItem> {
    vec![LineItem::default()]
}

fn deserialize_items<'de, D>(deserializer: D) -> Result<Vec<LineItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Vec::<LineItem>::deserialize(deserializer)?;
    if items.is_empty() {
        Ok(default_items())
    } else {
        Ok(items)
    }
}
