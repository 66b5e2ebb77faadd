//! The read-only projection of a draft that every renderer consumes.

use docket_core::models::draft::{LineItem, ReceiptDraft};
use docket_core::schema::DraftField;
use serde::Serialize;

use crate::layout::Layout;
use crate::policy::{self, FieldPolicy, PLACEHOLDER_DESCRIPTION, PLACEHOLDER_PART_NUMBER};

/// A value ready for display. `placeholder` marks sample text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub text: String,
    pub placeholder: bool,
}

impl FieldView {
    fn value(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            placeholder: false,
        }
    }

    fn sample(text: &str) -> Self {
        Self {
            text: text.to_string(),
            placeholder: true,
        }
    }

    fn or_sample(value: &str, sample: &str) -> Self {
        if policy::is_present(value) {
            Self::value(value)
        } else {
            Self::sample(sample)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    /// 1-based row number.
    pub position: usize,
    pub part_number: FieldView,
    pub description: FieldView,
    pub quantity: u32,
}

/// Hidden fields are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptView {
    pub layout: Layout,
    pub delivery_note_number: Option<FieldView>,
    pub date: Option<FieldView>,
    pub order_reference: Option<FieldView>,
    pub recipient_name: Option<FieldView>,
    pub recipient_address: Option<FieldView>,
    pub delivered_by: Option<FieldView>,
    pub contact_info: Option<FieldView>,
    pub special_instructions: Option<FieldView>,
    pub items: Vec<ItemView>,
    pub total_items: usize,
}

impl ReceiptView {
    pub fn project(draft: &ReceiptDraft, layout: Layout) -> Self {
        let policies = layout.policies();
        let resolve = |field: DraftField| -> Option<FieldView> {
            let raw = draft.field(field);
            if policy::is_present(raw) {
                let text = match field {
                    DraftField::Date => format_long_date(raw),
                    _ => raw.to_string(),
                };
                return Some(FieldView::value(text));
            }
            match policies.get(field) {
                FieldPolicy::AlwaysShowWithPlaceholder => {
                    Some(FieldView::sample(policy::placeholder(field)))
                }
                FieldPolicy::ShowOnlyIfPresent => None,
            }
        };

        Self {
            layout,
            delivery_note_number: resolve(DraftField::DeliveryNoteNumber),
            date: resolve(DraftField::Date),
            order_reference: resolve(DraftField::OrderReference),
            recipient_name: resolve(DraftField::RecipientName),
            recipient_address: resolve(DraftField::RecipientAddress),
            delivered_by: resolve(DraftField::DeliveredBy),
            contact_info: resolve(DraftField::ContactInfo),
            special_instructions: resolve(DraftField::SpecialInstructions),
            items: draft
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| project_item(i + 1, item))
                .collect(),
            total_items: draft.total_items(),
        }
    }
}

fn project_item(position: usize, item: &LineItem) -> ItemView {
    ItemView {
        position,
        part_number: FieldView::or_sample(&item.part_number, PLACEHOLDER_PART_NUMBER),
        description: FieldView::or_sample(&item.description, PLACEHOLDER_DESCRIPTION),
        quantity: item.quantity,
    }
}

/// `2024-03-05` → `March 5, 2024`. Text that is not a calendar date is
/// returned unchanged.
pub fn format_long_date(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.parse::<jiff::civil::Date>() {
        Ok(date) => date.strftime("%B %-d, %Y").to_string(),
        Err(_) => trimmed.to_string(),
    }
}
