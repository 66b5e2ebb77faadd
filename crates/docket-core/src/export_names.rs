//! Export filename conventions.
//!
//! Pure string functions. Every exported artifact of a draft shares one
//! stem derived from its delivery note number.

use crate::models::draft::ReceiptDraft;

pub const FILE_PREFIX: &str = "delivery-receipt";

/// Used in place of an empty delivery note number.
pub const FALLBACK_TOKEN: &str = "draft";

/// `delivery-receipt-<note number or "draft">`, safe as one path component.
pub fn stem(draft: &ReceiptDraft) -> String {
    let number = draft.delivery_note_number.trim();
    if number.is_empty() {
        return format!("{FILE_PREFIX}-{FALLBACK_TOKEN}");
    }
    format!("{FILE_PREFIX}-{}", sanitize(number))
}

pub fn pdf(draft: &ReceiptDraft) -> String {
    format!("{}.pdf", stem(draft))
}

pub fn docx(draft: &ReceiptDraft) -> String {
    format!("{}.docx", stem(draft))
}

pub fn html(draft: &ReceiptDraft) -> String {
    format!("{}.html", stem(draft))
}

fn sanitize(component: &str) -> String {
    component
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '-'
            }
        })
        .collect()
}
