use docket_core::export_names;
use docket_core::models::draft::ReceiptDraft;
use docket_core::schema::{DraftField, ItemField};

#[test]
fn fallback_when_note_number_empty() {
    let draft = ReceiptDraft::new_on(jiff::civil::date(2024, 1, 1));
    assert_eq!(export_names::pdf(&draft), "delivery-receipt-draft.pdf");

    let blank = draft.update_field(DraftField::DeliveryNoteNumber, "   ");
    assert_eq!(export_names::docx(&blank), "delivery-receipt-draft.docx");
}

#[test]
fn note_number_becomes_stem() {
    let draft = ReceiptDraft::new_on(jiff::civil::date(2024, 1, 1))
        .update_field(DraftField::DeliveryNoteNumber, "DN-2024-0042");
    assert_eq!(export_names::pdf(&draft), "delivery-receipt-DN-2024-0042.pdf");
    assert_eq!(export_names::html(&draft), "delivery-receipt-DN-2024-0042.html");
}

#[test]
fn unsafe_characters_are_replaced() {
    let draft = ReceiptDraft::new_on(jiff::civil::date(2024, 1, 1))
        .update_field(DraftField::DeliveryNoteNumber, " DN/12 #3 ");
    assert_eq!(export_names::stem(&draft), "delivery-receipt-DN-12--3");
}

#[test]
fn field_names_parse_in_either_case() {
    assert_eq!("recipientName".parse::<DraftField>().unwrap(), DraftField::RecipientName);
    assert_eq!("recipient_name".parse::<DraftField>().unwrap(), DraftField::RecipientName);
    assert_eq!("part_number".parse::<ItemField>().unwrap(), ItemField::PartNumber);
    assert!("colour".parse::<DraftField>().is_err());
    assert!("items".parse::<DraftField>().is_err());
}
