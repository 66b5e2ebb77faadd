use docket_core::controller::{DraftController, Edit, EditOutcome};
use docket_core::models::draft::ReceiptDraft;
use docket_core::schema::{DraftField, ItemField};

fn controller() -> DraftController {
    DraftController::with_draft(ReceiptDraft::new_on(jiff::civil::date(2024, 3, 5)))
}

#[test]
fn end_to_end_add_edit_remove() {
    let mut ctl = controller();
    assert_eq!(ctl.apply(&Edit::Reset), EditOutcome::Changed);
    assert_eq!(ctl.apply(&Edit::AddItem), EditOutcome::Changed);
    assert_eq!(ctl.apply(&Edit::AddItem), EditOutcome::Changed);
    assert_eq!(ctl.draft().items.len(), 3);

    ctl.apply(&Edit::UpdateItem {
        index: 1,
        field: ItemField::PartNumber,
        value: "PN-500".to_string(),
    });
    ctl.apply(&Edit::RemoveItem { index: 0 });

    let items = &ctl.draft().items;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].part_number, "PN-500");
    assert_eq!(items[1].part_number, "");
}

#[test]
fn noops_report_unchanged() {
    let mut ctl = controller();
    let before = ctl.draft().clone();

    assert_eq!(ctl.apply(&Edit::RemoveItem { index: 0 }), EditOutcome::Unchanged);
    assert_eq!(
        ctl.apply(&Edit::UpdateItem {
            index: 3,
            field: ItemField::Description,
            value: "ghost".to_string(),
        }),
        EditOutcome::Unchanged
    );
    assert_eq!(ctl.draft(), &before);
}

#[test]
fn field_edit_reaches_draft() {
    let mut ctl = controller();
    let outcome = ctl.apply(&Edit::UpdateField {
        field: DraftField::OrderReference,
        value: "ORD-77".to_string(),
    });
    assert_eq!(outcome, EditOutcome::Changed);
    assert_eq!(ctl.into_draft().order_reference, "ORD-77");
}

#[test]
fn edits_deserialize_from_tagged_json() {
    let edits: Vec<Edit> = serde_json::from_str(
        r#"[
            {"op": "update_field", "field": "recipientName", "value": "Acme"},
            {"op": "add_item"},
            {"op": "update_item", "index": 1, "field": "quantity", "value": "abc"},
            {"op": "remove_item", "index": 0},
            {"op": "reset"}
        ]"#,
    )
    .unwrap();

    assert_eq!(
        edits[0],
        Edit::UpdateField {
            field: DraftField::RecipientName,
            value: "Acme".to_string()
        }
    );
    assert_eq!(edits[3], Edit::RemoveItem { index: 0 });
    assert_eq!(edits.len(), 5);
}
