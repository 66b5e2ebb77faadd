use std::cell::RefCell;

use docket_core::models::draft::ReceiptDraft;
use docket_core::schema::DraftField;
use docket_export::error::ExportError;
use docket_export::layout::Layout;
use docket_export::pdf::{PdfOptions, Rasterizer, export_pdf};
use docket_export::print::{PrintHost, print_receipt};
use docket_export::render::{RenderedReceipt, render_html};

#[derive(Default)]
struct RecordingRasterizer {
    calls: RefCell<Vec<(String, PdfOptions)>>,
}

impl Rasterizer for RecordingRasterizer {
    fn rasterize(&self, receipt: &RenderedReceipt, options: &PdfOptions) -> Result<(), ExportError> {
        self.calls
            .borrow_mut()
            .push((receipt.html.clone(), options.clone()));
        Ok(())
    }
}

struct FailingRasterizer;

impl Rasterizer for FailingRasterizer {
    fn rasterize(&self, _receipt: &RenderedReceipt, _options: &PdfOptions) -> Result<(), ExportError> {
        Err(ExportError::Pdf("canvas unavailable".to_string()))
    }
}

#[derive(Default)]
struct RecordingPrinter {
    printed: RefCell<Vec<RenderedReceipt>>,
}

impl PrintHost for RecordingPrinter {
    fn print(&self, receipt: &RenderedReceipt) -> Result<(), ExportError> {
        self.printed.borrow_mut().push(receipt.clone());
        Ok(())
    }
}

fn draft() -> ReceiptDraft {
    ReceiptDraft::new_on(jiff::civil::date(2024, 3, 5))
}

#[test]
fn pdf_uses_note_number_and_subtree() {
    let draft = draft().update_field(DraftField::DeliveryNoteNumber, "DN-9");
    let rendered = render_html(&draft, Layout::Classic).unwrap();
    let rasterizer = RecordingRasterizer::default();

    let options = export_pdf(&rasterizer, &draft, &rendered).unwrap();
    assert_eq!(options.filename, "delivery-receipt-DN-9.pdf");

    let calls = rasterizer.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, rendered.html);
    assert_eq!(calls[0].1, options);
}

#[test]
fn pdf_falls_back_to_draft_token() {
    let draft = draft();
    let rendered = render_html(&draft, Layout::Classic).unwrap();
    let options = export_pdf(&RecordingRasterizer::default(), &draft, &rendered).unwrap();
    assert_eq!(options.filename, "delivery-receipt-draft.pdf");
}

#[test]
fn pdf_options_serialize_in_rasterizer_shape() {
    let json = serde_json::to_value(PdfOptions::for_draft(&draft())).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "margin": 0.5,
            "filename": "delivery-receipt-draft.pdf",
            "image": { "type": "jpeg", "quality": 0.98 },
            "html2canvas": { "scale": 2 },
            "jsPDF": { "unit": "in", "format": "letter", "orientation": "portrait" }
        })
    );
}

#[test]
fn rasterizer_failure_propagates() {
    let draft = draft();
    let rendered = render_html(&draft, Layout::Classic).unwrap();
    let err = export_pdf(&FailingRasterizer, &draft, &rendered).unwrap_err();
    assert!(err.to_string().contains("canvas unavailable"));
}

#[test]
fn print_hands_over_rendering_unchanged() {
    let rendered = render_html(&draft(), Layout::Modern).unwrap();
    let printer = RecordingPrinter::default();
    print_receipt(&printer, &rendered).unwrap();
    assert_eq!(printer.printed.borrow().as_slice(), std::slice::from_ref(&rendered));
}
