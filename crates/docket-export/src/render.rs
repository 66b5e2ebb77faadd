use std::fmt::Write as _;

use docket_core::models::draft::ReceiptDraft;
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;
use crate::layout::Layout;
use crate::view::{FieldView, ReceiptView};

const MACROS: &str = include_str!("../templates/macros.html");
const RECEIPT: &str = include_str!("../templates/receipt.html");
const DOCUMENT: &str = include_str!("../templates/document.html");

const RECEIPT_TEMPLATE: &str = "receipt.html";
const DOCUMENT_TEMPLATE: &str = "document.html";

/// One render pass over a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedReceipt {
    pub layout: Layout,
    /// The receipt subtree (`<div id="receipt">…</div>`), the unit handed to
    /// the print and PDF bridges.
    pub html: String,
    /// Plain-text rendering of the same view.
    pub text: String,
    pub total_items: usize,
}

/// Extra page furniture for [`Renderer::document`].
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    pub title: Option<String>,
    /// External script loaded in `<head>`.
    pub script_src: Option<String>,
    /// Inline script appended after the receipt.
    pub script: Option<String>,
}

/// Holds the parsed templates; build once per session.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self, ExportError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("macros.html", MACROS),
            (RECEIPT_TEMPLATE, RECEIPT),
            (DOCUMENT_TEMPLATE, DOCUMENT),
        ])
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;
        Ok(Self { tera })
    }

    pub fn render(&self, draft: &ReceiptDraft, layout: Layout) -> Result<RenderedReceipt, ExportError> {
        let view = ReceiptView::project(draft, layout);
        let html = self.render_view(&view)?;
        tracing::debug!(%layout, items = view.total_items, "rendered receipt");
        Ok(RenderedReceipt {
            layout,
            html,
            text: render_text(&view),
            total_items: view.total_items,
        })
    }

    pub fn render_view(&self, view: &ReceiptView) -> Result<String, ExportError> {
        let value = serde_json::to_value(view)?;
        let context =
            Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;
        Ok(self.tera.render(RECEIPT_TEMPLATE, &context)?)
    }

    /// Wrap a rendered receipt in a standalone HTML page with its stylesheet.
    pub fn document(&self, rendered: &RenderedReceipt, page: &PageOptions) -> Result<String, ExportError> {
        let mut context = Context::new();
        context.insert(
            "title",
            page.title.as_deref().unwrap_or("Delivery Receipt"),
        );
        context.insert("stylesheet", rendered.layout.stylesheet());
        context.insert("receipt", &rendered.html);
        context.insert("script_src", &page.script_src);
        context.insert("script", &page.script);
        Ok(self.tera.render(DOCUMENT_TEMPLATE, &context)?)
    }
}

/// Render a draft with a one-off [`Renderer`].
pub fn render_html(draft: &ReceiptDraft, layout: Layout) -> Result<RenderedReceipt, ExportError> {
    Renderer::new()?.render(draft, layout)
}

const TEXT_WIDTH: usize = 64;
const PART_WIDTH: usize = 18;
const DESCRIPTION_WIDTH: usize = 34;

/// Footer lines shared by every rendering of the receipt.
pub const CLOSING_NOTICE: [&str; 2] = [
    "This document serves as official proof of delivery. Please retain this receipt for your records.",
    "For questions or concerns, please contact us using the information provided above.",
];

/// Plain-text receipt for terminals and line printers. Placeholder text is
/// wrapped in square brackets.
pub fn render_text(view: &ReceiptView) -> String {
    let mut out = String::new();
    let rule = "=".repeat(TEXT_WIDTH);
    let thin = "-".repeat(TEXT_WIDTH);

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "DELIVERY RECEIPT");
    let _ = writeln!(out, "Proof of Delivery");
    if let Some(number) = &view.delivery_note_number {
        let _ = writeln!(out, "Receipt Number: {}", shown(number));
    }
    let _ = writeln!(out, "{rule}");

    line(&mut out, "Delivery Date", view.date.as_ref());
    line(&mut out, "Order Reference", view.order_reference.as_ref());

    if view.recipient_name.is_some() || view.recipient_address.is_some() {
        let _ = writeln!(out);
        let _ = writeln!(out, "DELIVERED TO");
        if let Some(name) = &view.recipient_name {
            let _ = writeln!(out, "  {}", shown(name));
        }
        if let Some(address) = &view.recipient_address {
            for l in shown(address).lines() {
                let _ = writeln!(out, "  {l}");
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "ITEMS DELIVERED");
    let _ = writeln!(out, "{thin}");
    let _ = writeln!(out, "{:<4}{:<18}{:<34}{:>8}", "#", "Part Number", "Description", "Qty");
    let _ = writeln!(out, "{thin}");
    for item in &view.items {
        let _ = writeln!(
            out,
            "{:<4}{:<PART_WIDTH$}{:<DESCRIPTION_WIDTH$}{:>8}",
            item.position,
            cell(&shown(&item.part_number), PART_WIDTH),
            cell(&shown(&item.description), DESCRIPTION_WIDTH),
            item.quantity
        );
    }
    let _ = writeln!(out, "{thin}");
    let _ = writeln!(out, "{:>width$}", format!("Total Items: {}", view.total_items), width = TEXT_WIDTH);

    if view.delivered_by.is_some() || view.contact_info.is_some() {
        let _ = writeln!(out);
        line(&mut out, "Delivered By", view.delivered_by.as_ref());
        line(&mut out, "Contact Information", view.contact_info.as_ref());
    }

    if let Some(instructions) = &view.special_instructions {
        let _ = writeln!(out);
        let _ = writeln!(out, "SPECIAL INSTRUCTIONS");
        for l in shown(instructions).lines() {
            let _ = writeln!(out, "  {l}");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Recipient Signature: ______________________");
    let _ = writeln!(out, "Date Received:       ____ / ____ / ________");
    let _ = writeln!(out);
    for notice in CLOSING_NOTICE {
        for l in wrap(notice, TEXT_WIDTH) {
            let _ = writeln!(out, "{l}");
        }
    }
    let _ = writeln!(out, "{rule}");
    out
}

fn line(out: &mut String, label: &str, field: Option<&FieldView>) {
    if let Some(field) = field {
        let _ = writeln!(out, "{label}: {}", shown(field));
    }
}

// One table cell: a single line, cut to leave a space before the next column.
fn cell(text: &str, width: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() < width {
        return flat;
    }
    let mut cut: String = flat.chars().take(width.saturating_sub(2)).collect();
    cut.push('~');
    cut
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn shown(field: &FieldView) -> String {
    if field.placeholder {
        format!("[{}]", field.text)
    } else {
        field.text.clone()
    }
}
