use std::io::Cursor;

use docx_rs::{
    AlignmentType, Docx, PageMargin, Paragraph, Run, RunFonts, Style, StyleType, Table, TableCell,
    TableRow,
};

use crate::error::ExportError;
use crate::render::CLOSING_NOTICE;
use crate::styles::DocumentStyles;
use crate::view::{FieldView, ReceiptView};

const TWIPS_PER_INCH: f64 = 1440.0;

/// Generate a DOCX receipt from a projected view.
///
/// Mirrors the HTML layout top to bottom: title block, references,
/// recipient, item table with total, delivery details, special
/// instructions, signature lines. Placeholder text is set in grey italics.
pub fn generate_docx(view: &ReceiptView, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let margin = (styles.margin_inches * TWIPS_PER_INCH).round() as i32;

    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(margin)
                .bottom(margin)
                .left(margin)
                .right(margin),
        )
        .add_style(title_style(styles));

    docx = docx
        .add_paragraph(
            Paragraph::new()
                .style("Title")
                .add_run(
                    Run::new()
                        .add_text("DELIVERY RECEIPT")
                        .fonts(RunFonts::new().ascii(&styles.heading_font)),
                ),
        )
        .add_paragraph(Paragraph::new().add_run(label_run("Proof of Delivery", styles)));

    if let Some(number) = &view.delivery_note_number {
        docx = labelled(docx, "Receipt Number", number, styles);
    }
    if let Some(date) = &view.date {
        docx = labelled(docx, "Delivery Date", date, styles);
    }
    if let Some(reference) = &view.order_reference {
        docx = labelled(docx, "Order Reference", reference, styles);
    }

    if view.recipient_name.is_some() || view.recipient_address.is_some() {
        docx = docx.add_paragraph(section_label("Delivered To", styles));
        if let Some(name) = &view.recipient_name {
            docx = docx.add_paragraph(Paragraph::new().add_run(value_run(name, styles).bold()));
        }
        if let Some(address) = &view.recipient_address {
            docx = multiline(docx, address, styles);
        }
    }

    docx = docx
        .add_paragraph(section_label("Items Delivered", styles))
        .add_table(items_table(view, styles))
        .add_paragraph(
            Paragraph::new()
                .align(AlignmentType::Right)
                .add_run(label_run("Total Items  ", styles))
                .add_run(
                    Run::new()
                        .add_text(view.total_items.to_string())
                        .bold()
                        .size(styles.body_size * 4)
                        .fonts(RunFonts::new().ascii(&styles.body_font)),
                ),
        );

    if let Some(by) = &view.delivered_by {
        docx = labelled(docx, "Delivered By", by, styles);
    }
    if let Some(contact) = &view.contact_info {
        docx = labelled(docx, "Contact Information", contact, styles);
    }
    if let Some(instructions) = &view.special_instructions {
        docx = docx.add_paragraph(section_label("Special Instructions", styles));
        docx = multiline(docx, instructions, styles);
    }

    docx = docx
        .add_paragraph(Paragraph::new())
        .add_paragraph(body_paragraph("Recipient Signature: ______________________________", styles))
        .add_paragraph(body_paragraph("Date Received: ____ / ____ / ________", styles))
        .add_paragraph(Paragraph::new());
    for notice in CLOSING_NOTICE {
        docx = docx.add_paragraph(
            Paragraph::new()
                .align(AlignmentType::Center)
                .add_run(label_run(notice, styles)),
        );
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    tracing::debug!(bytes = buf.get_ref().len(), "generated docx");
    Ok(buf.into_inner())
}

fn title_style(styles: &DocumentStyles) -> Style {
    Style::new("Title", StyleType::Paragraph)
        .name("Title")
        .size(styles.title_size * 2) // OOXML uses half-points
        .bold()
}

fn items_table(view: &ReceiptView, styles: &DocumentStyles) -> Table {
    let header = TableRow::new(vec![
        header_cell("Part Number", styles),
        header_cell("Description", styles),
        header_cell("Qty", styles),
    ]);

    let mut rows = vec![header];
    for item in &view.items {
        rows.push(TableRow::new(vec![
            TableCell::new().add_paragraph(Paragraph::new().add_run(value_run(&item.part_number, styles))),
            TableCell::new().add_paragraph(Paragraph::new().add_run(value_run(&item.description, styles))),
            TableCell::new().add_paragraph(
                Paragraph::new().align(AlignmentType::Right).add_run(
                    Run::new()
                        .add_text(item.quantity.to_string())
                        .bold()
                        .fonts(RunFonts::new().ascii(&styles.body_font)),
                ),
            ),
        ]));
    }
    Table::new(rows)
}

fn header_cell(text: &str, styles: &DocumentStyles) -> TableCell {
    TableCell::new().add_paragraph(
        Paragraph::new().add_run(
            Run::new()
                .add_text(text.to_uppercase())
                .bold()
                .size(styles.label_size * 2)
                .fonts(RunFonts::new().ascii(&styles.body_font)),
        ),
    )
}

fn labelled(docx: Docx, label: &str, value: &FieldView, styles: &DocumentStyles) -> Docx {
    docx.add_paragraph(section_label(label, styles))
        .add_paragraph(Paragraph::new().add_run(value_run(value, styles)))
}

fn multiline(mut docx: Docx, value: &FieldView, styles: &DocumentStyles) -> Docx {
    for line in value.text.lines() {
        let part = FieldView {
            text: line.to_string(),
            placeholder: value.placeholder,
        };
        docx = docx.add_paragraph(Paragraph::new().add_run(value_run(&part, styles)));
    }
    docx
}

fn section_label(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().add_run(label_run(&text.to_uppercase(), styles).bold())
}

fn label_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.label_size * 2)
        .color("6B7280")
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

fn value_run(value: &FieldView, styles: &DocumentStyles) -> Run {
    let run = Run::new()
        .add_text(&value.text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font));
    if value.placeholder {
        run.italic().color("B0B0B0")
    } else {
        run
    }
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().align(AlignmentType::Left).add_run(
        Run::new()
            .add_text(text)
            .size(styles.body_size * 2)
            .fonts(RunFonts::new().ascii(&styles.body_font)),
    )
}
