//! Bridge to the PDF rasterizer.
//!
//! The rasterizer (html2pdf.js in the browser, or a host stand-in) turns
//! the rendered receipt subtree into a paginated PDF. This side only picks
//! the filename and the subtree and describes the page setup.

use docket_core::export_names;
use docket_core::models::draft::ReceiptDraft;
use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::render::RenderedReceipt;

/// Uniform page margin in inches.
pub const MARGIN_INCHES: f64 = 0.5;
pub const JPEG_QUALITY: f64 = 0.98;
pub const RASTER_SCALE: u32 = 2;

/// Rasterizer settings, serialized in the shape html2pdf.js expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfOptions {
    pub margin: f64,
    pub filename: String,
    pub image: ImageOptions,
    pub html2canvas: CanvasOptions,
    #[serde(rename = "jsPDF")]
    pub page: PageSetup,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageOptions {
    #[serde(rename = "type")]
    pub format: ImageFormat,
    pub quality: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasOptions {
    pub scale: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSetup {
    pub unit: Unit,
    pub format: PaperFormat,
    pub orientation: Orientation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "in")]
    Inch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperFormat {
    Letter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
}

impl PdfOptions {
    /// US letter, portrait, half-inch margins, 2x raster, JPEG at 0.98.
    pub fn for_draft(draft: &ReceiptDraft) -> Self {
        Self {
            margin: MARGIN_INCHES,
            filename: export_names::pdf(draft),
            image: ImageOptions {
                format: ImageFormat::Jpeg,
                quality: JPEG_QUALITY,
            },
            html2canvas: CanvasOptions {
                scale: RASTER_SCALE,
            },
            page: PageSetup {
                unit: Unit::Inch,
                format: PaperFormat::Letter,
                orientation: Orientation::Portrait,
            },
        }
    }
}

/// Converts the receipt subtree (`receipt.html`) into a PDF file.
pub trait Rasterizer {
    fn rasterize(&self, receipt: &RenderedReceipt, options: &PdfOptions) -> Result<(), ExportError>;
}

/// Hand the rendered receipt to the rasterizer once. Failures are returned
/// as-is; nothing is retried.
pub fn export_pdf<R: Rasterizer + ?Sized>(
    rasterizer: &R,
    draft: &ReceiptDraft,
    rendered: &RenderedReceipt,
) -> Result<PdfOptions, ExportError> {
    let options = PdfOptions::for_draft(draft);
    tracing::info!(filename = %options.filename, layout = %rendered.layout, "exporting PDF");
    rasterizer.rasterize(rendered, &options)?;
    Ok(options)
}
