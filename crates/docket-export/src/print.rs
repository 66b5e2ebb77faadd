use crate::error::ExportError;
use crate::render::RenderedReceipt;

/// The host's native print facility.
pub trait PrintHost {
    fn print(&self, receipt: &RenderedReceipt) -> Result<(), ExportError>;
}

/// Print what is currently rendered, unchanged.
pub fn print_receipt<H: PrintHost + ?Sized>(
    host: &H,
    rendered: &RenderedReceipt,
) -> Result<(), ExportError> {
    tracing::info!(layout = %rendered.layout, items = rendered.total_items, "printing receipt");
    host.print(rendered)
}
