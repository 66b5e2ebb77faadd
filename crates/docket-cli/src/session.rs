use std::path::PathBuf;

use docket_core::controller::{DraftController, EditOutcome};
use docket_core::export_names;
use docket_core::models::draft::ReceiptDraft;
use docket_export::docx::generate_docx;
use docket_export::layout::Layout;
use docket_export::pdf::{Rasterizer, export_pdf};
use docket_export::print::{PrintHost, print_receipt};
use docket_export::render::{PageOptions, RenderedReceipt, Renderer};
use docket_export::styles::DocumentStyles;
use docket_export::view::ReceiptView;

use crate::commands::{self, Command, ExportFormat};
use crate::config::DocketConfig;
use crate::hosts::{self, CommandPrinter, HtmlLauncher};

/// What the host loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show `output` (preview or message) and read the next command.
    Continue { output: Option<String> },
    Quit,
}

impl Reply {
    fn show(output: impl Into<String>) -> Self {
        Reply::Continue {
            output: Some(output.into()),
        }
    }
}

/// One editing session: one draft, one renderer, one layout.
pub struct Session {
    controller: DraftController,
    renderer: Renderer,
    layout: Layout,
    output_dir: PathBuf,
    styles: DocumentStyles,
    printer: Box<dyn PrintHost>,
    rasterizer: Box<dyn Rasterizer>,
    live_preview: bool,
}

impl Session {
    pub fn from_config(config: &DocketConfig) -> eyre::Result<Self> {
        let output_dir = config
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let launcher = HtmlLauncher::new(output_dir.clone(), config.html2pdf_src.clone())?;

        Ok(Self {
            controller: DraftController::new(),
            renderer: Renderer::new()?,
            layout: config.default_layout,
            output_dir,
            styles: config.styles.clone(),
            printer: Box::new(CommandPrinter::new(config.print_command.clone())),
            rasterizer: Box::new(launcher),
            live_preview: true,
        })
    }

    pub fn with_printer(mut self, printer: Box<dyn PrintHost>) -> Self {
        self.printer = printer;
        self
    }

    pub fn with_rasterizer(mut self, rasterizer: Box<dyn Rasterizer>) -> Self {
        self.rasterizer = rasterizer;
        self
    }

    /// Whether edits echo the preview.
    pub fn live_preview(mut self, enabled: bool) -> Self {
        self.live_preview = enabled;
        self
    }

    pub fn draft(&self) -> &ReceiptDraft {
        self.controller.draft()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn render(&self) -> eyre::Result<RenderedReceipt> {
        Ok(self.renderer.render(self.controller.draft(), self.layout)?)
    }

    /// Parse and run one prompt line.
    pub fn execute_line(&mut self, line: &str) -> eyre::Result<Reply> {
        match commands::parse_line(line)? {
            Some(command) => self.execute(command),
            None => Ok(Reply::Continue { output: None }),
        }
    }

    pub fn execute(&mut self, command: Command) -> eyre::Result<Reply> {
        if let Some(edit) = command.as_edit() {
            let outcome = self.controller.apply(&edit);
            if outcome == EditOutcome::Unchanged {
                tracing::debug!(?edit, "edit left the draft unchanged");
            }
            return self.preview_if_live();
        }

        match command {
            Command::Show => Ok(Reply::show(self.render()?.text)),
            Command::Layout { layout } => {
                self.layout = layout;
                tracing::debug!(%layout, "layout switched");
                self.preview_if_live()
            }
            Command::Print => {
                let rendered = self.render()?;
                print_receipt(self.printer.as_ref(), &rendered)?;
                Ok(Reply::show("sent to printer"))
            }
            Command::Export { format } => self.export(format),
            Command::Help => Ok(Reply::show(commands::help_text())),
            Command::Quit => Ok(Reply::Quit),
            // edits are handled above
            _ => Ok(Reply::Continue { output: None }),
        }
    }

    fn preview_if_live(&self) -> eyre::Result<Reply> {
        if !self.live_preview {
            return Ok(Reply::Continue { output: None });
        }
        Ok(Reply::show(self.render()?.text))
    }

    fn export(&self, format: ExportFormat) -> eyre::Result<Reply> {
        let draft = self.controller.draft();
        match format {
            ExportFormat::Pdf => {
                let rendered = self.render()?;
                let options = export_pdf(self.rasterizer.as_ref(), draft, &rendered)?;
                let launcher = hosts::launcher_path(&self.output_dir, &options);
                Ok(Reply::show(format!(
                    "open {} in a browser to save {}",
                    launcher.display(),
                    options.filename
                )))
            }
            ExportFormat::Docx => {
                let view = ReceiptView::project(draft, self.layout);
                let bytes = generate_docx(&view, &self.styles)?;
                let path = self.write_output(&export_names::docx(draft), &bytes)?;
                Ok(Reply::show(format!("wrote {}", path.display())))
            }
            ExportFormat::Html => {
                let rendered = self.render()?;
                let page = self.renderer.document(&rendered, &PageOptions::default())?;
                let path = self.write_output(&export_names::html(draft), page.as_bytes())?;
                Ok(Reply::show(format!("wrote {}", path.display())))
            }
        }
    }

    fn write_output(&self, filename: &str, bytes: &[u8]) -> eyre::Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(filename);
        std::fs::write(&path, bytes)?;
        tracing::info!(path = %path.display(), "export written");
        Ok(path)
    }
}
