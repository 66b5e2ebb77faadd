//! Host-side implementations of the print and PDF bridges.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use docket_export::error::ExportError;
use docket_export::pdf::{PdfOptions, Rasterizer};
use docket_export::print::PrintHost;
use docket_export::render::{PageOptions, RenderedReceipt, Renderer};

/// Pipes the plain-text receipt to an external print command (`lp` by
/// default).
pub struct CommandPrinter {
    argv: Vec<String>,
}

impl CommandPrinter {
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }
}

impl PrintHost for CommandPrinter {
    fn print(&self, receipt: &RenderedReceipt) -> Result<(), ExportError> {
        let (program, args) = self
            .argv
            .split_first()
            .ok_or_else(|| ExportError::Print("print command is empty".to_string()))?;

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| ExportError::Print(format!("failed to start `{program}`: {e}")))?;

        // stdin closes at the end of the match, before the wait.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(receipt.text.as_bytes()),
            None => Ok(()),
        };
        let status = child.wait()?;

        if let Err(e) = written {
            return Err(ExportError::Print(format!(
                "`{program}` exited with {status} before reading the receipt: {e}"
            )));
        }
        if !status.success() {
            return Err(ExportError::Print(format!("`{program}` exited with {status}")));
        }
        Ok(())
    }
}

/// Writes a standalone page that runs html2pdf.js on the receipt subtree
/// when opened in a browser.
pub struct HtmlLauncher {
    renderer: Renderer,
    output_dir: PathBuf,
    script_src: String,
}

impl HtmlLauncher {
    pub fn new(output_dir: PathBuf, script_src: String) -> Result<Self, ExportError> {
        Ok(Self {
            renderer: Renderer::new()?,
            output_dir,
            script_src,
        })
    }

    /// `<output dir>/<pdf filename>.html`
    pub fn launcher_path(&self, options: &PdfOptions) -> PathBuf {
        launcher_path(&self.output_dir, options)
    }
}

pub fn launcher_path(output_dir: &Path, options: &PdfOptions) -> PathBuf {
    output_dir.join(format!("{}.html", options.filename))
}

impl Rasterizer for HtmlLauncher {
    fn rasterize(&self, receipt: &RenderedReceipt, options: &PdfOptions) -> Result<(), ExportError> {
        let options_json = serde_json::to_string(options)?;
        let script = format!(
            "window.addEventListener(\"load\", function () {{\n  \
             html2pdf().set({options_json}).from(document.getElementById(\"receipt\")).save();\n}});"
        );
        let page = self.renderer.document(
            receipt,
            &PageOptions {
                title: Some(options.filename.clone()),
                script_src: Some(self.script_src.clone()),
                script: Some(script),
            },
        )?;

        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.launcher_path(options);
        std::fs::write(&path, page)?;
        tracing::info!(path = %path.display(), "wrote PDF launcher");
        Ok(())
    }
}
