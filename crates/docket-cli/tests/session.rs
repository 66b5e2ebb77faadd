use std::cell::RefCell;
use std::rc::Rc;

use docket_cli::config::DocketConfig;
use docket_cli::repl::run_script;
use docket_cli::session::{Reply, Session};
use docket_export::error::ExportError;
use docket_export::layout::Layout;
use docket_export::pdf::{PdfOptions, Rasterizer};
use docket_export::print::PrintHost;
use docket_export::render::RenderedReceipt;

#[derive(Clone, Default)]
struct SharedLog(Rc<RefCell<Vec<String>>>);

impl PrintHost for SharedLog {
    fn print(&self, receipt: &RenderedReceipt) -> Result<(), ExportError> {
        self.0.borrow_mut().push(receipt.text.clone());
        Ok(())
    }
}

impl Rasterizer for SharedLog {
    fn rasterize(&self, _receipt: &RenderedReceipt, options: &PdfOptions) -> Result<(), ExportError> {
        self.0.borrow_mut().push(options.filename.clone());
        Ok(())
    }
}

fn session_in(dir: &std::path::Path) -> Session {
    let config = DocketConfig {
        output_dir: Some(dir.to_path_buf()),
        ..DocketConfig::default()
    };
    Session::from_config(&config).unwrap()
}

#[test]
fn edits_echo_live_preview() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path());

    let reply = session.execute_line("set recipientName Acme Corp").unwrap();
    let Reply::Continue { output: Some(preview) } = reply else {
        panic!("expected a preview");
    };
    assert!(preview.contains("Acme Corp"));
    assert!(preview.contains("Total Items: 1"));
}

#[test]
fn quiet_session_prints_nothing_on_edit() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path()).live_preview(false);
    assert_eq!(
        session.execute_line("add").unwrap(),
        Reply::Continue { output: None }
    );
    assert_eq!(session.draft().items.len(), 2);
}

#[test]
fn scripted_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path()).live_preview(false);
    let script = "\
reset
add
add
item 1 partNumber PN-500
remove 0
remove 9
item 7 description ghost
";
    let mut out = Vec::new();
    let failures = run_script(&mut session, script.as_bytes(), &mut out).unwrap();
    assert_eq!(failures, 0);

    let items = &session.draft().items;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].part_number, "PN-500");
    assert_eq!(items[1].part_number, "");
}

#[test]
fn script_reports_bad_lines_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path()).live_preview(false);
    let script = "set nothing here\nset deliveredBy Sam\nquit\nset deliveredBy Alex\n";

    let mut out = Vec::new();
    let failures = run_script(&mut session, script.as_bytes(), &mut out).unwrap();
    assert_eq!(failures, 1);
    assert_eq!(session.draft().delivered_by, "Sam");

    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("line 1:"));
}

#[test]
fn print_and_pdf_go_through_hosts() {
    let dir = tempfile::tempdir().unwrap();
    let log = SharedLog::default();
    let mut session = session_in(dir.path())
        .live_preview(false)
        .with_printer(Box::new(log.clone()))
        .with_rasterizer(Box::new(log.clone()));

    session.execute_line("set deliveryNoteNumber DN-77").unwrap();
    session.execute_line("print").unwrap();
    let reply = session.execute_line("export pdf").unwrap();

    let entries = log.0.borrow();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].contains("Receipt Number: DN-77"));
    assert_eq!(entries[1], "delivery-receipt-DN-77.pdf");

    let Reply::Continue { output: Some(message) } = reply else {
        panic!("expected a message");
    };
    assert!(message.contains("delivery-receipt-DN-77.pdf"));
}

#[test]
fn pdf_launcher_written_by_default_host() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path()).live_preview(false);
    session.execute_line("export pdf").unwrap();

    let launcher = dir.path().join("delivery-receipt-draft.pdf.html");
    let page = std::fs::read_to_string(launcher).unwrap();
    assert!(page.contains("html2pdf()"));
    assert!(page.contains(r#""filename":"delivery-receipt-draft.pdf""#));
    assert!(page.contains(r#"id="receipt""#));
}

#[test]
fn docx_and_html_exports_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path()).live_preview(false);
    session.execute_line("set deliveryNoteNumber DN-1").unwrap();
    session.execute_line("layout minimal").unwrap();
    assert_eq!(session.layout(), Layout::Minimal);

    session.execute_line("export docx").unwrap();
    session.execute_line("export html").unwrap();

    let docx = std::fs::read(dir.path().join("delivery-receipt-DN-1.docx")).unwrap();
    assert_eq!(&docx[..2], b"PK");

    let html = std::fs::read_to_string(dir.path().join("delivery-receipt-DN-1.html")).unwrap();
    assert!(html.contains("receipt--minimal"));
}

#[cfg(unix)]
#[test]
fn command_printer_pipes_text() {
    let dir = tempfile::tempdir().unwrap();
    let sink = dir.path().join("printed.txt");
    let config = DocketConfig {
        output_dir: Some(dir.path().to_path_buf()),
        print_command: vec![
            "sh".to_string(),
            "-c".to_string(),
            format!("cat > '{}'", sink.display()),
        ],
        ..DocketConfig::default()
    };
    let mut session = Session::from_config(&config).unwrap().live_preview(false);
    session.execute_line("set recipientName Acme").unwrap();
    session.execute_line("print").unwrap();

    let printed = std::fs::read_to_string(sink).unwrap();
    assert!(printed.contains("DELIVERY RECEIPT"));
    assert!(printed.contains("Acme"));
}

#[cfg(unix)]
#[test]
fn failing_print_command_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = DocketConfig {
        output_dir: Some(dir.path().to_path_buf()),
        print_command: vec!["false".to_string()],
        ..DocketConfig::default()
    };
    let mut session = Session::from_config(&config).unwrap();
    assert!(session.execute_line("print").is_err());
}

#[cfg(unix)]
#[test]
fn print_command_that_stops_reading_reports_its_status() {
    let dir = tempfile::tempdir().unwrap();
    let config = DocketConfig {
        output_dir: Some(dir.path().to_path_buf()),
        print_command: vec!["sh".to_string(), "-c".to_string(), "exit 3".to_string()],
        ..DocketConfig::default()
    };
    let mut session = Session::from_config(&config).unwrap().live_preview(false);
    // Enough rows to overflow the pipe buffer.
    for _ in 0..2000 {
        session.execute_line("add").unwrap();
    }

    let err = session.execute_line("print").unwrap_err();
    assert!(err.to_string().contains("exit status: 3"), "{err}");
}
