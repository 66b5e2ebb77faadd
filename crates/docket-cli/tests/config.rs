use docket_cli::config::{self, CURRENT_VERSION, DocketConfig};
use docket_export::layout::Layout;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = config::load_config_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, DocketConfig::default());
    assert_eq!(config.print_command, vec!["lp".to_string()]);
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = DocketConfig {
        default_layout: Layout::Modern,
        output_dir: Some(dir.path().join("out")),
        ..DocketConfig::default()
    };

    config::save_config_to(&config, &path).unwrap();
    assert!(!path.with_extension("json.tmp").exists());
    assert_eq!(config::load_config_from(&path).unwrap(), config);
}

#[test]
fn v0_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"layout": "minimal", "print_command": "lpr -P front"}"#).unwrap();

    let config = config::load_config_from(&path).unwrap();
    assert_eq!(config.config_version, CURRENT_VERSION);
    assert_eq!(config.default_layout, Layout::Minimal);
    assert_eq!(config.print_command, vec!["lpr", "-P", "front"]);
    assert_eq!(config.html2pdf_src, config::DEFAULT_HTML2PDF_SRC);
}

#[test]
fn newer_config_is_rejected() {
    let json = serde_json::json!({ "config_version": CURRENT_VERSION + 1 });
    assert!(config::migrate(json, CURRENT_VERSION + 1).is_err());
}

#[test]
fn current_config_passes_through() {
    let json = serde_json::json!({ "config_version": 1, "default_layout": "modern" });
    let migrated = config::migrate(json.clone(), 1).unwrap();
    assert_eq!(migrated, json);
}
