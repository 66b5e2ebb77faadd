use std::path::{Path, PathBuf};

use docket_export::layout::Layout;
use docket_export::styles::DocumentStyles;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "DOCKET_CONFIG";

pub const DEFAULT_HTML2PDF_SRC: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/html2pdf.js/0.10.1/html2pdf.bundle.min.js";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocketConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub default_layout: Layout,
    /// Where exports are written. `None` means the working directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Program and arguments that receive the plain-text receipt on stdin.
    #[serde(default = "default_print_command")]
    pub print_command: Vec<String>,
    /// Script URL of the html2pdf.js bundle used by PDF launchers.
    #[serde(default = "default_html2pdf_src")]
    pub html2pdf_src: String,
    #[serde(default)]
    pub styles: DocumentStyles,
}

impl Default for DocketConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            default_layout: Layout::default(),
            output_dir: None,
            print_command: default_print_command(),
            html2pdf_src: default_html2pdf_src(),
            styles: DocumentStyles::default(),
        }
    }
}

fn default_print_command() -> Vec<String> {
    vec!["lp".to_string()]
}

fn default_html2pdf_src() -> String {
    DEFAULT_HTML2PDF_SRC.to_string()
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.docket.cli"))
}

/// `$DOCKET_CONFIG`, else `<config dir>/com.docket.cli/config.json`.
pub fn config_path() -> eyre::Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    Ok(config_dir()?.join("config.json"))
}

/// A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> eyre::Result<DocketConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(DocketConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: DocketConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update docket."
        ));
    }

    // v0 → v1: `layout` became `default_layout`; `print_command` became an argv list
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

        if let Some(layout) = obj.remove("layout") {
            obj.entry("default_layout").or_insert(layout);
        }

        if let Some(serde_json::Value::String(command)) = obj.get("print_command") {
            let argv: Vec<serde_json::Value> = command
                .split_whitespace()
                .map(|part| serde_json::Value::String(part.to_string()))
                .collect();
            obj.insert("print_command".to_string(), serde_json::Value::Array(argv));
        }

        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

pub fn save_config_to(config: &DocketConfig, path: &Path) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
