use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use docket_cli::config;
use docket_cli::repl;
use docket_cli::session::Session;
use docket_export::layout::Layout;
use eyre::Result;

/// Fill in a delivery receipt and export it.
#[derive(Debug, Parser)]
#[command(name = "docket", version, about)]
struct Cli {
    /// Layout to start with (classic, modern, minimal)
    #[arg(long)]
    layout: Option<Layout>,

    /// Directory exports are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Read commands from a file instead of the prompt
    #[arg(long)]
    script: Option<PathBuf>,

    /// Config file (defaults to $DOCKET_CONFIG or the user config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not print the preview after every edit
    #[arg(long, short)]
    quiet: bool,

    /// Write the effective config to the config file and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    // stdout carries the preview; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::config_path()?,
    };
    let mut cfg = config::load_config_from(&config_path)?;
    if let Some(layout) = cli.layout {
        cfg.default_layout = layout;
    }
    if let Some(dir) = &cli.output_dir {
        cfg.output_dir = Some(dir.clone());
    }

    if cli.write_config {
        config::save_config_to(&cfg, &config_path)?;
        return Ok(());
    }

    let mut session = Session::from_config(&cfg)?.live_preview(!cli.quiet);
    tracing::debug!(layout = %session.layout(), "session started");

    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| eyre::eyre!("failed to open script {}: {e}", path.display()))?;
            let stdout = std::io::stdout();
            let failures = repl::run_script(&mut session, BufReader::new(file), &mut stdout.lock())?;
            if failures > 0 {
                tracing::warn!(failures, "script finished with errors");
            }
        }
        None => repl::run_interactive(&mut session)?,
    }

    Ok(())
}
