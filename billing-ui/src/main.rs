use std::path::PathBuf;

use clap::Parser;
use gpui::{App, Application};
use tracing::{debug, error, info};

use billing_ui::{config::AppConfig, logging, open_main_window, setup_app};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Price summary panel for GST bills.
///
/// Opens a window with the configured line items, a GST toggle, and an
/// editable extra charge.
#[derive(Debug, Parser)]
struct Cli {
    /// TOML config file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level or `EnvFilter` directive, overriding the config.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(file) = cli.log_file {
        config.logging.file = Some(file);
    }

    logging::init_logging(&config.logging)?;
    debug!(?config, "configuration resolved");

    Application::new().run(move |cx: &mut App| {
        setup_app(cx);
        if let Err(error) = open_main_window(&config, cx) {
            error!(?error, "cannot open billing window");
            cx.quit();
        }
    });

    info!("application exited");
    Ok(())
}
