// This is the entry point of the Drive folder client.
//
// **Architecture Overview:**
// - `core/` = Page logic (platform-agnostic)
// - `infra/` = Implementations of core traits (HTTP backend, files, clipboard)
// - `terminal/` = Terminal adapter (commands, page rendering)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Run either one extraction or the interactive page

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with half a dozen mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "infra/infra_layer.rs"]
mod infra;
#[path = "terminal/terminal_layer.rs"]
mod terminal;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::core::links::LinkCopier;
use crate::core::page::PageController;
use crate::infra::clipboard::Osc52Clipboard;
use crate::infra::extraction::api_config::API_BASE_URL_VAR;
use crate::infra::extraction::{ApiConfig, HttpExtractionClient};
use crate::infra::export::FileExportSink;
use crate::terminal::Session;

/// List the files of a public Google Drive folder through the extraction service.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Folder link or ID. Extracts once and exits instead of starting the prompt.
    folder: Option<String>,

    /// Base URL of the extraction service (overrides API_BASE_URL).
    #[arg(long)]
    api_base: Option<String>,

    /// Directory the Excel export is written to.
    #[arg(long, env = "EXPORT_DIR", default_value = ".")]
    export_dir: PathBuf,

    /// With FOLDER: also write drive-files.xls after a successful extraction.
    #[arg(long, requires = "folder")]
    export: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if it exists), RUST_LOG included
    dotenv::dotenv().ok();

    // Logs go to stderr so they never interleave with the rendered page
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let api_config = match cli.api_base.as_deref() {
        Some(base) => ApiConfig::new(Some(base)),
        None => ApiConfig::from_env(),
    };
    if api_config.base_url().is_none() {
        tracing::error!(
            "{} is not set. Please configure the environment variable.",
            API_BASE_URL_VAR
        );
    }
    tracing::info!(
        "Using API: {}",
        api_config.base_url().unwrap_or("NOT CONFIGURED")
    );

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================

    let client =
        HttpExtractionClient::new(api_config).context("Failed to create extraction client")?;
    let export_sink = FileExportSink::new(cli.export_dir);
    let page = PageController::new(client, export_sink);
    let copier = LinkCopier::new(Osc52Clipboard::stdout());

    let session = Session::new(page, copier);

    match cli.folder {
        Some(folder) => {
            let ok = session.run_once(&folder, cli.export).await?;
            if !ok {
                std::process::exit(1);
            }
        }
        None => session.run_interactive().await?,
    }

    Ok(())
}
