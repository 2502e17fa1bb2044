// src/main.rs
mod app;
mod cli;
mod commands;
mod logging;
mod version;

use clap::Parser;
use cli::{Args, is_config_update};
use football_scores::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // The guard flushes buffered log lines when main returns
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.version {
        return commands::handle_version_command();
    }

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if is_config_update(&args) {
        return commands::handle_config_update_command(&args).await;
    }

    if args.once || args.plain {
        return commands::handle_once_command(&args).await;
    }

    app::run_interactive().await
}
