// src/main.rs
use clap::Parser;
use fantasy_expert::cli::{Args, is_config_operation};
use fantasy_expert::error::AppError;
use fantasy_expert::{commands, logging};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Handle version flag first
    if args.version {
        commands::handle_version_command();
        return Ok(());
    }

    // Handle configuration operations without building a plan
    if args.list_config {
        commands::handle_list_config_command().await?;
        return Ok(());
    }

    if is_config_operation(&args) {
        commands::handle_config_update_command(&args).await?;
        return Ok(());
    }

    commands::dispatch(&args).await
}
