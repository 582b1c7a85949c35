//! Stock analysis CLI application.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;
use ta_config::{load_config_or_default, AppConfig};
use ta_monitor::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging settings fall back to the config file; a broken config is
    // reported by the command itself once logging is up.
    let logging = load_config_or_default(&cli.config)
        .unwrap_or_else(|_| AppConfig::default())
        .logging;

    // Setup logging
    let log_level = match cli.log_level {
        Some(cli::LogLevel::Trace) => "trace",
        Some(cli::LogLevel::Debug) => "debug",
        Some(cli::LogLevel::Info) => "info",
        Some(cli::LogLevel::Warn) => "warn",
        Some(cli::LogLevel::Error) => "error",
        None => logging.level.as_str(),
    };
    let json = cli.json_logs || logging.format == "json";
    let log_dir = cli.log_dir.as_deref().or(logging.directory.as_deref());
    let _guard = setup_logging(log_level, json, log_dir.map(Path::new));

    // Execute command
    match cli.command {
        Commands::Analyze(args) => cli::commands::analyze::run(args, &cli.config).await,
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config).await,
    }
}
