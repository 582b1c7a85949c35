//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stock-analysis")]
#[command(author, version, about = "Technical indicators and trading signals for daily equity prices")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (defaults to the configured level)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    /// Also write logs to daily-rotated files in this directory
    #[arg(long, env = "ANALYSIS_LOG_DIR")]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute indicators and signals for a symbol
    Analyze(AnalyzeArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Stock symbol (e.g. RELIANCE, TCS, INFY)
    #[arg(short, long)]
    pub symbol: String,

    /// Lookback period (1mo, 3mo, 6mo, 1y, 2y, 5y)
    #[arg(short, long)]
    pub period: Option<String>,

    /// CSV file or directory of per-symbol CSV files
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Write prices joined with indicators to this CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,
}
