//! Analyze command implementation.

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use ta_config::load_config_or_default;
use ta_core::traits::PriceSource;
use ta_core::types::Period;
use ta_data::CsvPriceSource;
use ta_indicators::compute_indicators;
use ta_report::{export_csv_to_path, AnalysisReport};
use tracing::info;

use crate::cli::{AnalyzeArgs, OutputFormat};

pub async fn run(args: AnalyzeArgs, config_path: &Path) -> Result<()> {
    let config = load_config_or_default(config_path).context("Failed to load configuration")?;

    let period = match &args.period {
        Some(p) => p.parse::<Period>().map_err(|e| anyhow!(e))?,
        None => config.analysis.default_period,
    };
    let data_path = args
        .data
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data.path));

    info!(symbol = %args.symbol, %period, "Starting analysis");

    // Load price history
    let source = CsvPriceSource::new(&data_path).with_context(|| {
        format!(
            "Data path '{}' does not exist. Provide a CSV file or directory with --data",
            data_path.display()
        )
    })?;
    let series = source
        .fetch_history(&args.symbol, period)
        .await
        .with_context(|| format!("Failed to load price history for {}", args.symbol))?;

    // Indicators and signals
    let derived = compute_indicators(&series).context("Failed to compute indicators")?;
    let latest_close = series
        .last()
        .map(|p| p.close)
        .context("Price history is empty")?;
    let signals = config
        .analysis
        .classifier()
        .classify(latest_close, &derived.latest())
        .context("Failed to classify signals")?;

    let report = AnalysisReport::new(&series, period, &derived, signals)
        .context("Price history is empty")?;

    match args.output {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => println!("{}", report.summary(&config.report.currency)),
    }

    if let Some(export_path) = &args.export {
        export_csv_to_path(export_path, &series, &derived)
            .with_context(|| format!("Failed to export to {}", export_path.display()))?;
        info!("Data exported to {:?}", export_path);
    }

    Ok(())
}
