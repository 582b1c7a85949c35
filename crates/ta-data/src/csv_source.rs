//! CSV price source.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use ta_core::error::DataError;
use ta_core::traits::PriceSource;
use ta_core::types::{Period, PricePoint, PriceSeries};
use tracing::{debug, info};

use crate::symbol::normalize_symbol;

/// CSV record format (Yahoo Finance style headers).
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "Datetime", alias = "timestamp")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: f64,
    #[serde(alias = "High", alias = "high")]
    high: f64,
    #[serde(alias = "Low", alias = "low")]
    low: f64,
    #[serde(alias = "Close", alias = "close")]
    close: f64,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: f64,
}

/// Price source backed by a CSV file or a directory of per-symbol files.
pub struct CsvPriceSource {
    path: PathBuf,
}

impl CsvPriceSource {
    /// Create a new CSV price source.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataError::NoDataAvailable);
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Find the file holding `symbol`'s history.
    fn resolve(&self, symbol: &str) -> Result<PathBuf, DataError> {
        if self.path.is_file() {
            return Ok(self.path.clone());
        }

        let upper = normalize_symbol(symbol);
        let lower = upper.to_lowercase();
        let candidates = [
            self.path.join(format!("{}.csv", upper)),
            self.path.join(format!("{}.csv", lower)),
            self.path.join(format!("{}.NS.csv", upper)),
            self.path.join(format!("{}_daily.csv", upper)),
            self.path.join(format!("{}_daily.csv", lower)),
        ];

        candidates
            .into_iter()
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| DataError::SymbolNotFound(upper))
    }

    /// Load every row of a CSV file, oldest first.
    fn load_from_path(&self, path: &Path) -> Result<Vec<PricePoint>, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let mut points = Vec::new();

        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;

            points.push(PricePoint::new(
                parse_date(&record.date)?,
                record.open,
                record.high,
                record.low,
                record.close,
                record.volume,
            ));
        }

        points.sort_by_key(|p| p.date);

        Ok(points)
    }
}

#[async_trait]
impl PriceSource for CsvPriceSource {
    async fn fetch_history(&self, symbol: &str, period: Period) -> Result<PriceSeries, DataError> {
        let path = self.resolve(symbol)?;
        debug!(path = %path.display(), "Reading price history");

        let points = self.load_from_path(&path)?;
        let series = PriceSeries::new(normalize_symbol(symbol), points)?.trailing(period);

        if series.is_empty() {
            return Err(DataError::NoDataAvailable);
        }

        info!(
            symbol = %series.symbol,
            %period,
            points = series.len(),
            "Loaded price history"
        );

        Ok(series)
    }

    fn name(&self) -> &str {
        "csv"
    }
}

/// Parse the date formats found in exported price files.
fn parse_date(date_str: &str) -> Result<NaiveDate, DataError> {
    let date_formats = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];
    for format in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            return Ok(d);
        }
    }

    // Exchange-local timestamps such as "2024-01-15 00:00:00+05:30"
    if let Ok(dt) = DateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S%:z") {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }

    // Unix timestamp, milliseconds if > 10 digits
    if let Ok(ts) = date_str.parse::<i64>() {
        let millis = if ts > 10_000_000_000 { ts } else { ts * 1000 };
        if let Some(dt) = DateTime::from_timestamp_millis(millis) {
            return Ok(dt.date_naive());
        }
    }

    Err(DataError::ParseError(format!(
        "Could not parse date: {}",
        date_str
    )))
}
