//! CSV export of prices joined with their indicators.

use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use ta_core::error::DataError;
use ta_core::types::{DerivedSeries, IndicatorName, PricePoint};
use tracing::info;

const PRICE_HEADERS: [&str; 6] = ["Date", "Open", "High", "Low", "Close", "Volume"];

fn cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write one row per trading day: the price columns followed by every
/// indicator column. Undefined indicator values are left empty.
///
/// # Errors
/// [`DataError::Export`] if the indicator table is not aligned with the
/// prices or the writer fails.
pub fn export_csv<W: Write>(
    writer: W,
    points: &[PricePoint],
    derived: &DerivedSeries,
) -> Result<(), DataError> {
    if derived.len() != points.len() {
        return Err(DataError::Export(format!(
            "indicator rows ({}) do not match price rows ({})",
            derived.len(),
            points.len()
        )));
    }

    let mut csv = Writer::from_writer(writer);
    let export_err = |e: csv::Error| DataError::Export(e.to_string());

    let headers = PRICE_HEADERS
        .iter()
        .copied()
        .chain(IndicatorName::all().iter().map(|name| name.as_str()));
    csv.write_record(headers).map_err(export_err)?;

    for (i, point) in points.iter().enumerate() {
        let mut record = vec![
            point.date.format("%Y-%m-%d").to_string(),
            point.open.to_string(),
            point.high.to_string(),
            point.low.to_string(),
            point.close.to_string(),
            point.volume.to_string(),
        ];
        record.extend(derived.columns().map(|(_, column)| cell(column[i])));
        csv.write_record(&record).map_err(export_err)?;
    }

    csv.flush()?;
    Ok(())
}

/// Export to a file at `path`, replacing it if present.
pub fn export_csv_to_path(
    path: &Path,
    points: &[PricePoint],
    derived: &DerivedSeries,
) -> Result<(), DataError> {
    let file = File::create(path)?;
    export_csv(file, points, derived)?;
    info!(path = %path.display(), rows = points.len(), "Exported analysis CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use ta_indicators::compute_indicators;
    use tempfile::tempdir;

    fn points() -> Vec<PricePoint> {
        (1..=3)
            .map(|d| {
                let date = NaiveDate::from_ymd_opt(2024, 2, d).unwrap();
                let close = 10.0 * d as f64;
                PricePoint::new(date, close, close + 0.5, close - 0.5, close, 100.0)
            })
            .collect()
    }

    #[test]
    fn test_export_layout() {
        let points = points();
        let derived = compute_indicators(&points).unwrap();

        let mut out = Vec::new();
        export_csv(&mut out, &points, &derived).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "Date,Open,High,Low,Close,Volume,MA20,MA50,MA200,RSI,MACD,Signal_Line"
        );
        assert!(lines[1].starts_with("2024-02-01,10,10.5,9.5,10,100,,,,,0,0"));
        assert_eq!(lines[3].split(',').count(), 12);
    }

    #[test]
    fn test_export_rejects_misaligned_table() {
        let points = points();
        let derived = DerivedSeries::default();

        let result = export_csv(Vec::new(), &points, &derived);
        assert!(matches!(result, Err(DataError::Export(_))));
    }

    #[test]
    fn test_export_to_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let points = points();
        let derived = compute_indicators(&points).unwrap();

        export_csv_to_path(&path, &points, &derived).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Date,Open"));
    }
}
