//! Quote summary of a price series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ta_core::types::PricePoint;

/// Headline numbers for the most recent trading day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteSummary {
    /// Date of the latest point
    pub as_of: NaiveDate,
    /// Latest close
    pub current_price: f64,
    /// Change versus the previous close
    pub change: Option<f64>,
    /// Change versus the previous close, in percent
    pub change_pct: Option<f64>,
    /// Latest volume
    pub volume: f64,
    /// Lowest low over the series
    pub range_low: f64,
    /// Highest high over the series
    pub range_high: f64,
}

impl QuoteSummary {
    /// Summarize a series; `None` when it is empty.
    ///
    /// Change figures need two points and a non-zero previous close.
    pub fn from_points(points: &[PricePoint]) -> Option<Self> {
        let last = points.last()?;
        let previous = points.len().checked_sub(2).map(|i| points[i].close);

        let change = previous.map(|prev| last.close - prev);
        let change_pct = match (change, previous) {
            (Some(c), Some(prev)) if prev != 0.0 => Some(c / prev * 100.0),
            _ => None,
        };

        let range_low = points.iter().map(|p| p.low).fold(f64::INFINITY, f64::min);
        let range_high = points.iter().map(|p| p.high).fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            as_of: last.date,
            current_price: last.close,
            change,
            change_pct,
            volume: last.volume,
            range_low,
            range_high,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(day: u32, low: f64, high: f64, close: f64) -> PricePoint {
        let date = NaiveDate::from_ymd_opt(2024, 5, day).unwrap();
        PricePoint::new(date, close, high, low, close, 5_000.0 + day as f64)
    }

    #[test]
    fn test_summary() {
        let points = vec![
            point(1, 95.0, 105.0, 100.0),
            point(2, 90.0, 104.0, 102.0),
            point(3, 99.0, 110.0, 96.9),
        ];
        let summary = QuoteSummary::from_points(&points).unwrap();

        assert_eq!(summary.as_of, NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
        assert_eq!(summary.current_price, 96.9);
        assert!((summary.change.unwrap() - (-5.1)).abs() < 1e-9);
        assert!((summary.change_pct.unwrap() - (-5.0)).abs() < 1e-9);
        assert_eq!(summary.volume, 5_003.0);
        assert_eq!(summary.range_low, 90.0);
        assert_eq!(summary.range_high, 110.0);
    }

    #[test]
    fn test_single_point_has_no_change() {
        let summary = QuoteSummary::from_points(&[point(1, 9.0, 11.0, 10.0)]).unwrap();

        assert_eq!(summary.change, None);
        assert_eq!(summary.change_pct, None);
    }

    #[test]
    fn test_empty() {
        assert!(QuoteSummary::from_points(&[]).is_none());
    }
}
