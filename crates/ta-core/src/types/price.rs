//! Daily price history types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

use super::Period;
use crate::error::DataError;

/// One trading day of open/high/low/close/volume data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded volume
    pub volume: f64,
}

impl PricePoint {
    /// Create a new price point.
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Chronologically ordered price history for one symbol.
///
/// Dates are strictly increasing. The series dereferences to a slice so the
/// indicator calculator can borrow it read-only.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PriceSeries {
    /// Symbol identifier
    pub symbol: String,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Create a series, rejecting out-of-order or duplicate dates.
    pub fn new(symbol: impl Into<String>, points: Vec<PricePoint>) -> Result<Self, DataError> {
        if let Some(pair) = points.windows(2).find(|w| w[1].date <= w[0].date) {
            return Err(DataError::Unordered {
                previous: pair[0].date,
                next: pair[1].date,
            });
        }
        Ok(Self {
            symbol: symbol.into(),
            points,
        })
    }

    /// Get the last point.
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Extract close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Extract dates as a vector.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Keep only the trailing `period` of history, measured back from the
    /// last available date.
    pub fn trailing(&self, period: Period) -> Self {
        let Some(last) = self.points.last() else {
            return self.clone();
        };
        let start = period.start_date(last.date);
        let points = self
            .points
            .iter()
            .filter(|p| p.date > start)
            .copied()
            .collect();
        Self {
            symbol: self.symbol.clone(),
            points,
        }
    }
}

impl Deref for PriceSeries {
    type Target = [PricePoint];

    fn deref(&self) -> &[PricePoint] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn point(d: u32, close: f64) -> PricePoint {
        PricePoint::new(day(d), close, close + 1.0, close - 1.0, close, 1000.0)
    }

    #[test]
    fn test_series_rejects_unordered_dates() {
        let result = PriceSeries::new("TCS", vec![point(3, 10.0), point(2, 11.0)]);
        assert!(matches!(result, Err(DataError::Unordered { .. })));

        let result = PriceSeries::new("TCS", vec![point(3, 10.0), point(3, 11.0)]);
        assert!(matches!(result, Err(DataError::Unordered { .. })));
    }

    #[test]
    fn test_series_extractions() {
        let series = PriceSeries::new("INFY", vec![point(2, 100.5), point(3, 101.5)]).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.closes(), vec![100.5, 101.5]);
        assert_eq!(series.dates(), vec![day(2), day(3)]);
        assert_eq!(series.last().unwrap().close, 101.5);
    }

    #[test]
    fn test_trailing_period() {
        let points = (1..=31).map(|d| point(d, d as f64)).collect();
        let series = PriceSeries::new("RELIANCE", points).unwrap();

        // One month back from Jan 31 is Dec 31, so all of January stays.
        assert_eq!(series.trailing(Period::OneMonth).len(), 31);

        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let quarter: Vec<PricePoint> = (0..91)
            .map(|i| {
                let date = start.checked_add_days(chrono::Days::new(i)).unwrap();
                PricePoint::new(date, 1.0, 1.0, 1.0, 1.0, 1.0)
            })
            .collect();
        let series = PriceSeries::new("RELIANCE", quarter).unwrap();
        let march = series.trailing(Period::OneMonth);
        assert_eq!(march.len(), 31);
        assert_eq!(march[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        let empty = PriceSeries::default();
        assert!(empty.trailing(Period::OneYear).is_empty());
    }
}
