//! Derived indicator columns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a derived indicator column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorName {
    #[serde(rename = "MA20")]
    Ma20,
    #[serde(rename = "MA50")]
    Ma50,
    #[serde(rename = "MA200")]
    Ma200,
    #[serde(rename = "RSI")]
    Rsi,
    #[serde(rename = "MACD")]
    Macd,
    #[serde(rename = "Signal_Line")]
    SignalLine,
}

impl IndicatorName {
    /// All columns in presentation order.
    pub fn all() -> &'static [IndicatorName] {
        &[
            IndicatorName::Ma20,
            IndicatorName::Ma50,
            IndicatorName::Ma200,
            IndicatorName::Rsi,
            IndicatorName::Macd,
            IndicatorName::SignalLine,
        ]
    }

    /// Column header used for display and export.
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorName::Ma20 => "MA20",
            IndicatorName::Ma50 => "MA50",
            IndicatorName::Ma200 => "MA200",
            IndicatorName::Rsi => "RSI",
            IndicatorName::Macd => "MACD",
            IndicatorName::SignalLine => "Signal_Line",
        }
    }
}

impl fmt::Display for IndicatorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Indicator table aligned 1:1 with the input price series.
///
/// `None` marks a head-of-series value whose window is not yet seeded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedSeries {
    pub ma20: Vec<Option<f64>>,
    pub ma50: Vec<Option<f64>>,
    pub ma200: Vec<Option<f64>>,
    pub rsi: Vec<Option<f64>>,
    pub macd: Vec<Option<f64>>,
    pub signal_line: Vec<Option<f64>>,
}

impl DerivedSeries {
    /// Number of rows (equal to the input series length).
    pub fn len(&self) -> usize {
        self.ma20.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ma20.is_empty()
    }

    /// Get a column by name.
    pub fn column(&self, name: IndicatorName) -> &[Option<f64>] {
        match name {
            IndicatorName::Ma20 => &self.ma20,
            IndicatorName::Ma50 => &self.ma50,
            IndicatorName::Ma200 => &self.ma200,
            IndicatorName::Rsi => &self.rsi,
            IndicatorName::Macd => &self.macd,
            IndicatorName::SignalLine => &self.signal_line,
        }
    }

    /// Iterate columns in presentation order.
    pub fn columns(&self) -> impl Iterator<Item = (IndicatorName, &[Option<f64>])> {
        IndicatorName::all()
            .iter()
            .map(move |&name| (name, self.column(name)))
    }

    /// Values of every column at row `index`.
    pub fn row(&self, index: usize) -> Option<LatestIndicators> {
        if index >= self.len() {
            return None;
        }
        let at = |name| self.column(name).get(index).copied().flatten();
        Some(LatestIndicators {
            ma20: at(IndicatorName::Ma20),
            ma50: at(IndicatorName::Ma50),
            ma200: at(IndicatorName::Ma200),
            rsi: at(IndicatorName::Rsi),
            macd: at(IndicatorName::Macd),
            signal_line: at(IndicatorName::SignalLine),
        })
    }

    /// The last row, or an all-undefined row for an empty table.
    pub fn latest(&self) -> LatestIndicators {
        self.len()
            .checked_sub(1)
            .and_then(|i| self.row(i))
            .unwrap_or_default()
    }
}

/// One row of the indicator table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatestIndicators {
    pub ma20: Option<f64>,
    pub ma50: Option<f64>,
    pub ma200: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub signal_line: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DerivedSeries {
        DerivedSeries {
            ma20: vec![None, Some(1.5)],
            ma50: vec![None, None],
            ma200: vec![None, None],
            rsi: vec![None, Some(100.0)],
            macd: vec![Some(0.0), Some(0.1)],
            signal_line: vec![Some(0.0), Some(0.02)],
        }
    }

    #[test]
    fn test_latest_row() {
        let latest = sample().latest();
        assert_eq!(latest.ma20, Some(1.5));
        assert_eq!(latest.ma50, None);
        assert_eq!(latest.rsi, Some(100.0));
        assert_eq!(latest.signal_line, Some(0.02));
    }

    #[test]
    fn test_latest_of_empty_is_undefined() {
        let latest = DerivedSeries::default().latest();
        assert_eq!(latest, LatestIndicators::default());
        assert!(DerivedSeries::default().row(0).is_none());
    }

    #[test]
    fn test_columns_in_order() {
        let derived = sample();
        let names: Vec<&str> = derived.columns().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["MA20", "MA50", "MA200", "RSI", "MACD", "Signal_Line"]);
        assert!(derived.columns().all(|(_, col)| col.len() == derived.len()));
    }

    #[test]
    fn test_indicator_name_serializes_as_header() {
        let json = serde_json::to_string(&IndicatorName::SignalLine).unwrap();
        assert_eq!(json, "\"Signal_Line\"");
    }
}
