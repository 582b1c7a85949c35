//! Error types for the analysis engine.

use chrono::NaiveDate;
use thiserror::Error;

/// Top-level analysis error.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("Signal error: {0}")]
    Signal(#[from] SignalError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Indicator calculation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndicatorError {
    /// The price series has no points to analyze.
    #[error("Empty input: price series has no data points")]
    EmptyInput,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Signal classification errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    /// A value the classifier cannot do without is undefined.
    #[error("Insufficient data: {field} is undefined")]
    InsufficientData { field: &'static str },

    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(String),
}

/// Price source errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("No data available for the requested range")]
    NoDataAvailable,

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Series is not strictly increasing by date: {previous} followed by {next}")]
    Unordered { previous: NaiveDate, next: NaiveDate },

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            IndicatorError::EmptyInput.to_string(),
            "Empty input: price series has no data points"
        );
        assert_eq!(
            SignalError::InsufficientData { field: "MACD" }.to_string(),
            "Insufficient data: MACD is undefined"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: AnalysisError = IndicatorError::EmptyInput.into();
        assert!(matches!(err, AnalysisError::Indicator(IndicatorError::EmptyInput)));

        let err: AnalysisError = DataError::NoDataAvailable.into();
        assert!(err.to_string().starts_with("Data error"));
    }
}
