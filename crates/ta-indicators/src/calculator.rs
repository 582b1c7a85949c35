//! Indicator calculator.
//!
//! Turns an ordered price series into the full indicator table used by the
//! signal classifier and the CSV export.

use ta_core::error::IndicatorError;
use ta_core::traits::{Indicator, MultiOutputIndicator};
use ta_core::types::{DerivedSeries, PricePoint};
use tracing::debug;

use crate::momentum::{Macd, Rsi};
use crate::moving_average::Sma;

/// Short moving average window.
pub const MA_SHORT: usize = 20;
/// Medium moving average window.
pub const MA_MEDIUM: usize = 50;
/// Long moving average window.
pub const MA_LONG: usize = 200;
/// RSI lookback.
pub const RSI_PERIOD: usize = 14;

/// Compute MA20, MA50, MA200, RSI(14), MACD(12, 26) and its 9-span signal
/// line for every point of `series`.
///
/// The input is only borrowed. Every column of the result has
/// `series.len()` entries.
///
/// # Errors
/// [`IndicatorError::EmptyInput`] if `series` has no points.
pub fn compute_indicators(series: &[PricePoint]) -> Result<DerivedSeries, IndicatorError> {
    if series.is_empty() {
        return Err(IndicatorError::EmptyInput);
    }

    let closes: Vec<f64> = series.iter().map(|p| p.close).collect();

    let macd = Macd::new().calculate(&closes);
    let derived = DerivedSeries {
        ma20: Sma::new(MA_SHORT).calculate(&closes),
        ma50: Sma::new(MA_MEDIUM).calculate(&closes),
        ma200: Sma::new(MA_LONG).calculate(&closes),
        rsi: Rsi::new(RSI_PERIOD).calculate(&closes),
        macd: macd.iter().map(|o| Some(o.macd)).collect(),
        signal_line: macd.iter().map(|o| Some(o.signal)).collect(),
    };

    debug!(
        points = series.len(),
        first = %series[0].date,
        last = %series[series.len() - 1].date,
        "Computed indicators"
    );

    Ok(derived)
}
