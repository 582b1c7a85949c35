//! Momentum indicators.

use serde::{Deserialize, Serialize};
use ta_core::error::IndicatorError;
use ta_core::traits::{Indicator, MultiOutputIndicator, StreamingIndicator};

use crate::moving_average::{Ema, StreamingSma};

/// Relative Strength Index (RSI).
///
/// Average gain and average loss are simple rolling means over the last
/// `period` price changes, so the first value appears at index `period`.
/// A window without losses saturates at 100.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Create a new RSI indicator.
    ///
    /// The classic period is 14.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }

    fn from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
        if avg_loss <= 0.0 {
            return 100.0;
        }
        let rs = avg_gain / avg_loss;
        (100.0 - 100.0 / (1.0 + rs)).clamp(0.0, 100.0)
    }
}

impl Indicator for Rsi {
    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut gains = StreamingSma::new(self.period);
        let mut losses = StreamingSma::new(self.period);

        let mut result = Vec::with_capacity(data.len());
        if data.is_empty() {
            return result;
        }
        // No change exists for the first close
        result.push(None);

        for pair in data.windows(2) {
            let change = pair[1] - pair[0];
            let avg_gain = gains.update(change.max(0.0));
            let avg_loss = losses.update((-change).max(0.0));

            result.push(match (avg_gain, avg_loss) {
                (Some(gain), Some(loss)) => Some(Self::from_averages(gain, loss)),
                _ => None,
            });
        }

        result
    }

    fn warmup(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

/// MACD (Moving Average Convergence Divergence) output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdOutput {
    /// MACD line (fast EMA - slow EMA)
    pub macd: f64,
    /// Signal line (EMA of MACD)
    pub signal: f64,
    /// Histogram (MACD - Signal)
    pub histogram: f64,
}

/// MACD indicator.
///
/// Both EMAs and the signal line are seeded at the first observation, so
/// every input position has a defined output.
#[derive(Debug, Clone)]
pub struct Macd {
    fast: Ema,
    slow: Ema,
    signal: Ema,
}

impl Macd {
    /// Create a new MACD with default spans (12, 26, 9).
    pub fn new() -> Self {
        Self {
            fast: Ema::new(12),
            slow: Ema::new(26),
            signal: Ema::new(9),
        }
    }

    /// Create a MACD with custom spans.
    pub fn with_periods(fast: usize, slow: usize, signal: usize) -> Result<Self, IndicatorError> {
        if fast == 0 || slow == 0 || signal == 0 {
            return Err(IndicatorError::InvalidParameter(
                "MACD spans must be greater than 0".into(),
            ));
        }
        if fast >= slow {
            return Err(IndicatorError::InvalidParameter(format!(
                "fast span ({}) must be less than slow span ({})",
                fast, slow
            )));
        }
        Ok(Self {
            fast: Ema::new(fast),
            slow: Ema::new(slow),
            signal: Ema::new(signal),
        })
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiOutputIndicator for Macd {
    type Outputs = MacdOutput;

    fn calculate(&self, data: &[f64]) -> Vec<MacdOutput> {
        let fast = self.fast.values(data);
        let slow = self.slow.values(data);

        let macd_line: Vec<f64> = fast.iter().zip(slow.iter()).map(|(f, s)| f - s).collect();
        let signal_line = self.signal.values(&macd_line);

        macd_line
            .into_iter()
            .zip(signal_line)
            .map(|(macd, signal)| MacdOutput {
                macd,
                signal,
                histogram: macd - signal,
            })
            .collect()
    }

    fn name(&self) -> &str {
        "MACD"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_hand_computed() {
        let rsi = Rsi::new(2);
        // changes: +1, -1, +2
        let result = rsi.calculate(&[1.0, 2.0, 1.0, 3.0]);

        assert_eq!(result.len(), 4);
        assert_eq!(result[0], None);
        assert_eq!(result[1], None);
        // avg gain 0.5, avg loss 0.5 => RS 1
        assert!((result[2].unwrap() - 50.0).abs() < 1e-10);
        // avg gain 1.0, avg loss 0.5 => RS 2
        assert!((result[3].unwrap() - 200.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_rsi_bounded() {
        let rsi = Rsi::new(14);
        let data: Vec<f64> = (0..120)
            .map(|i| 100.0 + (i as f64 * 0.5).sin() * 5.0 + (i as f64 * 0.13).cos())
            .collect();

        let result = rsi.calculate(&data);
        assert_eq!(result.len(), data.len());

        for (i, value) in result.iter().enumerate() {
            assert_eq!(value.is_some(), i >= 14);
            if let Some(v) = value {
                assert!((0.0..=100.0).contains(v));
            }
        }
    }

    #[test]
    fn test_rsi_all_gains() {
        let rsi = Rsi::new(5);
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let result = rsi.calculate(&data);

        assert_eq!(result[5], Some(100.0));
        assert_eq!(result[6], Some(100.0));
    }

    #[test]
    fn test_rsi_all_losses() {
        let rsi = Rsi::new(5);
        let data = vec![7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        let result = rsi.calculate(&data);

        assert_eq!(result[6], Some(0.0));
    }

    #[test]
    fn test_rsi_flat_saturates() {
        let rsi = Rsi::new(3);
        let result = rsi.calculate(&[5.0; 6]);

        assert_eq!(result[3], Some(100.0));
        assert_eq!(result[5], Some(100.0));
    }

    #[test]
    fn test_rsi_short_input() {
        let rsi = Rsi::new(14);
        assert!(rsi.calculate(&[]).is_empty());
        assert_eq!(rsi.calculate(&[10.0]), vec![None]);
    }

    #[test]
    fn test_macd_uptrend() {
        let macd = Macd::new();
        let data: Vec<f64> = (0..50).map(|i| 100.0 + i as f64).collect();
        let result = macd.calculate(&data);

        assert_eq!(result.len(), data.len());
        let last = result.last().unwrap();
        assert!(last.macd > 0.0);
        assert!(last.macd > last.signal);
        assert!((last.histogram - (last.macd - last.signal)).abs() < 1e-12);
    }

    #[test]
    fn test_macd_first_value_is_zero() {
        let result = Macd::new().calculate(&[42.0]);

        assert_eq!(
            result,
            vec![MacdOutput {
                macd: 0.0,
                signal: 0.0,
                histogram: 0.0
            }]
        );
    }

    #[test]
    fn test_macd_custom_periods() {
        let macd = Macd::with_periods(5, 10, 3).unwrap();
        let data: Vec<f64> = (0..30).map(|i| 100.0 - i as f64).collect();
        let result = macd.calculate(&data);

        assert!(result.last().unwrap().macd < 0.0);
    }

    #[test]
    fn test_macd_rejects_bad_periods() {
        assert!(matches!(
            Macd::with_periods(26, 12, 9),
            Err(IndicatorError::InvalidParameter(_))
        ));
        assert!(Macd::with_periods(0, 12, 9).is_err());
    }
}
