//! Threshold rules turning the latest indicator row into signals.

use serde::{Deserialize, Serialize};
use ta_core::error::SignalError;
use ta_core::types::{LatestIndicators, Signal, SignalKind};
use tracing::debug;

/// Classifier configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalClassifier {
    /// RSI strictly above this is overbought
    pub overbought: f64,
    /// RSI strictly below this is oversold
    pub oversold: f64,
}

impl Default for SignalClassifier {
    fn default() -> Self {
        Self {
            overbought: 70.0,
            oversold: 30.0,
        }
    }
}

impl SignalClassifier {
    /// Create a classifier with custom RSI thresholds.
    pub fn new(overbought: f64, oversold: f64) -> Result<Self, SignalError> {
        let classifier = Self {
            overbought,
            oversold,
        };
        classifier.validate()?;
        Ok(classifier)
    }

    pub fn validate(&self) -> Result<(), SignalError> {
        if !(0.0..=100.0).contains(&self.overbought) || !(0.0..=100.0).contains(&self.oversold) {
            return Err(SignalError::InvalidThresholds(
                "RSI thresholds must be between 0 and 100".into(),
            ));
        }
        if self.overbought <= self.oversold {
            return Err(SignalError::InvalidThresholds(
                "Overbought must be greater than oversold".into(),
            ));
        }
        Ok(())
    }

    /// Classify the latest close against the latest indicator row.
    ///
    /// Signals come out in a fixed order: trend, then RSI extremity (only
    /// when RSI is defined and outside the thresholds), then MACD.
    ///
    /// An undefined MA20 or MA50 fails the "price above" test, so short
    /// histories report `Bearish`.
    ///
    /// # Errors
    /// [`SignalError::InsufficientData`] if the close is not finite or MACD
    /// or its signal line is undefined.
    pub fn classify(
        &self,
        latest_close: f64,
        latest: &LatestIndicators,
    ) -> Result<Vec<Signal>, SignalError> {
        if !latest_close.is_finite() {
            return Err(SignalError::InsufficientData { field: "close" });
        }
        let macd = latest
            .macd
            .ok_or(SignalError::InsufficientData { field: "MACD" })?;
        let signal_line = latest
            .signal_line
            .ok_or(SignalError::InsufficientData { field: "Signal_Line" })?;

        let mut signals = Vec::with_capacity(3);

        let above = |ma: Option<f64>| matches!(ma, Some(value) if latest_close > value);
        if above(latest.ma20) && above(latest.ma50) {
            signals.push(Signal::new(SignalKind::Bullish, "Price above moving averages"));
        } else {
            signals.push(Signal::new(SignalKind::Bearish, "Price below moving averages"));
        }

        match latest.rsi {
            Some(rsi) if rsi > self.overbought => {
                signals.push(Signal::new(SignalKind::Overbought, format!("RSI: {:.2}", rsi)));
            }
            Some(rsi) if rsi < self.oversold => {
                signals.push(Signal::new(SignalKind::Oversold, format!("RSI: {:.2}", rsi)));
            }
            _ => {}
        }

        if macd > signal_line {
            signals.push(Signal::new(SignalKind::MacdBullish, "MACD above signal line"));
        } else {
            signals.push(Signal::new(SignalKind::MacdBearish, "MACD below signal line"));
        }

        debug!(
            close = latest_close,
            count = signals.len(),
            "Classified signals"
        );

        Ok(signals)
    }
}

/// Classify with the default 70/30 RSI thresholds.
pub fn classify_signals(
    latest_close: f64,
    latest: &LatestIndicators,
) -> Result<Vec<Signal>, SignalError> {
    SignalClassifier::default().classify(latest_close, latest)
}
