//! Trading signal types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative category of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    /// Price above both short and medium moving averages
    Bullish,
    /// Price not above both moving averages
    Bearish,
    /// RSI above the overbought threshold
    Overbought,
    /// RSI below the oversold threshold
    Oversold,
    /// MACD above its signal line
    MacdBullish,
    /// MACD at or below its signal line
    MacdBearish,
}

/// Presentation tone of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Caution,
}

impl SignalKind {
    /// Short human-readable tag.
    pub fn label(&self) -> &'static str {
        match self {
            SignalKind::Bullish => "Bullish",
            SignalKind::Bearish => "Bearish",
            SignalKind::Overbought => "Overbought",
            SignalKind::Oversold => "Oversold",
            SignalKind::MacdBullish => "MACD Bullish",
            SignalKind::MacdBearish => "MACD Bearish",
        }
    }

    pub fn sentiment(&self) -> Sentiment {
        match self {
            SignalKind::Bullish | SignalKind::MacdBullish => Sentiment::Positive,
            SignalKind::Bearish | SignalKind::MacdBearish => Sentiment::Negative,
            SignalKind::Overbought | SignalKind::Oversold => Sentiment::Caution,
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified signal with its rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub kind: SignalKind,
    pub rationale: String,
}

impl Signal {
    pub fn new(kind: SignalKind, rationale: impl Into<String>) -> Self {
        Self {
            kind,
            rationale: rationale.into(),
        }
    }

    /// Short human-readable tag.
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.rationale)
    }
}
