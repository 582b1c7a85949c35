//! Core data types for the analysis engine.

mod derived;
mod period;
mod price;
mod signal;

pub use derived::{DerivedSeries, IndicatorName, LatestIndicators};
pub use period::Period;
pub use price::{PricePoint, PriceSeries};
pub use signal::{Sentiment, Signal, SignalKind};
