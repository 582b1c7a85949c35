//! Core traits for the analysis engine.

mod indicator;
mod price_source;

pub use indicator::{Indicator, MultiOutputIndicator, StreamingIndicator};
pub use price_source::PriceSource;
