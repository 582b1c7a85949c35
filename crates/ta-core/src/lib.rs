//! Core types and traits for the stock analysis engine.
//!
//! This crate provides the foundational building blocks including:
//! - Price history types (PricePoint, PriceSeries, Period)
//! - Derived indicator columns and their latest row
//! - Trading signals produced by the classifier
//! - Core traits for indicators and price sources

pub mod error;
pub mod traits;
pub mod types;

pub use error::{AnalysisError, AnalysisResult};
pub use traits::*;
pub use types::*;
