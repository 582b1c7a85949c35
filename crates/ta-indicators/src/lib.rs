//! Technical indicators over daily close prices.
//!
//! This crate provides incremental implementations of:
//! - Moving averages (SMA, EMA seeded at the first observation)
//! - Momentum indicators (RSI over rolling means, MACD with signal line)
//! - The indicator calculator that assembles them into a [`DerivedSeries`]
//!
//! Every indicator scans its input once, keeping only a running sum or a
//! single running value.
//!
//! [`DerivedSeries`]: ta_core::types::DerivedSeries

pub mod calculator;
pub mod momentum;
pub mod moving_average;

pub use calculator::compute_indicators;
pub use momentum::{Macd, MacdOutput, Rsi};
pub use moving_average::{Ema, Sma, StreamingEma, StreamingSma};
