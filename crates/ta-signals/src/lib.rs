//! Rule-based signal classifier.
//!
//! Reads the latest close and the latest indicator row and emits, in a
//! fixed order, a trend signal, an optional RSI extremity signal and a
//! MACD crossover signal.

mod classifier;

pub use classifier::{classify_signals, SignalClassifier};
