//! Moving average indicators.

use std::collections::VecDeque;
use ta_core::traits::{Indicator, StreamingIndicator};

/// Simple Moving Average (SMA).
///
/// Arithmetic mean of the trailing N values. The first `N - 1` outputs are
/// undefined.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Create a new SMA with the specified window.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl Indicator for Sma {
    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut sma = StreamingSma::new(self.period);
        data.iter().map(|&value| sma.update(value)).collect()
    }

    fn warmup(&self) -> usize {
        self.period - 1
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

/// Exponential Moving Average (EMA).
///
/// Recursive EMA seeded with the first observation, smoothing factor
/// `2 / (span + 1)`. Defined from the very first input.
#[derive(Debug, Clone)]
pub struct Ema {
    alpha: f64,
}

impl Ema {
    /// Create a new EMA with the specified span.
    pub fn new(span: usize) -> Self {
        assert!(span > 0, "Span must be greater than 0");
        Self {
            alpha: 2.0 / (span as f64 + 1.0),
        }
    }

    /// Calculate the EMA of every input value.
    pub fn values(&self, data: &[f64]) -> Vec<f64> {
        let mut ema = StreamingEma::with_alpha(self.alpha);
        data.iter()
            .map(|&value| ema.step(value))
            .collect()
    }
}

impl Indicator for Ema {
    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        self.values(data).into_iter().map(Some).collect()
    }

    fn warmup(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "EMA"
    }
}

/// Streaming SMA over a fixed window.
///
/// Keeps the window and its running sum; each update is O(1).
#[derive(Debug, Clone)]
pub struct StreamingSma {
    period: usize,
    window: VecDeque<f64>,
    sum: f64,
    // Count of non-zero values in the window. When it drops to zero the
    // running sum is reset so an all-zero window averages to exactly 0.
    nonzero: usize,
}

impl StreamingSma {
    /// Create a new streaming SMA.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self {
            period,
            window: VecDeque::with_capacity(period + 1),
            sum: 0.0,
            nonzero: 0,
        }
    }
}

impl StreamingIndicator for StreamingSma {
    fn update(&mut self, value: f64) -> Option<f64> {
        self.window.push_back(value);
        self.sum += value;
        if value != 0.0 {
            self.nonzero += 1;
        }

        if self.window.len() > self.period {
            if let Some(oldest) = self.window.pop_front() {
                self.sum -= oldest;
                if oldest != 0.0 {
                    self.nonzero -= 1;
                }
            }
        }

        if self.nonzero == 0 {
            self.sum = 0.0;
        }

        self.current()
    }

    fn current(&self) -> Option<f64> {
        (self.window.len() == self.period).then(|| self.sum / self.period as f64)
    }

    fn reset(&mut self) {
        self.window.clear();
        self.sum = 0.0;
        self.nonzero = 0;
    }
}

/// Streaming EMA seeded with the first value it sees.
#[derive(Debug, Clone)]
pub struct StreamingEma {
    alpha: f64,
    current: Option<f64>,
}

impl StreamingEma {
    fn with_alpha(alpha: f64) -> Self {
        Self {
            alpha,
            current: None,
        }
    }

    /// Feed a value and return the updated EMA.
    ///
    /// Written as `prev + alpha * (value - prev)` so a constant input stays
    /// exactly constant and `alpha == 1` reproduces the input.
    pub fn step(&mut self, value: f64) -> f64 {
        let next = match self.current {
            None => value,
            Some(prev) => prev + self.alpha * (value - prev),
        };
        self.current = Some(next);
        next
    }
}

impl StreamingIndicator for StreamingEma {
    fn update(&mut self, value: f64) -> Option<f64> {
        Some(self.step(value))
    }

    fn current(&self) -> Option<f64> {
        self.current
    }

    fn reset(&mut self) {
        self.current = None;
    }
}
