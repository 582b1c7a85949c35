//! Indicator trait definitions.

/// Trait for technical indicators over a single input column.
///
/// Output is index-aligned with the input: `None` marks positions before
/// the indicator has seen enough data.
pub trait Indicator: Send + Sync {
    /// Calculate indicator values for the given data.
    ///
    /// # Arguments
    /// * `data` - Input data (typically close prices)
    ///
    /// # Returns
    /// A vector with one entry per input value
    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>>;

    /// Number of leading positions that stay undefined.
    fn warmup(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}

/// Streaming indicator that maintains internal state.
///
/// Unlike batch indicators, streaming indicators are updated one value
/// at a time with O(1) work per update.
pub trait StreamingIndicator: Send + Sync {
    /// Update the indicator with a new value.
    ///
    /// # Returns
    /// The current indicator value, or None if not yet ready
    fn update(&mut self, value: f64) -> Option<f64>;

    /// Get the current value without adding new data.
    fn current(&self) -> Option<f64>;

    /// Reset the indicator state.
    fn reset(&mut self);

    /// Check if the indicator has enough data to produce values.
    fn is_ready(&self) -> bool {
        self.current().is_some()
    }
}

/// Multi-output indicator (e.g., MACD with its signal line).
pub trait MultiOutputIndicator: Send + Sync {
    /// The output type containing multiple values.
    type Outputs;

    /// Calculate indicator values, one per input value.
    fn calculate(&self, data: &[f64]) -> Vec<Self::Outputs>;

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestIndicator {
        period: usize,
    }

    impl Indicator for TestIndicator {
        fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
            // Trailing sum, undefined until the window fills
            (0..data.len())
                .map(|i| {
                    (i + 1 >= self.period)
                        .then(|| data[i + 1 - self.period..=i].iter().sum::<f64>())
                })
                .collect()
        }

        fn warmup(&self) -> usize {
            self.period - 1
        }

        fn name(&self) -> &str {
            "test"
        }
    }

    #[test]
    fn test_indicator_calculate() {
        let indicator = TestIndicator { period: 3 };
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = indicator.calculate(&data);

        assert_eq!(result.len(), 5);
        assert_eq!(result[1], None);
        assert_eq!(result[2], Some(6.0)); // 1+2+3
        assert_eq!(result[4], Some(12.0)); // 3+4+5
    }
}
