//! Indicator trait definitions.
//!
//! Every indicator returns exactly one value per input point, aligned by
//! index with its input. Points without a defined result (warm-up, degenerate
//! ratios) are `None`, never zero or NaN.

/// Trait for single-output technical indicators over a price series.
pub trait Indicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Calculate indicator values for the given data.
    ///
    /// # Arguments
    /// * `data` - Input data, oldest first (typically close prices)
    ///
    /// # Returns
    /// A vector with `data.len()` entries
    fn calculate(&self, data: &[f64]) -> Vec<Option<Self::Output>>;

    /// Number of leading points that never have a value.
    fn lookback(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}

/// Multi-output indicator (e.g., Bollinger Bands, MACD).
///
/// Some indicators produce multiple related values.
pub trait MultiOutputIndicator: Send + Sync {
    /// The output type containing multiple values.
    type Outputs;

    /// Calculate indicator values for the given data, one entry per point.
    fn calculate(&self, data: &[f64]) -> Vec<Option<Self::Outputs>>;

    /// Number of leading points that never have a value.
    fn lookback(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}

/// Indicator that combines prices with traded volume.
pub trait VolumeIndicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Calculate indicator values from close prices and volumes.
    ///
    /// # Arguments
    /// * `close` - Close prices
    /// * `volume` - Volume data, same length as `close`
    fn calculate(&self, close: &[f64], volume: &[f64]) -> Vec<Option<Self::Output>>;

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TrailingSum {
        period: usize,
    }

    impl Indicator for TrailingSum {
        type Output = f64;

        fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
            (0..data.len())
                .map(|i| {
                    (i + 1 >= self.period).then(|| data[i + 1 - self.period..=i].iter().sum())
                })
                .collect()
        }

        fn lookback(&self) -> usize {
            self.period - 1
        }

        fn name(&self) -> &str {
            "test"
        }
    }

    #[test]
    fn test_indicator_output_is_aligned() {
        let indicator = TrailingSum { period: 3 };
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = indicator.calculate(&data);

        assert_eq!(result.len(), data.len());
        assert!(result[..indicator.lookback()].iter().all(Option::is_none));
        assert_eq!(result[2], Some(6.0)); // 1+2+3
        assert_eq!(result[4], Some(12.0)); // 3+4+5
    }
}
