//! Volatility indicators.

use direction_core::traits::{Indicator, MultiOutputIndicator};
use serde::{Deserialize, Serialize};

use crate::moving_average::Sma;

/// Sample standard deviation over a trailing window (divisor `period - 1`).
#[derive(Debug, Clone)]
pub struct StdDev {
    period: usize,
}

impl StdDev {
    /// Create a new standard deviation indicator.
    pub fn new(period: usize) -> Self {
        assert!(period > 1, "Period must be greater than 1");
        Self { period }
    }
}

impl Indicator for StdDev {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut result = vec![None; data.len()];
        if data.len() < self.period {
            return result;
        }

        let period_f64 = self.period as f64;
        for (offset, window) in data.windows(self.period).enumerate() {
            let mean: f64 = window.iter().sum::<f64>() / period_f64;
            let variance: f64 =
                window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (period_f64 - 1.0);
            let std = variance.sqrt();
            result[offset + self.period - 1] = std.is_finite().then_some(std);
        }

        result
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn name(&self) -> &str {
        "StdDev"
    }
}

/// Bollinger Bands output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerOutput {
    /// Upper band
    pub upper: f64,
    /// Middle band (SMA)
    pub middle: f64,
    /// Lower band
    pub lower: f64,
}

/// Bollinger Bands.
///
/// Consists of a middle band (SMA) with upper and lower bands
/// at a specified number of sample standard deviations.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    period: usize,
    std_dev_multiplier: f64,
}

impl BollingerBands {
    /// Create new Bollinger Bands with default parameters (20, 2.0).
    pub fn new() -> Self {
        Self::with_params(20, 2.0)
    }

    /// Create Bollinger Bands with custom parameters.
    pub fn with_params(period: usize, std_dev_multiplier: f64) -> Self {
        assert!(period > 1, "Period must be greater than 1");
        assert!(
            std_dev_multiplier > 0.0,
            "Std dev multiplier must be positive"
        );
        Self {
            period,
            std_dev_multiplier,
        }
    }
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiOutputIndicator for BollingerBands {
    type Outputs = BollingerOutput;

    fn calculate(&self, data: &[f64]) -> Vec<Option<BollingerOutput>> {
        let middle = Sma::new(self.period).calculate(data);
        let std_dev = StdDev::new(self.period).calculate(data);

        middle
            .into_iter()
            .zip(std_dev)
            .map(|(middle, std)| {
                let (middle, std) = (middle?, std?);
                let width = self.std_dev_multiplier * std;
                Some(BollingerOutput {
                    upper: middle + width,
                    middle,
                    lower: middle - width,
                })
            })
            .collect()
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn name(&self) -> &str {
        "BollingerBands"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_dev_is_sample() {
        let std = StdDev::new(4);
        let data = vec![2.0, 4.0, 4.0, 6.0];
        let result = std.calculate(&data);

        // mean 4, squared deviations 4+0+0+4 = 8, sample variance 8/3
        assert!(result[..3].iter().all(Option::is_none));
        assert!((result[3].unwrap() - (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_constant_window_is_zero() {
        let std = StdDev::new(3);
        let result = std.calculate(&[5.0, 5.0, 5.0, 5.0]);
        assert_eq!(result[2], Some(0.0));
        assert_eq!(result[3], Some(0.0));
    }

    #[test]
    fn test_bollinger_bands() {
        let bb = BollingerBands::new();
        let data: Vec<f64> = (0..30)
            .map(|i| 100.0 + (i as f64 * 0.3).sin() * 4.0)
            .collect();
        let result = bb.calculate(&data);

        assert_eq!(result.len(), data.len());
        assert!(result[..19].iter().all(Option::is_none));
        for output in result[19..].iter() {
            let output = output.unwrap();
            assert!(output.upper > output.middle);
            assert!(output.lower < output.middle);
            assert!(((output.upper - output.middle) - (output.middle - output.lower)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bollinger_width_uses_multiplier() {
        let bb = BollingerBands::with_params(4, 2.0);
        let result = bb.calculate(&[2.0, 4.0, 4.0, 6.0]);
        let output = result[3].unwrap();

        let std = (8.0f64 / 3.0).sqrt();
        assert!((output.middle - 4.0).abs() < 1e-12);
        assert!((output.upper - (4.0 + 2.0 * std)).abs() < 1e-12);
        assert!((output.lower - (4.0 - 2.0 * std)).abs() < 1e-12);
    }
}
