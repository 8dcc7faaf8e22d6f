//! Momentum indicators.

use direction_core::traits::{Indicator, MultiOutputIndicator};
use serde::{Deserialize, Serialize};

use crate::moving_average::{rolling_mean, Ema};

/// Relative Strength Index (RSI).
///
/// Average gain and average loss are plain trailing means over the last
/// `period` price changes (not Wilder's smoothing). The first `period` points
/// have no value, and neither does any point whose window has no gains and no
/// losses at all.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Create a new RSI indicator.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }

    /// RSI from average gain and loss.
    ///
    /// `0/0` is undefined and yields `None`; a zero loss with positive gain
    /// saturates at 100.
    pub fn from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
        if avg_loss == 0.0 {
            return (avg_gain > 0.0).then_some(100.0);
        }
        let rs = avg_gain / avg_loss;
        Some(100.0 - 100.0 / (1.0 + rs))
    }
}

impl Indicator for Rsi {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut result = vec![None; data.len()];
        if data.len() <= self.period {
            return result;
        }

        // Change i is the move into point i + 1
        let mut gains = Vec::with_capacity(data.len() - 1);
        let mut losses = Vec::with_capacity(data.len() - 1);
        for pair in data.windows(2) {
            let change = pair[1] - pair[0];
            if change.is_finite() {
                gains.push(change.max(0.0));
                losses.push((-change).max(0.0));
            } else {
                // f64::max would hide the NaN
                gains.push(f64::NAN);
                losses.push(f64::NAN);
            }
        }

        let avg_gains = rolling_mean(&gains, self.period);
        let avg_losses = rolling_mean(&losses, self.period);

        for (i, (gain, loss)) in avg_gains.iter().zip(&avg_losses).enumerate() {
            if let (Some(gain), Some(loss)) = (gain, loss) {
                result[i + 1] = Self::from_averages(*gain, *loss);
            }
        }

        result
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

/// MACD (Moving Average Convergence Divergence) output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdOutput {
    /// MACD line (fast EMA - slow EMA)
    pub macd: f64,
    /// Signal line (EMA of MACD)
    pub signal: f64,
}

/// MACD indicator.
///
/// Both EMAs are seeded at the first price, so the MACD line and its signal
/// line have a value at every finite point. A non-finite price has no value.
#[derive(Debug, Clone)]
pub struct Macd {
    fast: Ema,
    slow: Ema,
    signal: Ema,
}

impl Macd {
    /// Create a new MACD with default parameters (12, 26, 9).
    pub fn new() -> Self {
        Self::with_periods(12, 26, 9)
    }

    /// Create a MACD with custom spans.
    pub fn with_periods(fast: usize, slow: usize, signal: usize) -> Self {
        assert!(fast > 0 && slow > 0 && signal > 0);
        assert!(fast < slow, "Fast span must be less than slow span");
        Self {
            fast: Ema::new(fast),
            slow: Ema::new(slow),
            signal: Ema::new(signal),
        }
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiOutputIndicator for Macd {
    type Outputs = MacdOutput;

    fn calculate(&self, data: &[f64]) -> Vec<Option<MacdOutput>> {
        let fast = self.fast.smooth(data);
        let slow = self.slow.smooth(data);

        let macd_line: Vec<f64> = fast
            .iter()
            .zip(&slow)
            .map(|pair| match pair {
                (Some(f), Some(s)) => f - s,
                _ => f64::NAN,
            })
            .collect();
        let signal_line = self.signal.smooth(&macd_line);

        macd_line
            .into_iter()
            .zip(signal_line)
            .map(|(macd, signal)| {
                let signal = signal?;
                Some(MacdOutput { macd, signal })
            })
            .collect()
    }

    fn lookback(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "MACD"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_basic() {
        let rsi = Rsi::new(14);
        let data: Vec<f64> = (0..40)
            .map(|i| 100.0 + (i as f64 * 0.5).sin() * 5.0)
            .collect();

        let result = rsi.calculate(&data);
        assert_eq!(result.len(), data.len());
        assert!(result[..14].iter().all(Option::is_none));

        // All RSI values should be between 0 and 100
        for value in result[14..].iter() {
            let value = value.unwrap();
            assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn test_rsi_all_gains() {
        let rsi = Rsi::new(5);
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let result = rsi.calculate(&data);

        assert!(result[4].is_none());
        assert_eq!(result[5], Some(100.0));
        assert_eq!(result[6], Some(100.0));
    }

    #[test]
    fn test_rsi_all_losses() {
        let rsi = Rsi::new(5);
        let data = vec![7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        let result = rsi.calculate(&data);

        assert!(result[5].unwrap().abs() < 1e-10);
    }

    #[test]
    fn test_rsi_flat_prices_are_undefined() {
        let rsi = Rsi::new(3);
        let data = vec![5.0; 10];
        let result = rsi.calculate(&data);

        assert!(result.iter().all(Option::is_none));
    }

    #[test]
    fn test_rsi_simple_mean_not_wilder() {
        let rsi = Rsi::new(2);
        // changes: +2, -1, +1
        let data = vec![10.0, 12.0, 11.0, 12.0];
        let result = rsi.calculate(&data);

        // window [+2, -1]: avg_gain 1.0, avg_loss 0.5, RS 2 -> 66.67
        assert!((result[2].unwrap() - 200.0 / 3.0).abs() < 1e-10);
        // window [-1, +1]: avg_gain 0.5, avg_loss 0.5, RS 1 -> 50
        assert!((result[3].unwrap() - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_rsi_undefined_while_window_holds_nan() {
        let rsi = Rsi::new(2);
        let data = vec![10.0, 12.0, f64::NAN, 12.0, 11.0, 12.0];
        let result = rsi.calculate(&data);

        assert_eq!(&result[..5], &[None, None, None, None, None]);
        // window [-1, +1] is clear of the gap
        assert!((result[5].unwrap() - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_rsi_from_averages() {
        assert_eq!(Rsi::from_averages(0.0, 0.0), None);
        assert_eq!(Rsi::from_averages(1.0, 0.0), Some(100.0));
        assert_eq!(Rsi::from_averages(0.0, 1.0), Some(0.0));
    }

    #[test]
    fn test_macd_basic() {
        let macd = Macd::new();
        let data: Vec<f64> = (0..50).map(|i| 100.0 + i as f64).collect();
        let result = macd.calculate(&data);

        assert_eq!(result.len(), data.len());
        let first = result[0].unwrap();
        assert_eq!(first.macd, 0.0);
        assert_eq!(first.signal, 0.0);
        // In an uptrend, MACD should be positive
        assert!(result.last().unwrap().unwrap().macd > 0.0);
    }

    #[test]
    fn test_macd_signal_is_ema_of_line() {
        let macd = Macd::with_periods(2, 4, 3);
        let data = vec![1.0, 3.0, 2.0, 5.0, 4.0];
        let result = macd.calculate(&data);

        let line: Vec<f64> = result.iter().map(|o| o.unwrap().macd).collect();
        let expected_signal = Ema::new(3).smooth(&line);
        for (output, expected) in result.iter().zip(expected_signal) {
            assert!((output.unwrap().signal - expected.unwrap()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_macd_gap_at_nan_only() {
        let macd = Macd::with_periods(2, 4, 3);
        let clean = macd.calculate(&[1.0, 3.0, 2.0]);
        let result = macd.calculate(&[1.0, 3.0, f64::NAN, 2.0]);

        assert_eq!(result[2], None);
        assert_eq!(result[1], clean[1]);
        let after = result[3].unwrap();
        assert!(after.macd.is_finite());
        assert!(after.signal.is_finite());
        // The gap is skipped, so the next point equals the clean third point
        assert_eq!(result[3], clean[2]);
    }
}
