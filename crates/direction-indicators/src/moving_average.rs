//! Moving average indicators.

use direction_core::traits::Indicator;

/// Trailing arithmetic mean over `period` points, aligned with `data`.
///
/// A window holding a non-finite value has no mean. A window of all zeros
/// averages to exactly `0.0`, independent of residue left in the running sum.
pub(crate) fn rolling_mean(data: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut result = vec![None; data.len()];
    let period_f64 = period as f64;

    let mut sum = 0.0;
    let mut non_finite = 0usize;
    let mut non_zero = 0usize;

    for (i, &value) in data.iter().enumerate() {
        if value.is_finite() {
            sum += value;
            non_zero += usize::from(value != 0.0);
        } else {
            non_finite += 1;
        }

        if i >= period {
            let old = data[i - period];
            if old.is_finite() {
                sum -= old;
                non_zero -= usize::from(old != 0.0);
            } else {
                non_finite -= 1;
            }
        }

        if i + 1 >= period && non_finite == 0 {
            result[i] = Some(if non_zero == 0 { 0.0 } else { sum / period_f64 });
        }
    }

    result
}

/// Simple Moving Average (SMA).
///
/// Calculates the arithmetic mean of the last N values. The first N-1 points
/// have no value.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Create a new SMA with the specified period.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl Indicator for Sma {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        rolling_mean(data, self.period)
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

/// Exponential Moving Average (EMA).
///
/// Seeded with the first finite value and updated with
/// `ema = ema + alpha * (price - ema)`, `alpha = 2 / (span + 1)`. A
/// non-finite price has no value and leaves the running average untouched,
/// so later points are unaffected by it.
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

    /// Run the recurrence over `data`, one entry per point.
    pub fn smooth(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut state: Option<f64> = None;

        data.iter()
            .map(|&price| {
                if !price.is_finite() {
                    return None;
                }
                let ema = match state {
                    Some(prev) => prev + self.alpha * (price - prev),
                    None => price,
                };
                state = Some(ema);
                state
            })
            .collect()
    }
}

impl Indicator for Ema {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        self.smooth(data)
    }

    fn lookback(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "EMA"
    }
}
