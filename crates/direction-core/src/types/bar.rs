//! Daily OHLCV bar and the ordered series built from it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// One trading day of OHLCV data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Calendar date (no time-of-day component)
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Trading volume
    pub volume: f64,
}

impl PriceBar {
    /// Create a new bar.
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Check that every numeric field is a finite number.
    #[inline]
    pub fn is_finite(&self) -> bool {
        [self.open, self.high, self.low, self.close, self.volume]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// Chronologically ordered sequence of bars.
///
/// Index 0 is the oldest bar. Rolling-window and shift computations rely on
/// this order, so the series is never re-sorted after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    bars: Vec<PriceBar>,
}

impl TimeSeries {
    /// Wrap bars that are already in chronological order.
    pub fn new(bars: Vec<PriceBar>) -> Self {
        Self { bars }
    }

    /// Get the number of bars.
    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Get the oldest bar.
    pub fn first(&self) -> Option<&PriceBar> {
        self.bars.first()
    }

    /// Get the newest bar.
    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    /// Extract close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Extract volumes as a vector.
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Get an iterator over the bars.
    pub fn iter(&self) -> impl Iterator<Item = &PriceBar> {
        self.bars.iter()
    }

    /// Verify that dates are strictly ascending with no duplicates.
    ///
    /// Reports the first offending index.
    pub fn validate_chronology(&self) -> Result<(), DataError> {
        for (offset, pair) in self.bars.windows(2).enumerate() {
            if pair[1].date <= pair[0].date {
                return Err(DataError::OutOfOrder {
                    index: offset + 1,
                    previous: pair[0].date,
                    current: pair[1].date,
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<PriceBar> for TimeSeries {
    fn from_iter<T: IntoIterator<Item = PriceBar>>(iter: T) -> Self {
        Self {
            bars: iter.into_iter().collect(),
        }
    }
}
