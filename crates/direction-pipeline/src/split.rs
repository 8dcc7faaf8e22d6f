//! Chronological train/test split.

use direction_core::constants::DEFAULT_TRAIN_RATIO;
use direction_core::error::DatasetError;
use direction_core::types::{Dataset, SplitDataset};
use tracing::{debug, warn};

/// Splits a dataset by position, never by sampling.
///
/// The first `floor(train_ratio * n)` rows form the training set and the
/// rest form the test set, so every training row predates every test row.
#[derive(Debug, Clone, Copy)]
pub struct Splitter {
    train_ratio: f64,
}

impl Splitter {
    /// Create a splitter. The ratio must lie strictly between 0 and 1.
    pub fn new(train_ratio: f64) -> Result<Self, DatasetError> {
        if !(train_ratio > 0.0 && train_ratio < 1.0) {
            return Err(DatasetError::InvalidSplitRatio(train_ratio));
        }
        Ok(Self { train_ratio })
    }

    pub fn train_ratio(&self) -> f64 {
        self.train_ratio
    }

    /// Number of training rows for a dataset of `len` rows.
    pub fn train_len(&self, len: usize) -> usize {
        // Absorb representation error in the ratio before flooring
        let raw = self.train_ratio * len as f64 + 1e-9;
        (raw.floor() as usize).min(len)
    }

    pub fn split(&self, dataset: Dataset) -> SplitDataset {
        let total = dataset.len();
        let cut = self.train_len(total);
        let (train, test) = dataset.split_at(cut);

        if train.is_empty() || test.is_empty() {
            warn!(
                total,
                train_rows = train.len(),
                test_rows = test.len(),
                "Split produced an empty partition"
            );
        }
        debug!(total, train_rows = train.len(), test_rows = test.len(), "Split dataset");

        SplitDataset { train, test }
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self {
            train_ratio: DEFAULT_TRAIN_RATIO,
        }
    }
}
