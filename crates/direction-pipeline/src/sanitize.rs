//! Removal of incomplete rows.

use direction_core::constants::{MIN_SERIES_LEN, RSI_PERIOD, WARMUP_BARS};
use direction_core::error::DatasetError;
use direction_core::types::{Dataset, EnrichedSeries};
use tracing::debug;

/// Result of sanitizing an enriched series.
#[derive(Debug, Clone, PartialEq)]
pub struct Sanitized {
    /// Complete, labeled rows in chronological order
    pub dataset: Dataset,
    /// Rows removed for missing or non-finite values
    pub dropped: usize,
}

/// Keeps only rows whose 15 features and target are all defined.
///
/// For a series longer than the warm-up this removes the first
/// [`WARMUP_BARS`] rows plus the unlabeled final row. An empty result is an
/// error, never an empty dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sanitizer;

impl Sanitizer {
    pub fn new() -> Self {
        Self
    }

    pub fn sanitize(&self, series: &EnrichedSeries) -> Result<Sanitized, DatasetError> {
        let rows: Vec<_> = series.iter().filter_map(|row| row.to_feature_row()).collect();
        let dropped = series.len() - rows.len();

        if rows.is_empty() {
            return Err(Self::explain_empty(series));
        }

        debug!(kept = rows.len(), dropped, "Sanitized series");
        Ok(Sanitized {
            dataset: Dataset::new(rows),
            dropped,
        })
    }

    fn explain_empty(series: &EnrichedSeries) -> DatasetError {
        if series.len() < MIN_SERIES_LEN {
            return DatasetError::InsufficientHistory {
                required: MIN_SERIES_LEN,
                available: series.len(),
            };
        }

        // RSI is also missing when its window holds a non-finite close;
        // only a finite window with no gains and no losses is degenerate
        let rows = series.rows();
        let degenerate = (WARMUP_BARS..rows.len())
            .filter(|&i| rows[i].indicators.rsi.is_none())
            .filter(|&i| {
                rows[i.saturating_sub(RSI_PERIOD)..=i]
                    .iter()
                    .all(|row| row.bar.close.is_finite())
            })
            .count();

        if degenerate > 0 {
            DatasetError::DegenerateRatio { rows: degenerate }
        } else {
            DatasetError::NoUsableRows { bars: series.len() }
        }
    }
}
