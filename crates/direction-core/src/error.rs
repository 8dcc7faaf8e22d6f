//! Error types for the dataset pipeline.

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level pipeline error.
///
/// Every stage surfaces one of these instead of continuing on bad input.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),
}

/// Errors raised while reading or writing tabular data.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Malformed date in row {row}: {value:?}")]
    MalformedDate { row: usize, value: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Dates not strictly ascending at index {index}: {previous} then {current}")]
    OutOfOrder {
        index: usize,
        previous: NaiveDate,
        current: NaiveDate,
    },

    #[error("Write error: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while turning an enriched series into a dataset.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatasetError {
    #[error("Insufficient history: need at least {required} bars, have {available}")]
    InsufficientHistory { required: usize, available: usize },

    #[error("Degenerate RSI ratio left no usable rows ({rows} rows had undefined gain/loss averages)")]
    DegenerateRatio { rows: usize },

    #[error("No usable rows: all {bars} bars had a missing or non-finite value")]
    NoUsableRows { bars: usize },

    #[error("Invalid split ratio {0}: must lie strictly between 0 and 1")]
    InvalidSplitRatio(f64),
}

/// Result type alias for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_error_converts_into_pipeline_error() {
        let err: PipelineError = DatasetError::InsufficientHistory {
            required: 201,
            available: 50,
        }
        .into();

        assert!(matches!(
            err,
            PipelineError::Dataset(DatasetError::InsufficientHistory { available: 50, .. })
        ));
        assert_eq!(
            err.to_string(),
            "Dataset error: Insufficient history: need at least 201 bars, have 50"
        );
    }

    #[test]
    fn test_source_not_found_names_path() {
        let err = DataError::SourceNotFound(PathBuf::from("missing/raw.csv"));
        assert_eq!(err.to_string(), "Source not found: missing/raw.csv");
    }
}
