//! End-to-end pipeline driver.

use std::path::PathBuf;
use tracing::{info, warn};

use direction_core::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_RAW_DATA_PATH, DEFAULT_TRAIN_RATIO};
use direction_core::error::{DatasetError, PipelineResult};
use direction_core::types::{SplitDataset, TimeSeries};
use direction_data::{CsvPersister, CsvSeriesLoader};
use direction_indicators::IndicatorEngine;

use crate::label::LabelGenerator;
use crate::report::{PartitionSummary, PipelineReport};
use crate::sanitize::Sanitizer;
use crate::split::Splitter;

/// Inputs of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Raw `Date,Open,High,Low,Close,Volume` CSV
    pub input: PathBuf,
    /// Directory receiving `train.csv` and `test.csv`
    pub output_dir: PathBuf,
    /// Share of sanitized rows assigned to the training set
    pub train_ratio: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_RAW_DATA_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            train_ratio: DEFAULT_TRAIN_RATIO,
        }
    }
}

/// In-memory result of the numerical stages.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOutcome {
    pub raw_rows: usize,
    pub dropped_rows: usize,
    pub split: SplitDataset,
}

impl BuildOutcome {
    pub fn sanitized_rows(&self) -> usize {
        self.split.len()
    }
}

/// Loader -> indicators -> labels -> sanitizer -> splitter -> persister.
///
/// Nothing is written unless every earlier stage succeeds.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    engine: IndicatorEngine,
    labeler: LabelGenerator,
    sanitizer: Sanitizer,
    splitter: Splitter,
}

impl Pipeline {
    /// Create a pipeline, validating the split ratio up front.
    pub fn new(config: PipelineConfig) -> Result<Self, DatasetError> {
        let splitter = Splitter::new(config.train_ratio)?;
        Ok(Self {
            config,
            engine: IndicatorEngine::new(),
            labeler: LabelGenerator::new(),
            sanitizer: Sanitizer::new(),
            splitter,
        })
    }

    /// Run the numerical stages on an already loaded series.
    pub fn build(&self, series: &TimeSeries) -> Result<BuildOutcome, DatasetError> {
        let enriched = self.engine.compute(series);
        let labeled = self.labeler.label(enriched);
        let sanitized = self.sanitizer.sanitize(&labeled)?;

        info!(
            raw_rows = series.len(),
            dropped_rows = sanitized.dropped,
            sanitized_rows = sanitized.dataset.len(),
            "Sanitized dataset"
        );

        let split = self.splitter.split(sanitized.dataset);
        info!(
            train_rows = split.train.len(),
            test_rows = split.test.len(),
            "Split dataset chronologically"
        );

        Ok(BuildOutcome {
            raw_rows: series.len(),
            dropped_rows: sanitized.dropped,
            split,
        })
    }

    /// Load, build and persist.
    pub fn run(&self) -> PipelineResult<PipelineReport> {
        let series = CsvSeriesLoader::new(&self.config.input)?.load()?;
        info!(bars = series.len(), "Loaded raw series");

        if let Err(e) = series.validate_chronology() {
            warn!(error = %e, "Raw series is not strictly chronological");
        }

        let outcome = self.build(&series)?;
        let tables = CsvPersister::new(&self.config.output_dir).persist(&outcome.split)?;

        Ok(PipelineReport {
            input: self.config.input.clone(),
            raw_rows: outcome.raw_rows,
            raw_first_date: series.first().map(|b| b.date),
            raw_last_date: series.last().map(|b| b.date),
            dropped_rows: outcome.dropped_rows,
            sanitized_rows: outcome.sanitized_rows(),
            train_ratio: self.splitter.train_ratio(),
            train: PartitionSummary::of(&outcome.split.train),
            test: PartitionSummary::of(&outcome.split.test),
            train_path: tables.train_path,
            test_path: tables.test_path,
        })
    }
}
