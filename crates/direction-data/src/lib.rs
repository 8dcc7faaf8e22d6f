//! CSV loading and persistence for the dataset pipeline.

mod csv_source;
mod persist;

pub use csv_source::CsvSeriesLoader;
pub use persist::{read_table, CsvPersister, DatasetRecord, PersistedTables};

use direction_core::error::DataError;
use direction_core::types::TimeSeries;
use std::path::Path;

/// Load a raw daily series from a CSV file.
pub fn load_csv(path: impl AsRef<Path>) -> Result<TimeSeries, DataError> {
    CsvSeriesLoader::new(path)?.load()
}
