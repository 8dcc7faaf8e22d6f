//! CSV series loader.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use direction_core::error::DataError;
use direction_core::types::{PriceBar, TimeSeries};

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "DATE")]
    date: String,
    #[serde(alias = "Open", alias = "OPEN")]
    open: f64,
    #[serde(alias = "High", alias = "HIGH")]
    high: f64,
    #[serde(alias = "Low", alias = "LOW")]
    low: f64,
    #[serde(alias = "Close", alias = "CLOSE")]
    close: f64,
    #[serde(alias = "Volume", alias = "VOLUME")]
    volume: f64,
}

/// Date-only layouts, tried in order.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

/// Date-time layouts whose time of day is discarded.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Loads a raw `Date,Open,High,Low,Close,Volume` table.
///
/// Rows are kept in file order. Chronology is not checked here; see
/// [`TimeSeries::validate_chronology`].
#[derive(Debug, Clone)]
pub struct CsvSeriesLoader {
    path: PathBuf,
}

impl CsvSeriesLoader {
    /// Create a loader for an existing file.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataError::SourceNotFound(path.to_path_buf()));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Load all bars from the CSV file.
    pub fn load(&self) -> Result<TimeSeries, DataError> {
        info!(path = %self.path.display(), "Loading raw series");

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_path(&self.path)
            .map_err(|e| DataError::Parse(e.to_string()))?;

        let mut bars = Vec::new();

        for (index, result) in reader.deserialize().enumerate() {
            let row = index + 1;
            let record: CsvRecord =
                result.map_err(|e| DataError::Parse(format!("row {row}: {e}")))?;

            let date = parse_date(&record.date).ok_or_else(|| DataError::MalformedDate {
                row,
                value: record.date.clone(),
            })?;

            bars.push(PriceBar::new(
                date,
                record.open,
                record.high,
                record.low,
                record.close,
                record.volume,
            ));
        }

        let series = TimeSeries::new(bars);
        debug!(
            bars = series.len(),
            first = ?series.first().map(|b| b.date),
            last = ?series.last().map(|b| b.date),
            "Parsed raw series"
        );
        Ok(series)
    }
}

/// Parse a calendar date, dropping any time-of-day or offset.
fn parse_date(value: &str) -> Option<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%:z") {
        return Some(dt.date_naive());
    }

    None
}
