//! Persistence of the train/test tables.

use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use direction_core::constants::{TEST_FILE_NAME, TRAIN_FILE_NAME};
use direction_core::error::DataError;
use direction_core::types::{Dataset, Feature, FeatureRow, FeatureVector, Label, SplitDataset};

/// One persisted row: the feature columns followed by the target.
///
/// Field order is column order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    #[serde(rename = "Open")]
    pub open: f64,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Low")]
    pub low: f64,
    #[serde(rename = "Close")]
    pub close: f64,
    #[serde(rename = "Volume")]
    pub volume: f64,
    #[serde(rename = "EMA_7")]
    pub ema_7: f64,
    #[serde(rename = "EMA_14")]
    pub ema_14: f64,
    #[serde(rename = "SMA_50")]
    pub sma_50: f64,
    #[serde(rename = "SMA_200")]
    pub sma_200: f64,
    #[serde(rename = "RSI")]
    pub rsi: f64,
    #[serde(rename = "MACD")]
    pub macd: f64,
    #[serde(rename = "MACD_Signal")]
    pub macd_signal: f64,
    #[serde(rename = "BB_Upper")]
    pub bb_upper: f64,
    #[serde(rename = "BB_Lower")]
    pub bb_lower: f64,
    #[serde(rename = "OBV")]
    pub obv: f64,
    #[serde(rename = "Target")]
    pub target: u8,
}

impl DatasetRecord {
    /// Name of the label column.
    pub const TARGET_COLUMN: &'static str = "Target";

    /// Column headers in persisted order.
    pub fn header() -> Vec<&'static str> {
        Feature::ALL
            .iter()
            .map(|f| f.name())
            .chain(std::iter::once(Self::TARGET_COLUMN))
            .collect()
    }

    /// Feature columns as a vector.
    pub fn features(&self) -> FeatureVector {
        FeatureVector::new([
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
            self.ema_7,
            self.ema_14,
            self.sma_50,
            self.sma_200,
            self.rsi,
            self.macd,
            self.macd_signal,
            self.bb_upper,
            self.bb_lower,
            self.obv,
        ])
    }

    /// Target column as a label.
    pub fn label(&self) -> Result<Label, DataError> {
        Label::try_from(self.target)
            .map_err(|value| DataError::Parse(format!("invalid target class {value}")))
    }
}

impl From<&FeatureRow> for DatasetRecord {
    fn from(row: &FeatureRow) -> Self {
        let f = &row.features;
        Self {
            open: f.get(Feature::Open),
            high: f.get(Feature::High),
            low: f.get(Feature::Low),
            close: f.get(Feature::Close),
            volume: f.get(Feature::Volume),
            ema_7: f.get(Feature::Ema7),
            ema_14: f.get(Feature::Ema14),
            sma_50: f.get(Feature::Sma50),
            sma_200: f.get(Feature::Sma200),
            rsi: f.get(Feature::Rsi),
            macd: f.get(Feature::Macd),
            macd_signal: f.get(Feature::MacdSignal),
            bb_upper: f.get(Feature::BbUpper),
            bb_lower: f.get(Feature::BbLower),
            obv: f.get(Feature::Obv),
            target: row.target.as_u8(),
        }
    }
}

/// Locations of the written tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersistedTables {
    pub train_path: PathBuf,
    pub test_path: PathBuf,
}

/// Writes `train.csv` and `test.csv` into one directory.
///
/// Both tables are staged next to their final names and only renamed into
/// place once both have been written. A failure leaves neither new table
/// behind and restores the tables of the previous run.
#[derive(Debug, Clone)]
pub struct CsvPersister {
    output_dir: PathBuf,
}

impl CsvPersister {
    /// Create a persister for the given output directory.
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Write both partitions.
    pub fn persist(&self, split: &SplitDataset) -> Result<PersistedTables, DataError> {
        fs::create_dir_all(&self.output_dir)?;

        let train_path = self.output_dir.join(TRAIN_FILE_NAME);
        let test_path = self.output_dir.join(TEST_FILE_NAME);
        let train_staged = staging_path(&train_path);
        let test_staged = staging_path(&test_path);

        let staged = write_table(&train_staged, &split.train)
            .and_then(|_| write_table(&test_staged, &split.test));
        if let Err(e) = staged {
            discard(&[train_staged.as_path(), test_staged.as_path()]);
            return Err(e);
        }

        commit(&[
            (train_staged.as_path(), train_path.as_path()),
            (test_staged.as_path(), test_path.as_path()),
        ])?;

        info!(
            train = %train_path.display(),
            test = %test_path.display(),
            train_rows = split.train.len(),
            test_rows = split.test.len(),
            "Persisted dataset"
        );

        Ok(PersistedTables {
            train_path,
            test_path,
        })
    }
}

/// Read a persisted table back, in file order.
pub fn read_table(path: impl AsRef<Path>) -> Result<Vec<DatasetRecord>, DataError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DataError::SourceNotFound(path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| DataError::Parse(e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| DataError::Parse(e.to_string()))?
        .clone();
    let expected = DatasetRecord::header();
    if headers.iter().ne(expected.iter().copied()) {
        return Err(DataError::Parse(format!(
            "unexpected header in {}: {:?}",
            path.display(),
            headers
        )));
    }

    reader
        .deserialize()
        .enumerate()
        .map(|(index, result)| {
            result.map_err(|e| DataError::Parse(format!("row {}: {e}", index + 1)))
        })
        .collect()
}

fn write_table(path: &Path, dataset: &Dataset) -> Result<(), DataError> {
    // Header is written by hand so that an empty partition still has one
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| DataError::Write(e.to_string()))?;

    writer
        .write_record(DatasetRecord::header())
        .map_err(|e| DataError::Write(e.to_string()))?;

    for row in dataset.iter() {
        writer
            .serialize(DatasetRecord::from(row))
            .map_err(|e| DataError::Write(e.to_string()))?;
    }

    writer.flush()?;
    Ok(())
}

/// Move staged tables over their targets as a pair.
///
/// Existing targets are set aside first and put back if any rename fails.
fn commit(pairs: &[(&Path, &Path)]) -> Result<(), DataError> {
    let mut backups: Vec<(PathBuf, &Path)> = Vec::new();
    let mut placed: Vec<&Path> = Vec::new();

    let result = (|| -> std::io::Result<()> {
        for &(_, target) in pairs {
            if target.exists() {
                let backup = sibling(target, ".bak");
                fs::rename(target, &backup)?;
                backups.push((backup, target));
            }
        }
        for &(staged, target) in pairs {
            fs::rename(staged, target)?;
            placed.push(target);
        }
        Ok(())
    })();

    match result {
        Ok(()) => {
            let stale: Vec<&Path> = backups.iter().map(|(b, _)| b.as_path()).collect();
            discard(&stale);
            Ok(())
        }
        Err(e) => {
            discard(&placed);
            for (backup, target) in &backups {
                if let Err(restore) = fs::rename(backup, target) {
                    warn!(path = %target.display(), error = %restore, "Failed to restore previous output");
                }
            }
            let staged: Vec<&Path> = pairs.iter().map(|&(s, _)| s).collect();
            discard(&staged);
            Err(e.into())
        }
    }
}

fn staging_path(path: &Path) -> PathBuf {
    sibling(path, ".tmp")
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

fn discard(paths: &[&Path]) {
    for path in paths {
        if path.exists() {
            if let Err(e) = fs::remove_file(path) {
                warn!(path = %path.display(), error = %e, "Failed to remove partial output");
            }
        }
    }
}
