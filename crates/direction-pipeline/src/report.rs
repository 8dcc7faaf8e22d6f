//! Run report.

use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

use direction_core::types::{Dataset, Label};

/// Size, date range and class balance of one partition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartitionSummary {
    pub rows: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    /// Share of rows labeled `Up`, if any rows exist
    pub up_ratio: Option<f64>,
}

impl PartitionSummary {
    pub fn of(dataset: &Dataset) -> Self {
        let up = dataset.iter().filter(|r| r.target == Label::Up).count();
        Self {
            rows: dataset.len(),
            first_date: dataset.first_date(),
            last_date: dataset.last_date(),
            up_ratio: (!dataset.is_empty()).then(|| up as f64 / dataset.len() as f64),
        }
    }

    fn range(&self) -> String {
        match (self.first_date, self.last_date) {
            (Some(first), Some(last)) => format!("{first} .. {last}"),
            _ => "-".to_string(),
        }
    }

    fn balance(&self) -> String {
        self.up_ratio
            .map(|r| format!("{:.1}% up", r * 100.0))
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Outcome of a successful pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineReport {
    pub input: PathBuf,
    pub raw_rows: usize,
    pub raw_first_date: Option<NaiveDate>,
    pub raw_last_date: Option<NaiveDate>,
    pub dropped_rows: usize,
    pub sanitized_rows: usize,
    pub train_ratio: f64,
    pub train: PartitionSummary,
    pub test: PartitionSummary,
    pub train_path: PathBuf,
    pub test_path: PathBuf,
}

impl PipelineReport {
    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str("                     DATASET REPORT                        \n");
        s.push_str("═══════════════════════════════════════════════════════════\n\n");

        s.push_str("SOURCE\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!("  Input:               {}\n", self.input.display()));
        s.push_str(&format!("  Raw Rows:            {}\n", self.raw_rows));
        if let (Some(first), Some(last)) = (self.raw_first_date, self.raw_last_date) {
            s.push_str(&format!("  Period:              {first} .. {last}\n"));
        }
        s.push_str(&format!(
            "  Dropped Rows:        {} (window warm-up and unlabeled tail)\n",
            self.dropped_rows
        ));
        s.push_str(&format!("  Sanitized Rows:      {}\n", self.sanitized_rows));
        s.push('\n');

        s.push_str(&format!(
            "SPLIT ({:.0}% / {:.0}%, chronological)\n",
            self.train_ratio * 100.0,
            (1.0 - self.train_ratio) * 100.0
        ));
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!(
            "  Train:               {} rows, {}, {}\n",
            self.train.rows,
            self.train.range(),
            self.train.balance()
        ));
        s.push_str(&format!(
            "  Test:                {} rows, {}, {}\n",
            self.test.rows,
            self.test.range(),
            self.test.balance()
        ));
        s.push('\n');

        s.push_str("OUTPUT\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!("  Train Table:         {}\n", self.train_path.display()));
        s.push_str(&format!("  Test Table:          {}\n", self.test_path.display()));

        s
    }

    /// Export as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
