//! Enriched series and labeled datasets.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Feature, FeatureVector, Label, PriceBar, FEATURE_COUNT};

/// Per-bar indicator values. `None` marks a value with no defined result
/// (window warm-up or a degenerate ratio).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub ema_7: Option<f64>,
    pub ema_14: Option<f64>,
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_lower: Option<f64>,
    pub obv: Option<f64>,
}

/// A bar together with its indicators and, once labeled, its target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnrichedBar {
    pub bar: PriceBar,
    pub indicators: IndicatorSet,
    pub target: Option<Label>,
}

impl EnrichedBar {
    /// Value of one feature column, if defined.
    pub fn feature(&self, feature: Feature) -> Option<f64> {
        let ind = &self.indicators;
        match feature {
            Feature::Open => Some(self.bar.open),
            Feature::High => Some(self.bar.high),
            Feature::Low => Some(self.bar.low),
            Feature::Close => Some(self.bar.close),
            Feature::Volume => Some(self.bar.volume),
            Feature::Ema7 => ind.ema_7,
            Feature::Ema14 => ind.ema_14,
            Feature::Sma50 => ind.sma_50,
            Feature::Sma200 => ind.sma_200,
            Feature::Rsi => ind.rsi,
            Feature::Macd => ind.macd,
            Feature::MacdSignal => ind.macd_signal,
            Feature::BbUpper => ind.bb_upper,
            Feature::BbLower => ind.bb_lower,
            Feature::Obv => ind.obv,
        }
    }

    /// Project the row onto [`Feature::ALL`].
    ///
    /// Returns `None` if any feature is missing or not finite.
    pub fn feature_vector(&self) -> Option<FeatureVector> {
        let mut values = [0.0; FEATURE_COUNT];
        for (slot, feature) in values.iter_mut().zip(Feature::ALL) {
            *slot = self.feature(feature).filter(|v| v.is_finite())?;
        }
        Some(FeatureVector::new(values))
    }

    /// Project the row into a labeled dataset row, if it is complete.
    pub fn to_feature_row(&self) -> Option<FeatureRow> {
        let target = self.target?;
        let features = self.feature_vector()?;
        Some(FeatureRow {
            date: self.bar.date,
            features,
            target,
        })
    }
}

/// Series of enriched bars in the same order as the source series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichedSeries {
    rows: Vec<EnrichedBar>,
}

impl EnrichedSeries {
    pub fn new(rows: Vec<EnrichedBar>) -> Self {
        Self { rows }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[EnrichedBar] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnrichedBar> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<EnrichedBar> {
        self.rows
    }
}

/// One labeled training example.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    /// Date of the source bar. Kept in memory only.
    pub date: NaiveDate,
    pub features: FeatureVector,
    pub target: Label,
}

/// Chronologically ordered labeled rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<FeatureRow>,
}

impl Dataset {
    pub fn new(rows: Vec<FeatureRow>) -> Self {
        Self { rows }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureRow> {
        self.rows.iter()
    }

    /// Date of the oldest row.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.rows.first().map(|r| r.date)
    }

    /// Date of the newest row.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|r| r.date)
    }

    /// Split by position: rows `[0, at)` and `[at, len)`.
    pub fn split_at(mut self, at: usize) -> (Dataset, Dataset) {
        let tail = self.rows.split_off(at.min(self.rows.len()));
        (self, Dataset::new(tail))
    }
}

/// Train and test partitions of one dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitDataset {
    pub train: Dataset,
    pub test: Dataset,
}

impl SplitDataset {
    /// Total rows across both partitions.
    pub fn len(&self) -> usize {
        self.train.len() + self.test.len()
    }

    pub fn is_empty(&self) -> bool {
        self.train.is_empty() && self.test.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(day: u32, close: f64) -> PriceBar {
        let date = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
        PriceBar::new(date, close, close + 1.0, close - 1.0, close, 500.0)
    }

    fn complete_indicators() -> IndicatorSet {
        IndicatorSet {
            ema_7: Some(1.0),
            ema_14: Some(2.0),
            sma_50: Some(3.0),
            sma_200: Some(4.0),
            rsi: Some(50.0),
            macd: Some(0.5),
            macd_signal: Some(0.4),
            bb_upper: Some(6.0),
            bb_lower: Some(2.0),
            obv: Some(-500.0),
        }
    }

    #[test]
    fn test_complete_row_projects_in_column_order() {
        let row = EnrichedBar {
            bar: bar(1, 10.0),
            indicators: complete_indicators(),
            target: Some(Label::Up),
        };

        let projected = row.to_feature_row().unwrap();
        assert_eq!(projected.target, Label::Up);
        assert_eq!(projected.features.get(Feature::Close), 10.0);
        assert_eq!(projected.features.get(Feature::Sma200), 4.0);
        assert_eq!(projected.features.get(Feature::Obv), -500.0);
    }

    #[test]
    fn test_missing_indicator_or_target_blocks_projection() {
        let mut indicators = complete_indicators();
        indicators.rsi = None;
        let missing_rsi = EnrichedBar {
            bar: bar(1, 10.0),
            indicators,
            target: Some(Label::Down),
        };
        assert!(missing_rsi.to_feature_row().is_none());

        let missing_target = EnrichedBar {
            bar: bar(1, 10.0),
            indicators: complete_indicators(),
            target: None,
        };
        assert!(missing_target.feature_vector().is_some());
        assert!(missing_target.to_feature_row().is_none());
    }

    #[test]
    fn test_non_finite_value_blocks_projection() {
        let mut row = EnrichedBar {
            bar: bar(1, 10.0),
            indicators: complete_indicators(),
            target: Some(Label::Up),
        };
        row.bar.volume = f64::NAN;
        assert!(row.feature_vector().is_none());
    }

    #[test]
    fn test_dataset_split_preserves_order() {
        let rows: Vec<FeatureRow> = (1..=5)
            .map(|d| FeatureRow {
                date: NaiveDate::from_ymd_opt(2024, 3, d).unwrap(),
                features: FeatureVector::new([d as f64; FEATURE_COUNT]),
                target: Label::Down,
            })
            .collect();

        let (head, tail) = Dataset::new(rows).split_at(4);
        assert_eq!(head.len(), 4);
        assert_eq!(tail.len(), 1);
        assert!(head.last_date().unwrap() < tail.first_date().unwrap());
    }
}
