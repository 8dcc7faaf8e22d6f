//! Next-day direction labels.

use direction_core::types::{EnrichedSeries, Label};

/// Labels each bar with the direction of the following close.
///
/// The newest bar has no successor and keeps `target = None`, as does any
/// bar where either close is non-finite.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelGenerator;

impl LabelGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Return the series with every target filled in where defined.
    pub fn label(&self, series: EnrichedSeries) -> EnrichedSeries {
        let mut rows = series.into_rows();

        let targets: Vec<Option<Label>> = rows
            .iter()
            .zip(rows.iter().skip(1).map(Some).chain(std::iter::once(None)))
            .map(|(row, next)| {
                let next = next?;
                let (today, tomorrow) = (row.bar.close, next.bar.close);
                (today.is_finite() && tomorrow.is_finite())
                    .then(|| Label::from_closes(today, tomorrow))
            })
            .collect();

        for (row, target) in rows.iter_mut().zip(targets) {
            row.target = target;
        }

        EnrichedSeries::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use direction_core::types::{EnrichedBar, IndicatorSet, PriceBar};

    fn series(closes: &[f64]) -> EnrichedSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let rows = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| EnrichedBar {
                bar: PriceBar::new(
                    start + chrono::Duration::days(i as i64),
                    close,
                    close,
                    close,
                    close,
                    1.0,
                ),
                indicators: IndicatorSet::default(),
                target: None,
            })
            .collect();
        EnrichedSeries::new(rows)
    }

    #[test]
    fn test_labels_follow_next_close() {
        let labeled = LabelGenerator::new().label(series(&[10.0, 11.0, 11.0, 9.0, 12.0]));
        let targets: Vec<Option<Label>> = labeled.iter().map(|r| r.target).collect();

        assert_eq!(
            targets,
            vec![
                Some(Label::Up),
                Some(Label::Down),
                Some(Label::Down),
                Some(Label::Up),
                None
            ]
        );
    }

    #[test]
    fn test_nan_close_leaves_neighbours_unlabeled() {
        let labeled = LabelGenerator::new().label(series(&[10.0, 11.0, f64::NAN, 9.0, 12.0]));
        let targets: Vec<Option<Label>> = labeled.iter().map(|r| r.target).collect();

        assert_eq!(targets, vec![Some(Label::Up), None, None, Some(Label::Up), None]);
    }

    #[test]
    fn test_single_bar_has_no_label() {
        let labeled = LabelGenerator::new().label(series(&[10.0]));
        assert_eq!(labeled.rows()[0].target, None);
    }

    #[test]
    fn test_empty_series() {
        assert!(LabelGenerator::new().label(series(&[])).is_empty());
    }
}
