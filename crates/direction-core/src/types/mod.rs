//! Core data types for the dataset pipeline.

mod bar;
mod dataset;
mod feature;

pub use bar::{PriceBar, TimeSeries};
pub use dataset::{Dataset, EnrichedBar, EnrichedSeries, FeatureRow, IndicatorSet, SplitDataset};
pub use feature::{Feature, FeatureVector, Label, FEATURE_COUNT};
