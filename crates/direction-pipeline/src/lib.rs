//! Labeling, sanitizing, splitting and the end-to-end dataset pipeline.
//!
//! Stages are pure transformations over owned values:
//! `TimeSeries` -> `EnrichedSeries` (indicators) -> `EnrichedSeries` (labels)
//! -> `Dataset` (sanitized) -> `SplitDataset`. [`Pipeline`] wires them to the
//! CSV loader and persister.

mod label;
mod pipeline;
mod report;
mod sanitize;
mod split;

pub use label::LabelGenerator;
pub use pipeline::{BuildOutcome, Pipeline, PipelineConfig};
pub use report::{PartitionSummary, PipelineReport};
pub use sanitize::{Sanitized, Sanitizer};
pub use split::Splitter;
