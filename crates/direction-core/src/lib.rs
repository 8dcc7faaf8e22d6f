//! Core types and traits for the direction dataset pipeline.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (PriceBar, TimeSeries)
//! - Feature and dataset types (Feature, FeatureVector, Label, FeatureRow, Dataset)
//! - Indicator window constants shared by every stage
//! - Core traits for indicators
//! - Typed errors for every pipeline stage

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

pub use error::{DataError, DatasetError, PipelineError, PipelineResult};
pub use traits::*;
pub use types::*;
