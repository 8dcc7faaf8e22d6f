//! Core traits for the dataset pipeline.

mod indicator;

pub use indicator::{Indicator, MultiOutputIndicator, VolumeIndicator};
