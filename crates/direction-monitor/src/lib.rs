//! Logging setup for the dataset pipeline.

mod logging;

pub use logging::{setup_logging, LogGuard};
