//! CLI command implementations.

pub mod build;
pub mod features;
pub mod inspect;
pub mod validate;
