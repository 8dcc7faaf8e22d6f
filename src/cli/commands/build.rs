//! Build command implementation.

use anyhow::{Context, Result};
use direction_config::AppConfig;
use direction_pipeline::{Pipeline, PipelineConfig};
use tracing::info;

use crate::cli::{BuildArgs, OutputFormat};

pub fn run(args: BuildArgs, config: &AppConfig) -> Result<()> {
    let pipeline_config = PipelineConfig {
        input: args.input.unwrap_or_else(|| config.paths.input.clone()),
        output_dir: args
            .output_dir
            .unwrap_or_else(|| config.paths.output_dir.clone()),
        train_ratio: args.train_ratio.unwrap_or(config.split.train_ratio),
    };

    info!(
        asset = %config.app.asset,
        input = %pipeline_config.input.display(),
        output_dir = %pipeline_config.output_dir.display(),
        train_ratio = pipeline_config.train_ratio,
        "Starting dataset build"
    );

    let pipeline = Pipeline::new(pipeline_config).context("Invalid pipeline configuration")?;
    let report = pipeline.run().context("Dataset build failed")?;

    match args.output {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => println!("{}", report.summary()),
    }

    Ok(())
}
