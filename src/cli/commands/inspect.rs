//! Inspect command implementation.

use anyhow::{Context, Result};
use direction_config::AppConfig;
use direction_core::constants::MIN_SERIES_LEN;
use direction_data::load_csv;

use crate::cli::InspectArgs;

pub fn run(args: InspectArgs, config: &AppConfig) -> Result<()> {
    let input = args.input.unwrap_or_else(|| config.paths.input.clone());
    let series = load_csv(&input).with_context(|| format!("Failed to load {}", input.display()))?;

    println!("Source:        {}", input.display());
    println!("Asset:         {}", config.app.asset);
    println!("Rows:          {}", series.len());
    if let (Some(first), Some(last)) = (series.first(), series.last()) {
        println!("Period:        {} .. {}", first.date, last.date);
    }

    let expected_rows = series.len().saturating_sub(MIN_SERIES_LEN - 1);
    if expected_rows > 0 {
        println!("Usable rows:   up to {expected_rows} after warm-up");
    } else {
        println!(
            "Usable rows:   none (need at least {MIN_SERIES_LEN} bars, have {})",
            series.len()
        );
    }

    let non_finite = series.iter().filter(|bar| !bar.is_finite()).count();
    if non_finite > 0 {
        println!("Non-finite:    {non_finite} rows");
    }

    series
        .validate_chronology()
        .context("Raw series is not strictly chronological")?;
    println!("Chronology:    ok");

    Ok(())
}
