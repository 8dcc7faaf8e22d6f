//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "direction")]
#[command(author, version, about = "Build a labeled next-day direction dataset from daily OHLCV data")]
pub struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (overrides the configuration file)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute features and labels, then write train.csv and test.csv
    Build(BuildArgs),
    /// Summarize a raw price series without building a dataset
    Inspect(InspectArgs),
    /// List the persisted columns in order
    Features,
    /// Validate configuration
    ValidateConfig,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(clap::Args)]
pub struct BuildArgs {
    /// Raw CSV file (Date,Open,High,Low,Close,Volume)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory for train.csv and test.csv
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Share of rows assigned to the training set
    #[arg(long)]
    pub train_ratio: Option<f64>,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct InspectArgs {
    /// Raw CSV file (Date,Open,High,Low,Close,Volume)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}
