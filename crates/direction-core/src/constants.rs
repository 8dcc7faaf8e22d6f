//! Indicator windows and dataset defaults.
//!
//! The feature columns are named after these windows (`EMA_7`, `SMA_200`, ...),
//! so they are fixed at build time rather than configurable.

/// Short EMA span.
pub const EMA_FAST_SPAN: usize = 7;
/// Medium EMA span.
pub const EMA_SLOW_SPAN: usize = 14;

/// Medium-term SMA window.
pub const SMA_MEDIUM_PERIOD: usize = 50;
/// Long-term SMA window. This is the longest window in the feature set.
pub const SMA_LONG_PERIOD: usize = 200;

/// RSI averaging window, in price changes.
pub const RSI_PERIOD: usize = 14;

/// MACD fast EMA span.
pub const MACD_FAST_SPAN: usize = 12;
/// MACD slow EMA span.
pub const MACD_SLOW_SPAN: usize = 26;
/// MACD signal EMA span.
pub const MACD_SIGNAL_SPAN: usize = 9;

/// Bollinger middle band window.
pub const BOLLINGER_PERIOD: usize = 20;
/// Bollinger band width in standard deviations.
pub const BOLLINGER_STD_MULTIPLIER: f64 = 2.0;

/// Leading bars without a full SMA_200 window.
pub const WARMUP_BARS: usize = SMA_LONG_PERIOD - 1;

/// Smallest series that leaves at least one labeled row after warm-up.
pub const MIN_SERIES_LEN: usize = WARMUP_BARS + 2;

/// Default share of sanitized rows assigned to the training set.
pub const DEFAULT_TRAIN_RATIO: f64 = 0.8;

/// Default raw input file.
pub const DEFAULT_RAW_DATA_PATH: &str = "btc_data_raw/btc_usd_5y.csv";

/// Default output directory for the persisted tables.
pub const DEFAULT_OUTPUT_DIR: &str = "btc_data_preprocessed";

/// File name of the persisted training table.
pub const TRAIN_FILE_NAME: &str = "train.csv";

/// File name of the persisted testing table.
pub const TEST_FILE_NAME: &str = "test.csv";
