//! Technical indicators for daily price series.
//!
//! This crate provides the indicators behind the dataset's feature columns:
//! - Moving averages (SMA, EMA)
//! - Momentum indicators (RSI, MACD)
//! - Volatility indicators (Bollinger Bands, sample standard deviation)
//! - Volume indicators (OBV)
//!
//! [`IndicatorEngine`] runs all of them over a [`direction_core::TimeSeries`].

pub mod engine;
pub mod momentum;
pub mod moving_average;
pub mod volatility;
pub mod volume;

pub use engine::IndicatorEngine;
pub use momentum::{Macd, MacdOutput, Rsi};
pub use moving_average::{Ema, Sma};
pub use volatility::{BollingerBands, BollingerOutput, StdDev};
pub use volume::Obv;
