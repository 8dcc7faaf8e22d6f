//! Indicator engine: every feature indicator over a full series.

use direction_core::constants::{
    BOLLINGER_PERIOD, BOLLINGER_STD_MULTIPLIER, EMA_FAST_SPAN, EMA_SLOW_SPAN, MACD_FAST_SPAN,
    MACD_SIGNAL_SPAN, MACD_SLOW_SPAN, RSI_PERIOD, SMA_LONG_PERIOD, SMA_MEDIUM_PERIOD,
};
use direction_core::traits::{Indicator, MultiOutputIndicator, VolumeIndicator};
use direction_core::types::{EnrichedBar, EnrichedSeries, IndicatorSet, TimeSeries};
use tracing::debug;

use crate::momentum::{Macd, Rsi};
use crate::moving_average::{Ema, Sma};
use crate::volatility::BollingerBands;
use crate::volume::Obv;

/// Computes the indicator columns of the dataset.
///
/// Each indicator is a single linear pass over the close (and volume)
/// columns; results are aligned with the input bars.
#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    ema_fast: Ema,
    ema_slow: Ema,
    sma_medium: Sma,
    sma_long: Sma,
    rsi: Rsi,
    macd: Macd,
    bollinger: BollingerBands,
    obv: Obv,
}

impl IndicatorEngine {
    /// Engine with the fixed feature windows.
    pub fn new() -> Self {
        Self {
            ema_fast: Ema::new(EMA_FAST_SPAN),
            ema_slow: Ema::new(EMA_SLOW_SPAN),
            sma_medium: Sma::new(SMA_MEDIUM_PERIOD),
            sma_long: Sma::new(SMA_LONG_PERIOD),
            rsi: Rsi::new(RSI_PERIOD),
            macd: Macd::with_periods(MACD_FAST_SPAN, MACD_SLOW_SPAN, MACD_SIGNAL_SPAN),
            bollinger: BollingerBands::with_params(BOLLINGER_PERIOD, BOLLINGER_STD_MULTIPLIER),
            obv: Obv::new(),
        }
    }

    /// Longest warm-up across all indicators.
    pub fn lookback(&self) -> usize {
        [
            self.ema_fast.lookback(),
            self.ema_slow.lookback(),
            self.sma_medium.lookback(),
            self.sma_long.lookback(),
            self.rsi.lookback(),
            self.macd.lookback(),
            self.bollinger.lookback(),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }

    /// Compute indicators for every bar. Targets are left unset.
    pub fn compute(&self, series: &TimeSeries) -> EnrichedSeries {
        let closes = series.closes();
        let volumes = series.volumes();

        let ema_7 = self.ema_fast.calculate(&closes);
        let ema_14 = self.ema_slow.calculate(&closes);
        let sma_50 = self.sma_medium.calculate(&closes);
        let sma_200 = self.sma_long.calculate(&closes);
        let rsi = self.rsi.calculate(&closes);
        let macd = self.macd.calculate(&closes);
        let bollinger = self.bollinger.calculate(&closes);
        let obv = self.obv.calculate(&closes, &volumes);

        let rows = series
            .iter()
            .enumerate()
            .map(|(i, bar)| EnrichedBar {
                bar: *bar,
                indicators: IndicatorSet {
                    ema_7: ema_7[i],
                    ema_14: ema_14[i],
                    sma_50: sma_50[i],
                    sma_200: sma_200[i],
                    rsi: rsi[i],
                    macd: macd[i].map(|m| m.macd),
                    macd_signal: macd[i].map(|m| m.signal),
                    bb_upper: bollinger[i].map(|b| b.upper),
                    bb_lower: bollinger[i].map(|b| b.lower),
                    obv: obv[i],
                },
                target: None,
            })
            .collect();

        let undefined_rsi = rsi.iter().skip(self.rsi.lookback()).filter(|v| v.is_none()).count();
        debug!(
            bars = series.len(),
            lookback = self.lookback(),
            undefined_rsi,
            "Computed indicators"
        );

        EnrichedSeries::new(rows)
    }
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self::new()
    }
}
