//! Feature columns, feature vectors and direction labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of feature columns in a persisted row.
pub const FEATURE_COUNT: usize = 15;

/// A named feature column.
///
/// The declaration order is the persisted column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    Open,
    High,
    Low,
    Close,
    Volume,
    Ema7,
    Ema14,
    Sma50,
    Sma200,
    Rsi,
    Macd,
    MacdSignal,
    BbUpper,
    BbLower,
    Obv,
}

impl Feature {
    /// All features in column order.
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::Open,
        Feature::High,
        Feature::Low,
        Feature::Close,
        Feature::Volume,
        Feature::Ema7,
        Feature::Ema14,
        Feature::Sma50,
        Feature::Sma200,
        Feature::Rsi,
        Feature::Macd,
        Feature::MacdSignal,
        Feature::BbUpper,
        Feature::BbLower,
        Feature::Obv,
    ];

    /// Column header used in persisted tables.
    pub fn name(&self) -> &'static str {
        match self {
            Feature::Open => "Open",
            Feature::High => "High",
            Feature::Low => "Low",
            Feature::Close => "Close",
            Feature::Volume => "Volume",
            Feature::Ema7 => "EMA_7",
            Feature::Ema14 => "EMA_14",
            Feature::Sma50 => "SMA_50",
            Feature::Sma200 => "SMA_200",
            Feature::Rsi => "RSI",
            Feature::Macd => "MACD",
            Feature::MacdSignal => "MACD_Signal",
            Feature::BbUpper => "BB_Upper",
            Feature::BbLower => "BB_Lower",
            Feature::Obv => "OBV",
        }
    }

    /// Position of the column in a feature vector.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed-size feature vector in [`Feature::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Wrap raw values laid out in [`Feature::ALL`] order.
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// Get the value of one feature.
    #[inline]
    pub fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }

    /// Get all values as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Iterate over `(feature, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL.iter().copied().zip(self.0.iter().copied())
    }
}

/// Next-day price direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Next close is lower or unchanged
    Down = 0,
    /// Next close is strictly higher
    Up = 1,
}

impl Label {
    /// Label the move from `today` to `tomorrow`.
    #[inline]
    pub fn from_closes(today: f64, tomorrow: f64) -> Self {
        if tomorrow > today {
            Label::Up
        } else {
            Label::Down
        }
    }

    /// Numeric class used in persisted tables.
    #[inline]
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for Label {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Down),
            1 => Ok(Label::Up),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_order_matches_header() {
        let header: Vec<&str> = Feature::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            header.join(","),
            "Open,High,Low,Close,Volume,EMA_7,EMA_14,SMA_50,SMA_200,RSI,MACD,MACD_Signal,BB_Upper,BB_Lower,OBV"
        );
        for (i, feature) in Feature::ALL.iter().enumerate() {
            assert_eq!(feature.index(), i);
        }
    }

    #[test]
    fn test_feature_vector_lookup() {
        let mut values = [0.0; FEATURE_COUNT];
        values[Feature::Rsi.index()] = 55.0;
        let vector = FeatureVector::new(values);

        assert_eq!(vector.get(Feature::Rsi), 55.0);
        assert_eq!(vector.iter().nth(9), Some((Feature::Rsi, 55.0)));
    }

    #[test]
    fn test_label_from_closes() {
        assert_eq!(Label::from_closes(100.0, 101.0), Label::Up);
        assert_eq!(Label::from_closes(100.0, 100.0), Label::Down);
        assert_eq!(Label::from_closes(100.0, 99.0), Label::Down);
        assert_eq!(Label::Up.as_u8(), 1);
        assert_eq!(Label::try_from(0), Ok(Label::Down));
        assert_eq!(Label::try_from(2), Err(2));
    }
}
