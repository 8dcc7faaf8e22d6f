//! Volume indicators.

use direction_core::traits::VolumeIndicator;

/// On-Balance Volume (OBV).
///
/// Running total of volume signed by the direction of the close-to-close
/// move. Starts at 0 on the first point; an unchanged close adds nothing.
#[derive(Debug, Clone, Default)]
pub struct Obv;

impl Obv {
    pub fn new() -> Self {
        Self
    }
}

impl VolumeIndicator for Obv {
    type Output = f64;

    fn calculate(&self, close: &[f64], volume: &[f64]) -> Vec<Option<f64>> {
        let len = close.len().min(volume.len());
        let mut result = vec![None; close.len()];
        if len == 0 {
            return result;
        }

        let mut obv = 0.0;
        result[0] = Some(obv);

        for i in 1..len {
            let change = close[i] - close[i - 1];
            let direction = if change > 0.0 {
                1.0
            } else if change < 0.0 {
                -1.0
            } else {
                0.0
            };
            let flow = direction * volume[i];
            // An unusable flow counts as no flow
            if flow.is_finite() {
                obv += flow;
            }
            result[i] = Some(obv);
        }

        result
    }

    fn name(&self) -> &str {
        "OBV"
    }
}
