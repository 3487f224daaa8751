//! SMA Crossover Strategy
//!
//! Directional state is 1 while the fast SMA sits above the slow SMA.
//! Raw actions are the first difference of that state: +1 on a golden
//! cross, -1 on a death cross. Both averages are undefined until a full
//! window of history exists, so no action can fire during warmup.

use crate::indicators::sma;
use crate::strategies::{state_to_actions, SignalGenerator};
use crate::types::{IndicatorSeries, PriceSeries, SignalFrame};
use crate::Result;

use super::config::SmaCrossoverConfig;

pub struct SmaCrossoverStrategy {
    config: SmaCrossoverConfig,
}

impl SmaCrossoverStrategy {
    pub fn new(config: SmaCrossoverConfig) -> Result<Self> {
        config.validate()?;
        Ok(SmaCrossoverStrategy { config })
    }
}

impl SignalGenerator for SmaCrossoverStrategy {
    fn name(&self) -> &'static str {
        "sma_crossover"
    }

    fn generate(&self, series: &PriceSeries) -> Result<SignalFrame> {
        let closes = series.closes();
        let fast = sma(&closes, self.config.fast);
        let slow = sma(&closes, self.config.slow);

        let state: Vec<u8> = fast
            .iter()
            .zip(&slow)
            .map(|(f, s)| match (f, s) {
                (Some(f), Some(s)) if f > s => 1,
                _ => 0,
            })
            .collect();

        let raw_actions = state_to_actions(&state);

        tracing::debug!(
            strategy = self.name(),
            fast = self.config.fast,
            slow = self.config.slow,
            bars = closes.len(),
            "generated crossover signals"
        );

        Ok(SignalFrame {
            indicators: vec![
                IndicatorSeries::new(format!("sma_{}", self.config.fast), fast),
                IndicatorSeries::new(format!("sma_{}", self.config.slow), slow),
            ],
            state,
            raw_actions,
        })
    }
}
