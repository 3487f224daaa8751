//! EMA Crossover Strategy
//!
//! Same state/diff logic as the SMA variant, but the averages are
//! exponential and seeded from the first close, so they are defined from
//! bar one onward with no warmup gate.

use crate::indicators::ema;
use crate::strategies::{state_to_actions, SignalGenerator};
use crate::types::{IndicatorSeries, PriceSeries, SignalFrame};
use crate::Result;

use super::config::EmaCrossoverConfig;

pub struct EmaCrossoverStrategy {
    config: EmaCrossoverConfig,
}

impl EmaCrossoverStrategy {
    pub fn new(config: EmaCrossoverConfig) -> Result<Self> {
        config.validate()?;
        Ok(EmaCrossoverStrategy { config })
    }
}

impl SignalGenerator for EmaCrossoverStrategy {
    fn name(&self) -> &'static str {
        "ema_crossover"
    }

    fn generate(&self, series: &PriceSeries) -> Result<SignalFrame> {
        let closes = series.closes();
        let fast = ema(&closes, self.config.fast);
        let slow = ema(&closes, self.config.slow);

        let state: Vec<u8> = fast
            .iter()
            .zip(&slow)
            .map(|(f, s)| u8::from(f > s))
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
                IndicatorSeries::new(
                    format!("ema_{}", self.config.fast),
                    fast.into_iter().map(Some).collect(),
                ),
                IndicatorSeries::new(
                    format!("ema_{}", self.config.slow),
                    slow.into_iter().map(Some).collect(),
                ),
            ],
            state,
            raw_actions,
        })
    }
}
