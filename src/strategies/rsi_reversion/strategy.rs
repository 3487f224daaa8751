//! RSI Mean Reversion Strategy
//!
//! Buys when the RSI crosses down through the buy threshold (entering the
//! oversold zone) and sells when it crosses up through the sell threshold
//! (leaving the overbought zone). A holding flag gates emission so buys
//! and sells strictly alternate regardless of how often the RSI whipsaws
//! around a threshold.
//!
//! The flag makes this generator inherently sequential: it is a
//! chronological fold over the RSI series, not a per-bar transform.

use crate::indicators::rsi;
use crate::strategies::SignalGenerator;
use crate::types::{Action, IndicatorSeries, PriceSeries, SignalFrame};
use crate::Result;

use super::config::RsiReversionConfig;

pub struct RsiReversionStrategy {
    config: RsiReversionConfig,
}

impl RsiReversionStrategy {
    pub fn new(config: RsiReversionConfig) -> Result<Self> {
        config.validate()?;
        Ok(RsiReversionStrategy { config })
    }

    /// True when the RSI moved from at-or-above the threshold to below it
    fn crossed_down(prev: f64, current: f64, threshold: f64) -> bool {
        prev >= threshold && current < threshold
    }

    /// True when the RSI moved from at-or-below the threshold to above it
    fn crossed_up(prev: f64, current: f64, threshold: f64) -> bool {
        prev <= threshold && current > threshold
    }
}

impl SignalGenerator for RsiReversionStrategy {
    fn name(&self) -> &'static str {
        "rsi_reversion"
    }

    fn generate(&self, series: &PriceSeries) -> Result<SignalFrame> {
        let closes = series.closes();
        let rsi_values = rsi(&closes, self.config.period);

        let mut state = Vec::with_capacity(closes.len());
        let mut raw_actions = Vec::with_capacity(closes.len());
        let mut holding = false;

        for i in 0..closes.len() {
            let crossing = match (i.checked_sub(1).and_then(|p| rsi_values[p]), rsi_values[i]) {
                (Some(prev), Some(current)) => (
                    Self::crossed_down(prev, current, self.config.buy_threshold),
                    Self::crossed_up(prev, current, self.config.sell_threshold),
                ),
                _ => (false, false),
            };

            let action = match crossing {
                (true, _) if !holding => {
                    holding = true;
                    Action::Open
                }
                (_, true) if holding => {
                    holding = false;
                    Action::Close
                }
                _ => Action::Hold,
            };

            raw_actions.push(action);
            state.push(u8::from(holding));
        }

        tracing::debug!(
            strategy = self.name(),
            period = self.config.period,
            bars = closes.len(),
            "generated mean reversion signals"
        );

        Ok(SignalFrame {
            indicators: vec![IndicatorSeries::new("rsi", rsi_values)],
            state,
            raw_actions,
        })
    }
}
