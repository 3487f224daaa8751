//! RSI Mean Reversion Configuration

use serde::{Deserialize, Serialize};

use crate::error::{BacktestError, Result};

/// Configuration for the RSI Mean Reversion Strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsiReversionConfig {
    /// Wilder smoothing period in bars (default: 14)
    #[serde(default = "default_period")]
    pub period: usize,

    /// Buy when RSI drops below this level (default: 30)
    #[serde(default = "default_buy_threshold")]
    pub buy_threshold: f64,

    /// Sell when RSI rises above this level (default: 70)
    #[serde(default = "default_sell_threshold")]
    pub sell_threshold: f64,
}

fn default_period() -> usize {
    14
}

fn default_buy_threshold() -> f64 {
    30.0
}

fn default_sell_threshold() -> f64 {
    70.0
}

impl Default for RsiReversionConfig {
    fn default() -> Self {
        Self {
            period: default_period(),
            buy_threshold: default_buy_threshold(),
            sell_threshold: default_sell_threshold(),
        }
    }
}

impl RsiReversionConfig {
    /// Merge JSON overrides over the defaults
    pub fn from_params(params: &serde_json::Value) -> Result<Self> {
        if params.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(params.clone())
            .map_err(|e| BacktestError::invalid_parameter("rsi_reversion", e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.period == 0 {
            return Err(BacktestError::invalid_parameter(
                "rsi_reversion",
                "period must be at least 1",
            ));
        }
        if !(0.0 < self.buy_threshold && self.buy_threshold < 100.0)
            || !(0.0 < self.sell_threshold && self.sell_threshold < 100.0)
        {
            return Err(BacktestError::invalid_parameter(
                "rsi_reversion",
                "thresholds must lie strictly between 0 and 100",
            ));
        }
        if self.buy_threshold >= self.sell_threshold {
            return Err(BacktestError::invalid_parameter(
                "rsi_reversion",
                format!(
                    "buy threshold ({}) must be < sell threshold ({})",
                    self.buy_threshold, self.sell_threshold
                ),
            ));
        }
        Ok(())
    }
}
