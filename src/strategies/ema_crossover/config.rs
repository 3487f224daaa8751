//! EMA Crossover Configuration

use serde::{Deserialize, Serialize};

use crate::error::{BacktestError, Result};

/// Configuration for the EMA Crossover Strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmaCrossoverConfig {
    /// Fast EMA span in bars (default: 12)
    #[serde(default = "default_fast")]
    pub fast: usize,

    /// Slow EMA span in bars (default: 26)
    #[serde(default = "default_slow")]
    pub slow: usize,
}

fn default_fast() -> usize {
    12
}

fn default_slow() -> usize {
    26
}

impl Default for EmaCrossoverConfig {
    fn default() -> Self {
        Self {
            fast: default_fast(),
            slow: default_slow(),
        }
    }
}

impl EmaCrossoverConfig {
    /// Merge JSON overrides over the defaults
    pub fn from_params(params: &serde_json::Value) -> Result<Self> {
        if params.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(params.clone())
            .map_err(|e| BacktestError::invalid_parameter("ema_crossover", e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.fast == 0 {
            return Err(BacktestError::invalid_parameter(
                "ema_crossover",
                "fast span must be at least 1",
            ));
        }
        if self.fast >= self.slow {
            return Err(BacktestError::invalid_parameter(
                "ema_crossover",
                format!("fast ({}) must be < slow ({})", self.fast, self.slow),
            ));
        }
        Ok(())
    }
}
