//! SMA Crossover Configuration

use serde::{Deserialize, Serialize};

use crate::error::{BacktestError, Result};

/// Configuration for the SMA Crossover Strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmaCrossoverConfig {
    /// Fast moving average window in bars (default: 50)
    #[serde(default = "default_fast")]
    pub fast: usize,

    /// Slow moving average window in bars (default: 200)
    #[serde(default = "default_slow")]
    pub slow: usize,
}

fn default_fast() -> usize {
    50
}

fn default_slow() -> usize {
    200
}

impl Default for SmaCrossoverConfig {
    fn default() -> Self {
        Self {
            fast: default_fast(),
            slow: default_slow(),
        }
    }
}

impl SmaCrossoverConfig {
    /// Merge JSON overrides over the defaults
    pub fn from_params(params: &serde_json::Value) -> Result<Self> {
        if params.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(params.clone())
            .map_err(|e| BacktestError::invalid_parameter("sma_crossover", e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.fast == 0 {
            return Err(BacktestError::invalid_parameter(
                "sma_crossover",
                "fast window must be at least 1",
            ));
        }
        if self.fast >= self.slow {
            return Err(BacktestError::invalid_parameter(
                "sma_crossover",
                format!("fast ({}) must be < slow ({})", self.fast, self.slow),
            ));
        }
        Ok(())
    }
}
