//! Configuration management
//!
//! Strategy selection and trading settings, loadable from a JSON file.
//! Strategy parameters stay as raw JSON here and are merged over the
//! selected strategy's defaults when the generator is built.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Registry identifier of the strategy to run
    #[serde(default = "default_strategy_name")]
    pub strategy_name: String,

    /// Strategy parameter overrides (merged over the strategy's defaults)
    #[serde(default)]
    pub strategy: serde_json::Value,

    #[serde(default)]
    pub trading: TradingConfig,
}

fn default_strategy_name() -> String {
    "sma_crossover".to_string()
}

impl Config {
    /// Load configuration from JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).context("Failed to read config file")?;
        let config: Config =
            serde_json::from_str(&contents).context("Failed to parse config JSON")?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            strategy_name: default_strategy_name(),
            strategy: serde_json::Value::Null,
            trading: TradingConfig::default(),
        }
    }
}

/// Trading configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingConfig {
    pub initial_capital: f64,
}

impl Default for TradingConfig {
    fn default() -> Self {
        TradingConfig {
            initial_capital: 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.strategy_name, "sma_crossover");
        assert_eq!(config.trading.initial_capital, 1000.0);
        assert!(config.strategy.is_null());
    }

    #[test]
    fn test_parse_minimal_json() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.strategy_name, "sma_crossover");
        assert_eq!(config.trading.initial_capital, 1000.0);
    }

    #[test]
    fn test_parse_with_overrides() {
        let json = r#"{
            "strategy_name": "rsi_reversion",
            "strategy": { "period": 7, "buy_threshold": 25.0 },
            "trading": { "initial_capital": 5000.0 }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.strategy_name, "rsi_reversion");
        assert_eq!(config.strategy["period"], 7);
        assert_eq!(config.trading.initial_capital, 5000.0);
    }
}
