//! RSI Mean Reversion Strategy Module
//!
//! No trend indication: the Relative Strength Index flags overbought and
//! oversold conditions, and the strategy buys the transition into the
//! oversold zone and sells the exit from the overbought zone. A holding
//! flag keeps buys and sells strictly alternating.

pub mod config;
pub mod strategy;

pub use config::RsiReversionConfig;
pub use strategy::RsiReversionStrategy;

use crate::error::Result;
use crate::strategies::SignalGenerator;

/// Create an RSI mean reversion strategy from JSON parameter overrides
pub fn create(params: &serde_json::Value) -> Result<Box<dyn SignalGenerator>> {
    let config = RsiReversionConfig::from_params(params)?;
    Ok(Box::new(RsiReversionStrategy::new(config)?))
}
