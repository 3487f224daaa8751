//! SMA Crossover Strategy Module
//!
//! Long-term trend following: a fast simple moving average crossing above
//! a slow one (golden cross) opens the position, crossing back below
//! (death cross) closes it. Defaults are the classic 50/200 day windows.

pub mod config;
pub mod strategy;

pub use config::SmaCrossoverConfig;
pub use strategy::SmaCrossoverStrategy;

use crate::error::Result;
use crate::strategies::SignalGenerator;

/// Create an SMA crossover strategy from JSON parameter overrides
pub fn create(params: &serde_json::Value) -> Result<Box<dyn SignalGenerator>> {
    let config = SmaCrossoverConfig::from_params(params)?;
    Ok(Box::new(SmaCrossoverStrategy::new(config)?))
}
