//! EMA Crossover Strategy Module
//!
//! Short-term momentum variant of the moving-average crossover: weights
//! recent prices more heavily so it reacts faster to new moves. Defaults
//! are the classic 12/26 day spans.

pub mod config;
pub mod strategy;

pub use config::EmaCrossoverConfig;
pub use strategy::EmaCrossoverStrategy;

use crate::error::Result;
use crate::strategies::SignalGenerator;

/// Create an EMA crossover strategy from JSON parameter overrides
pub fn create(params: &serde_json::Value) -> Result<Box<dyn SignalGenerator>> {
    let config = EmaCrossoverConfig::from_params(params)?;
    Ok(Box::new(EmaCrossoverStrategy::new(config)?))
}
