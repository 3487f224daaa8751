//! Signal generation strategies
//!
//! Each strategy turns a validated price series into per-bar indicator
//! columns, a directional state, and a raw action series. Strategies are
//! selected by string identifier from a registry; parameters are resolved
//! by merging JSON overrides over per-strategy serde defaults.

pub mod ema_crossover;
pub mod rsi_reversion;
pub mod sma_crossover;

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use crate::error::{BacktestError, Result};
use crate::types::{Action, PriceSeries, SignalFrame};

// =============================================================================
// SignalGenerator trait - the contract all strategies implement
// =============================================================================

/// A signal generator consumes a price series and produces one raw action
/// per bar, plus the indicator columns that drove the decisions.
///
/// Generators hold validated parameters only; all per-run state (the RSI
/// holding flag, smoothing accumulators) lives inside `generate`, so a
/// generator can be reused across series.
pub trait SignalGenerator: Send + Sync {
    /// Strategy identifier (must match the registry key)
    fn name(&self) -> &'static str;

    /// Produce the per-bar signal frame for the given series
    fn generate(&self, series: &PriceSeries) -> Result<SignalFrame>;
}

/// Convert a 0/1 directional state series into raw actions via first
/// difference: +1 on a 0 -> 1 transition, -1 on 1 -> 0, hold otherwise.
/// The first bar has no predecessor and is always a hold.
pub(crate) fn state_to_actions(state: &[u8]) -> Vec<Action> {
    let mut actions = Vec::with_capacity(state.len());
    for (i, &current) in state.iter().enumerate() {
        if i == 0 {
            actions.push(Action::Hold);
            continue;
        }
        actions.push(match (state[i - 1], current) {
            (0, 1) => Action::Open,
            (1, 0) => Action::Close,
            _ => Action::Hold,
        });
    }
    actions
}

// =============================================================================
// Strategy registry
// =============================================================================

/// Factory function type for creating strategies from JSON parameter overrides
pub type StrategyFactory = fn(&serde_json::Value) -> Result<Box<dyn SignalGenerator>>;

static REGISTRY: OnceLock<RwLock<HashMap<&'static str, StrategyFactory>>> = OnceLock::new();

fn get_registry() -> &'static RwLock<HashMap<&'static str, StrategyFactory>> {
    REGISTRY.get_or_init(|| {
        let mut map = HashMap::new();
        map.insert("sma_crossover", sma_crossover::create as StrategyFactory);
        map.insert("ema_crossover", ema_crossover::create as StrategyFactory);
        map.insert("rsi_reversion", rsi_reversion::create as StrategyFactory);
        RwLock::new(map)
    })
}

/// Create a strategy by identifier, merging `params` over its defaults.
///
/// Unknown identifiers fail with an error listing the valid ones.
pub fn create_strategy(name: &str, params: &serde_json::Value) -> Result<Box<dyn SignalGenerator>> {
    let registry = get_registry().read().unwrap();

    let factory = registry.get(name).ok_or_else(|| {
        let mut available: Vec<_> = registry.keys().copied().collect();
        available.sort_unstable();
        BacktestError::UnknownStrategy {
            name: name.to_string(),
            available: available.join(", "),
        }
    })?;

    factory(params)
}

/// Get list of available strategy identifiers (sorted)
pub fn available_strategies() -> Vec<&'static str> {
    let mut names: Vec<_> = get_registry().read().unwrap().keys().copied().collect();
    names.sort_unstable();
    names
}

/// Register a new strategy (for plugins or testing)
pub fn register_strategy(name: &'static str, factory: StrategyFactory) {
    get_registry().write().unwrap().insert(name, factory);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_diff_transitions() {
        let state = vec![0, 0, 1, 1, 0, 1];
        let actions = state_to_actions(&state);
        assert_eq!(
            actions,
            vec![
                Action::Hold,
                Action::Hold,
                Action::Open,
                Action::Hold,
                Action::Close,
                Action::Open,
            ]
        );
    }

    #[test]
    fn test_state_diff_first_bar_is_hold() {
        assert_eq!(state_to_actions(&[1, 1]), vec![Action::Hold, Action::Hold]);
    }

    #[test]
    fn test_unknown_strategy_lists_available() {
        let err = create_strategy("bollinger", &serde_json::json!({}))
            .err()
            .expect("unknown identifier must be rejected");
        let message = err.to_string();
        assert!(message.contains("bollinger"));
        assert!(message.contains("sma_crossover"));
        assert!(message.contains("ema_crossover"));
        assert!(message.contains("rsi_reversion"));
    }

    #[test]
    fn test_registry_contains_all_builtins() {
        let names = available_strategies();
        assert_eq!(
            names,
            vec!["ema_crossover", "rsi_reversion", "sma_crossover"]
        );
    }
}
