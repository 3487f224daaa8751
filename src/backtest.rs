//! Backtesting engine
//!
//! Runs the full pipeline: signal generation, the one-bar execution lag,
//! the bar-by-bar portfolio simulation, and the metrics pass. Uses T+1
//! execution throughout (an action derived from day T's close trades at
//! day T+1's close).

use crate::execution::shift_actions;
use crate::metrics;
use crate::strategies::{create_strategy, SignalGenerator};
use crate::types::{Action, PortfolioBar, PriceSeries, SignalFrame};
use crate::{Config, PerformanceMetrics, Result};

/// The single-slot position, modeled as an explicit two-state machine.
///
/// Exactly one of capital/shares is live at any time, which enforces the
/// all-in/all-out discipline structurally: there is no representable
/// state that is partially invested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionState {
    /// Out of the market, holding cash
    Flat { capital: f64 },
    /// Fully invested
    Long { shares: f64 },
}

impl PositionState {
    /// Apply one executable action at the given close.
    ///
    /// Guarded transitions only: opening requires being flat with capital
    /// to invest, closing requires being long. Every other (action, state)
    /// pair is a no-op: a buy while long is ignored (no pyramiding), a
    /// sell while flat is ignored (no shorting).
    pub fn transition(self, action: Action, close: f64) -> PositionState {
        match (self, action) {
            (PositionState::Flat { capital }, Action::Open) if capital > 0.0 => {
                PositionState::Long {
                    shares: capital / close,
                }
            }
            (PositionState::Long { shares }, Action::Close) => PositionState::Flat {
                capital: shares * close,
            },
            (state, _) => state,
        }
    }

    /// Mark-to-market value at the given close
    pub fn value(&self, close: f64) -> f64 {
        match *self {
            PositionState::Flat { capital } => capital,
            PositionState::Long { shares } => shares * close,
        }
    }

    pub fn capital(&self) -> f64 {
        match *self {
            PositionState::Flat { capital } => capital,
            PositionState::Long { .. } => 0.0,
        }
    }

    pub fn shares(&self) -> f64 {
        match *self {
            PositionState::Flat { .. } => 0.0,
            PositionState::Long { shares } => shares,
        }
    }

    pub fn is_long(&self) -> bool {
        matches!(self, PositionState::Long { .. })
    }
}

/// Simulate the portfolio over the executable action series.
///
/// Bar 0 is the initial flat state by construction (its executable action
/// is forced to hold by the lag shift); iteration starts at the second
/// bar. Returns one [`PortfolioBar`] per input bar.
pub fn simulate(
    series: &PriceSeries,
    exec_actions: &[Action],
    initial_capital: f64,
) -> Vec<PortfolioBar> {
    let points = series.points();
    debug_assert_eq!(points.len(), exec_actions.len());

    let mut state = PositionState::Flat {
        capital: initial_capital,
    };
    let mut bars = Vec::with_capacity(points.len());

    bars.push(PortfolioBar {
        date: points[0].date,
        close: points[0].close,
        exec_action: exec_actions[0].value(),
        capital: state.capital(),
        shares_held: state.shares(),
        portfolio_value: state.value(points[0].close),
    });

    for (point, &action) in points.iter().zip(exec_actions).skip(1) {
        let next = state.transition(action, point.close);

        if next.is_long() && !state.is_long() {
            tracing::info!(
                date = %point.date,
                price = point.close,
                shares = next.shares(),
                "BUY executed"
            );
        } else if !next.is_long() && state.is_long() {
            tracing::info!(
                date = %point.date,
                price = point.close,
                capital = next.capital(),
                "SELL executed"
            );
        }

        state = next;
        bars.push(PortfolioBar {
            date: point.date,
            close: point.close,
            exec_action: action.value(),
            capital: state.capital(),
            shares_held: state.shares(),
            portfolio_value: state.value(point.close),
        });
    }

    bars
}

/// Backtest engine: one strategy, one price series, one report
pub struct Backtester {
    config: Config,
    strategy: Box<dyn SignalGenerator>,
}

impl Backtester {
    pub fn new(config: Config, strategy: Box<dyn SignalGenerator>) -> Self {
        Backtester { config, strategy }
    }

    /// Build the strategy named in the config via the registry
    pub fn from_config(config: Config) -> Result<Self> {
        let strategy = create_strategy(&config.strategy_name, &config.strategy)?;
        Ok(Backtester { config, strategy })
    }

    /// Run the full pipeline over a validated price series
    pub fn run(&self, series: &PriceSeries) -> Result<BacktestReport> {
        let signals = self.strategy.generate(series)?;
        let exec_actions = shift_actions(&signals.raw_actions);
        let bars = simulate(series, &exec_actions, self.config.trading.initial_capital);
        let metrics = metrics::compute(&bars, self.config.trading.initial_capital);

        tracing::info!(
            strategy = self.strategy.name(),
            bars = bars.len(),
            trades = metrics.trades,
            final_portfolio = metrics.final_portfolio,
            "backtest complete"
        );

        Ok(BacktestReport {
            signals,
            exec_actions,
            bars,
            metrics,
        })
    }
}

/// Everything a run hands to the caller: the augmented per-date table
/// (signal columns plus portfolio state) and the flat metrics record.
#[derive(Debug, Clone)]
pub struct BacktestReport {
    pub signals: SignalFrame,
    pub exec_actions: Vec<Action>,
    pub bars: Vec<PortfolioBar>,
    pub metrics: PerformanceMetrics,
}
