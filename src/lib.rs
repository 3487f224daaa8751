//! Equity Strategies Backtesting
//!
//! A single-asset, long-only backtesting pipeline for daily closing
//! prices: signal generation, lookahead-free execution via a one-bar lag,
//! a one-position portfolio simulation, and a full risk/performance
//! metrics record.
//!
//! Data retrieval and persistence live outside this crate: callers hand
//! in a validated `(date, close)` series and get plain structured data
//! back.
//!
//! # Example
//! ```no_run
//! use equity_strategies::{Backtester, Config, PricePoint, PriceSeries};
//!
//! fn main() -> anyhow::Result<()> {
//!     let points: Vec<PricePoint> = load_prices(); // external collaborator
//!     let series = PriceSeries::new(points)?;
//!
//!     let backtester = Backtester::from_config(Config::default())?;
//!     let report = backtester.run(&series)?;
//!     println!("CAGR: {:.2}%", report.metrics.cagr_pct);
//!     Ok(())
//! }
//! # fn load_prices() -> Vec<PricePoint> { vec![] }
//! ```

pub mod backtest;
pub mod config;
pub mod error;
pub mod execution;
pub mod indicators;
pub mod metrics;
pub mod strategies;
pub mod types;

pub use backtest::{simulate, Backtester, BacktestReport, PositionState};
pub use config::{Config, TradingConfig};
pub use error::{BacktestError, Result};
pub use execution::shift_actions;
pub use strategies::{available_strategies, create_strategy, SignalGenerator};
pub use types::*;
