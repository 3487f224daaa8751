//! Core data types used across the backtesting pipeline

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{BacktestError, Result};

/// A single daily closing price observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        PricePoint { date, close }
    }
}

/// Validated daily price history.
///
/// Invariants enforced at construction: non-empty, dates strictly
/// increasing, all closes strictly positive. Every downstream stage
/// relies on these, so a series that violates them never enters the
/// pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries(Vec<PricePoint>);

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(BacktestError::EmptySeries);
        }
        for point in &points {
            if !point.close.is_finite() || point.close <= 0.0 {
                return Err(BacktestError::NonPositivePrice {
                    date: point.date,
                    close: point.close,
                });
            }
        }
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(BacktestError::NonChronological { date: pair[1].date });
            }
        }
        Ok(PriceSeries(points))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.0
    }

    pub fn closes(&self) -> Vec<f64> {
        self.0.iter().map(|p| p.close).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.0.iter().map(|p| p.date).collect()
    }

    pub fn first(&self) -> &PricePoint {
        &self.0[0]
    }

    pub fn last(&self) -> &PricePoint {
        &self.0[self.0.len() - 1]
    }
}

/// Discrete trading decision for a single bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Enter the position (+1)
    Open,
    /// Exit the position (-1)
    Close,
    /// Do nothing (0)
    #[default]
    Hold,
}

impl Action {
    /// Integer encoding used in the per-date output table
    pub fn value(self) -> i8 {
        match self {
            Action::Open => 1,
            Action::Close => -1,
            Action::Hold => 0,
        }
    }

    pub fn is_trade(self) -> bool {
        self != Action::Hold
    }
}

/// One named indicator column aligned to the price index.
///
/// `None` marks warmup bars where the indicator is not yet defined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSeries {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl IndicatorSeries {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        IndicatorSeries {
            name: name.into(),
            values,
        }
    }
}

/// Output of a signal generator: indicator columns, the directional
/// state per bar (1 = bullish, 0 = bearish/unknown), and the raw action
/// per bar, all aligned to the price series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalFrame {
    pub indicators: Vec<IndicatorSeries>,
    pub state: Vec<u8>,
    pub raw_actions: Vec<Action>,
}

/// Portfolio state recorded for one bar of the simulation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PortfolioBar {
    pub date: NaiveDate,
    pub close: f64,
    pub exec_action: i8,
    pub capital: f64,
    pub shares_held: f64,
    pub portfolio_value: f64,
}

/// Fixed-shape record of summary statistics for one backtest run.
///
/// Degenerate histories produce NaN/infinity sentinels rather than
/// errors, so the record is always complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub final_portfolio: f64,
    pub cagr_pct: f64,
    pub max_drawdown_amount: f64,
    pub max_drawdown_pct: f64,
    pub sharpe: f64,
    pub sortino: f64,
    pub calmar: f64,
    pub profit_factor: f64,
    pub win_rate_pct: f64,
    pub expectancy: f64,
    pub trades: usize,
}
