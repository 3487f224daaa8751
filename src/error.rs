//! Error taxonomy for the backtesting pipeline.
//!
//! Only input validation and configuration problems are errors; numerical
//! degeneracies (zero volatility, zero trades) are reported as NaN or
//! infinity sentinels in the metrics record instead.

use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BacktestError>;

#[derive(Debug, Error)]
pub enum BacktestError {
    #[error("price series is empty")]
    EmptySeries,

    #[error("non-positive close {close} at {date}")]
    NonPositivePrice { date: NaiveDate, close: f64 },

    #[error("dates not strictly increasing at {date}")]
    NonChronological { date: NaiveDate },

    #[error("invalid parameters for strategy '{strategy}': {reason}")]
    InvalidParameter { strategy: String, reason: String },

    #[error("unknown strategy '{name}'. Available: {available}")]
    UnknownStrategy { name: String, available: String },
}

impl BacktestError {
    pub fn invalid_parameter(strategy: &str, reason: impl Into<String>) -> Self {
        BacktestError::InvalidParameter {
            strategy: strategy.to_string(),
            reason: reason.into(),
        }
    }
}
