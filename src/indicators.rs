//! Technical indicators powered by the `ta` crate
//!
//! Moving averages wrap the battle-tested `ta` crate. RSI is built by hand
//! on top of Wilder smoothing because the pipeline needs the classic
//! alpha = 1/period recursion with a warmup gate, which differs from the
//! EMA-style smoothing `ta` uses internally.
//!
//! All column-producing functions return vectors aligned to the input,
//! with `None` marking bars where the indicator is not yet defined.

use ta::indicators::{ExponentialMovingAverage, SimpleMovingAverage};
use ta::Next;

/// Calculate Simple Moving Average
///
/// Undefined (`None`) until a full window of history exists.
pub fn sma(values: &[f64], period: usize) -> Vec<Option<f64>> {
    if values.is_empty() || period == 0 {
        return vec![];
    }

    let mut indicator = match SimpleMovingAverage::new(period) {
        Ok(i) => i,
        Err(_) => return vec![None; values.len()],
    };

    let mut result = Vec::with_capacity(values.len());

    for (i, &value) in values.iter().enumerate() {
        let sma_val = indicator.next(value);
        if i + 1 >= period {
            result.push(Some(sma_val));
        } else {
            result.push(None);
        }
    }

    result
}

/// Calculate Exponential Moving Average
///
/// Span-based smoothing (alpha = 2 / (period + 1)), seeded from the first
/// value. Unlike [`sma`] there is no warmup gate: the EMA is defined from
/// the first bar onward.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    if values.is_empty() || period == 0 {
        return vec![];
    }

    let mut indicator = match ExponentialMovingAverage::new(period) {
        Ok(i) => i,
        Err(_) => return vec![],
    };

    values.iter().map(|&value| indicator.next(value)).collect()
}

/// Wilder smoothing: recursive exponential smoothing with
/// alpha = 1 / period, seeded from the first sample.
///
/// Output is gated until `period` samples have been observed, but the
/// recursion itself runs from the first sample onward (no re-seeding),
/// matching the standard RSI construction.
pub fn wilder_smoothing(values: &[f64], period: usize) -> Vec<Option<f64>> {
    if values.is_empty() || period == 0 {
        return vec![];
    }

    let alpha = 1.0 / period as f64;
    let mut smoothed = values[0];
    let mut result = Vec::with_capacity(values.len());

    for (i, &value) in values.iter().enumerate() {
        if i > 0 {
            smoothed = alpha * value + (1.0 - alpha) * smoothed;
        }
        if i + 1 >= period {
            result.push(Some(smoothed));
        } else {
            result.push(None);
        }
    }

    result
}

/// Calculate the Relative Strength Index over a close-price series.
///
/// Day-over-day changes are split into gains and sign-flipped losses, each
/// smoothed independently with [`wilder_smoothing`]. RSI is undefined
/// during warmup and wherever the smoothed loss is zero (RS would divide
/// by zero).
pub fn rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    if closes.is_empty() || period == 0 {
        return vec![];
    }

    let changes: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
    let gains: Vec<f64> = changes.iter().map(|&c| c.max(0.0)).collect();
    let losses: Vec<f64> = changes.iter().map(|&c| (-c).max(0.0)).collect();

    let avg_gain = wilder_smoothing(&gains, period);
    let avg_loss = wilder_smoothing(&losses, period);

    // First bar has no price change, so RSI starts one bar later than
    // the smoothed series.
    let mut result = Vec::with_capacity(closes.len());
    result.push(None);

    for i in 0..changes.len() {
        let value = match (avg_gain[i], avg_loss[i]) {
            (Some(gain), Some(loss)) if loss > 0.0 => {
                let rs = gain / loss;
                Some(100.0 - 100.0 / (1.0 + rs))
            }
            _ => None,
        };
        result.push(value);
    }

    result
}
