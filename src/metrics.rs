//! Risk and performance statistics over a finished equity curve.
//!
//! Every metric is computed in one pass at the end of a run and the
//! record is always complete: degenerate histories (no trades, zero
//! volatility, no drawdown) yield NaN or infinity sentinels, never
//! errors.

use itertools::Itertools;
use statrs::statistics::Statistics;

use crate::types::{PerformanceMetrics, PortfolioBar};

/// Trading days per year used to annualize Sharpe and Sortino
const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Risk-free rate assumed zero for daily excess returns
const RISK_FREE_RATE: f64 = 0.0;

/// Compute the full metrics record for a simulated run.
pub fn compute(bars: &[PortfolioBar], initial_capital: f64) -> PerformanceMetrics {
    debug_assert!(!bars.is_empty());

    let values: Vec<f64> = bars.iter().map(|b| b.portfolio_value).collect();
    let final_portfolio = *values.last().unwrap_or(&initial_capital);

    let (max_drawdown_amount, max_drawdown_pct) = max_drawdown(&values);
    let returns = daily_returns(&values);
    let sharpe = sharpe_ratio(&returns);
    let sortino = sortino_ratio(&returns);

    let trade_stats = pair_trades(bars);
    if trade_stats.trades == 0 {
        tracing::warn!("no trades executed; trade statistics are undefined");
    }

    let cagr = cagr(bars, final_portfolio, initial_capital);
    let calmar = if max_drawdown_pct < 0.0 {
        cagr / max_drawdown_pct.abs()
    } else {
        f64::INFINITY
    };

    PerformanceMetrics {
        final_portfolio,
        cagr_pct: cagr * 100.0,
        max_drawdown_amount,
        max_drawdown_pct: max_drawdown_pct * 100.0,
        sharpe,
        sortino,
        calmar,
        profit_factor: trade_stats.profit_factor,
        win_rate_pct: trade_stats.win_rate * 100.0,
        expectancy: trade_stats.expectancy,
        trades: trade_stats.trades,
    }
}

/// Most negative decline from the running peak, as an amount and as a
/// fraction of the peak. Both are 0 for a monotone non-decreasing curve.
fn max_drawdown(values: &[f64]) -> (f64, f64) {
    let mut peak = f64::NEG_INFINITY;
    let mut worst_amount = 0.0_f64;
    let mut worst_pct = 0.0_f64;

    for &value in values {
        peak = peak.max(value);
        worst_amount = worst_amount.min(value - peak);
        worst_pct = worst_pct.min(value / peak - 1.0);
    }

    (worst_amount, worst_pct)
}

/// Bar-to-bar percent change; undefined on the first bar, so the output
/// is one element shorter than the input.
fn daily_returns(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect()
}

/// A sample deviation this far below the mean's magnitude is rounding
/// noise from a constant series, not real volatility.
fn is_negligible(std_dev: f64, mean: f64) -> bool {
    std_dev <= f64::EPSILON * mean.abs().max(1.0)
}

/// Annualized mean excess return over total volatility. NaN when the
/// volatility is zero or there are too few returns to estimate it.
fn sharpe_ratio(returns: &[f64]) -> f64 {
    let std_dev = returns.iter().std_dev();
    let mean = returns.iter().mean();
    if !std_dev.is_finite() || is_negligible(std_dev, mean) {
        return f64::NAN;
    }
    (mean - RISK_FREE_RATE) / std_dev * TRADING_DAYS_PER_YEAR.sqrt()
}

/// Same numerator as Sharpe, but the denominator only counts downside
/// volatility. Positive infinity when there is no downside at all.
fn sortino_ratio(returns: &[f64]) -> f64 {
    let downside: Vec<f64> = returns.iter().copied().filter(|&r| r < 0.0).collect();
    if downside.is_empty() {
        return f64::INFINITY;
    }

    let downside_dev = downside.iter().std_dev();
    if !downside_dev.is_finite() {
        return f64::NAN;
    }
    if is_negligible(downside_dev, downside.iter().mean()) {
        return f64::INFINITY;
    }

    let mean = returns.iter().mean();
    (mean - RISK_FREE_RATE) / downside_dev * TRADING_DAYS_PER_YEAR.sqrt()
}

/// Trade-level statistics from paired entry/exit portfolio snapshots.
struct TradeStats {
    trades: usize,
    profit_factor: f64,
    win_rate: f64,
    expectancy: f64,
}

/// Pair the portfolio values at ±1 executable-action bars two at a time
/// (entry, exit). An odd number of snapshots is padded with the final
/// bar's value so the last entry has an exit.
///
/// Pairing is strictly positional over the filtered action series: an
/// action the simulator ignored (a buy while long, a sell while flat)
/// still counts as a trade boundary here. That can diverge from the
/// trades actually executed; it is a known fidelity gap kept
/// deliberately, because the alternation discipline of the generators
/// makes the two views coincide in practice.
fn pair_trades(bars: &[PortfolioBar]) -> TradeStats {
    let mut snapshots: Vec<f64> = bars
        .iter()
        .filter(|b| b.exec_action != 0)
        .map(|b| b.portfolio_value)
        .collect();

    if snapshots.len() % 2 != 0 {
        snapshots.push(bars.last().map(|b| b.portfolio_value).unwrap_or(0.0));
    }

    let mut gross_profit = 0.0;
    let mut gross_loss = 0.0;
    let mut wins: Vec<f64> = Vec::new();
    let mut losses: Vec<f64> = Vec::new();

    for (entry, exit) in snapshots.iter().tuples() {
        let pnl = exit - entry;
        if pnl > 0.0 {
            gross_profit += pnl;
            wins.push(pnl);
        } else if pnl < 0.0 {
            gross_loss += pnl;
            losses.push(pnl);
        }
    }

    let profit_factor = if gross_loss != 0.0 {
        gross_profit / gross_loss.abs()
    } else {
        f64::INFINITY
    };

    let trades = snapshots.len() / 2;
    let (win_rate, loss_rate) = if trades > 0 {
        (
            wins.len() as f64 / trades as f64,
            losses.len() as f64 / trades as f64,
        )
    } else {
        (f64::NAN, f64::NAN)
    };

    let avg_win = if wins.is_empty() {
        0.0
    } else {
        wins.iter().sum::<f64>() / wins.len() as f64
    };
    let avg_loss = if losses.is_empty() {
        0.0
    } else {
        (losses.iter().sum::<f64>() / losses.len() as f64).abs()
    };

    let expectancy = if trades > 0 {
        win_rate * avg_win - loss_rate * avg_loss
    } else {
        f64::NAN
    };

    TradeStats {
        trades,
        profit_factor,
        win_rate,
        expectancy,
    }
}

/// Compound annual growth rate as a fraction, with the horizon derived
/// from the date span of the simulated bars. NaN for a zero-day span.
fn cagr(bars: &[PortfolioBar], final_portfolio: f64, initial_capital: f64) -> f64 {
    let first = match bars.first() {
        Some(bar) => bar.date,
        None => return f64::NAN,
    };
    let last = bars.last().map(|b| b.date).unwrap_or(first);
    let years = (last - first).num_days() as f64 / 365.0;
    if years <= 0.0 {
        return f64::NAN;
    }
    (final_portfolio / initial_capital).powf(1.0 / years) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn bars(values: &[f64], actions: &[i8]) -> Vec<PortfolioBar> {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        values
            .iter()
            .zip(actions)
            .enumerate()
            .map(|(i, (&value, &action))| PortfolioBar {
                date: start + chrono::Days::new(i as u64),
                close: 10.0,
                exec_action: action,
                capital: value,
                shares_held: 0.0,
                portfolio_value: value,
            })
            .collect()
    }

    #[test]
    fn test_max_drawdown_basic() {
        let (amount, pct) = max_drawdown(&[1000.0, 1200.0, 900.0, 1100.0]);
        assert_relative_eq!(amount, -300.0);
        assert_relative_eq!(pct, 900.0 / 1200.0 - 1.0);
    }

    #[test]
    fn test_max_drawdown_monotone_curve_is_zero() {
        let (amount, pct) = max_drawdown(&[1000.0, 1000.0, 1100.0, 1200.0]);
        assert_relative_eq!(amount, 0.0);
        assert_relative_eq!(pct, 0.0);
    }

    #[test]
    fn test_daily_returns() {
        let returns = daily_returns(&[100.0, 110.0, 99.0]);
        assert_relative_eq!(returns[0], 0.10);
        assert_relative_eq!(returns[1], -0.10);
    }

    #[test]
    fn test_sharpe_nan_for_zero_volatility() {
        assert!(sharpe_ratio(&[0.01; 10]).is_nan());
        assert!(sharpe_ratio(&[]).is_nan());
        assert!(sharpe_ratio(&[0.01]).is_nan());
    }

    #[test]
    fn test_sharpe_nan_on_constant_growth_curve() {
        // Compounding at exactly 1% a day leaves sub-epsilon rounding
        // noise in the sample deviation; that is still zero volatility.
        let values: Vec<f64> = (0..10).map(|i| 1000.0 * 1.01_f64.powi(i)).collect();
        let metrics = compute(&bars(&values, &[0; 10]), 1000.0);
        assert!(metrics.sharpe.is_nan());
    }

    #[test]
    fn test_sharpe_annualization() {
        let returns = vec![0.01, -0.01, 0.02, -0.02, 0.01];
        let mean = returns.iter().mean();
        let std_dev = returns.iter().std_dev();
        assert_relative_eq!(
            sharpe_ratio(&returns),
            mean / std_dev * 252.0_f64.sqrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_sortino_infinite_without_negative_returns() {
        assert_eq!(sortino_ratio(&[0.01, 0.0, 0.02]), f64::INFINITY);
    }

    #[test]
    fn test_sortino_infinite_for_repeated_equal_losses() {
        // Identical negative returns have no downside dispersion.
        assert_eq!(
            sortino_ratio(&[0.03, -0.02, 0.01, -0.02]),
            f64::INFINITY
        );
    }

    #[test]
    fn test_sortino_uses_downside_deviation_only() {
        let returns = vec![0.05, -0.01, 0.03, -0.03, 0.02];
        let downside = [-0.01, -0.03];
        let expected = returns.iter().mean() / downside.iter().std_dev() * 252.0_f64.sqrt();
        assert_relative_eq!(sortino_ratio(&returns), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_worked_example_single_losing_trade() {
        // Entry snapshot 1000, exit snapshot 500: pnl -500.
        let bars = bars(&[1000.0, 1000.0, 500.0], &[0, 1, -1]);
        let stats = pair_trades(&bars);

        assert_eq!(stats.trades, 1);
        assert_relative_eq!(stats.profit_factor, 0.0);
        assert_relative_eq!(stats.win_rate, 0.0);
        assert_relative_eq!(stats.expectancy, -500.0);
    }

    #[test]
    fn test_odd_snapshot_count_pads_with_final_value() {
        // One open with no matching close: the final bar's value closes it.
        let bars = bars(&[1000.0, 1000.0, 1300.0], &[0, 1, 0]);
        let stats = pair_trades(&bars);

        assert_eq!(stats.trades, 1);
        assert_relative_eq!(stats.win_rate, 1.0);
        assert_eq!(stats.profit_factor, f64::INFINITY);
        assert_relative_eq!(stats.expectancy, 300.0);
    }

    #[test]
    fn test_no_trades_yields_nan_rates() {
        let bars = bars(&[1000.0, 1000.0], &[0, 0]);
        let stats = pair_trades(&bars);

        assert_eq!(stats.trades, 0);
        assert!(stats.win_rate.is_nan());
        assert!(stats.expectancy.is_nan());
        assert_eq!(stats.profit_factor, f64::INFINITY);
    }

    #[test]
    fn test_mixed_wins_and_losses() {
        let values = [1000.0, 1000.0, 1400.0, 1400.0, 1200.0, 1200.0];
        let actions = [0, 1, -1, 1, -1, 0];
        let stats = pair_trades(&bars(&values, &actions));

        assert_eq!(stats.trades, 2);
        // +400 win, -200 loss
        assert_relative_eq!(stats.profit_factor, 2.0);
        assert_relative_eq!(stats.win_rate, 0.5);
        assert_relative_eq!(stats.expectancy, 0.5 * 400.0 - 0.5 * 200.0);
    }

    #[test]
    fn test_cagr_flat_curve_is_zero() {
        let curve = bars(&[1000.0; 366], &[0; 366]);
        assert_relative_eq!(cagr(&curve, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_cagr_doubling_in_one_year() {
        let curve = bars(&[1000.0; 366], &[0; 366]);
        // 365 days between first and last bar
        assert_relative_eq!(cagr(&curve, 2000.0, 1000.0), 1.0, max_relative = 1e-9);
    }

    #[test]
    fn test_compute_full_record_on_flat_history() {
        let curve = bars(&[1000.0; 30], &[0; 30]);
        let metrics = compute(&curve, 1000.0);

        assert_relative_eq!(metrics.final_portfolio, 1000.0);
        assert_relative_eq!(metrics.cagr_pct, 0.0);
        assert_relative_eq!(metrics.max_drawdown_amount, 0.0);
        assert_relative_eq!(metrics.max_drawdown_pct, 0.0);
        assert!(metrics.sharpe.is_nan());
        assert_eq!(metrics.sortino, f64::INFINITY);
        assert_eq!(metrics.calmar, f64::INFINITY);
        assert_eq!(metrics.trades, 0);
        assert!(metrics.win_rate_pct.is_nan());
    }

    #[test]
    fn test_calmar_uses_fractional_drawdown() {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        // Two-year span: 1000 -> 1440 with a dip to 900 along the way.
        let values = [1000.0, 1200.0, 900.0, 1440.0];
        let dates = [0_u64, 200, 400, 730];
        let curve: Vec<PortfolioBar> = values
            .iter()
            .zip(&dates)
            .map(|(&value, &offset)| PortfolioBar {
                date: start + chrono::Days::new(offset),
                close: 10.0,
                exec_action: 0,
                capital: value,
                shares_held: 0.0,
                portfolio_value: value,
            })
            .collect();

        let metrics = compute(&curve, 1000.0);
        let years = 730.0 / 365.0;
        let expected_cagr = (1440.0_f64 / 1000.0).powf(1.0 / years) - 1.0;
        let expected_dd = (900.0 / 1200.0_f64 - 1.0).abs();
        assert_relative_eq!(
            metrics.calmar,
            expected_cagr / expected_dd,
            max_relative = 1e-12
        );
    }
}
