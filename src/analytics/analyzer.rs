use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{weekday_name, TradeRecord, WEEKDAYS};

/// Profit factor as a tagged value: gross profit over gross loss, or
/// `Infinite` when there are wins and no losing trades. Kept symbolic so
/// renderers can show the conventional ∞ instead of a float overflow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ProfitFactor {
    Ratio(f64),
    Infinite,
}

impl ProfitFactor {
    pub fn is_infinite(&self) -> bool {
        matches!(self, ProfitFactor::Infinite)
    }
}

impl Default for ProfitFactor {
    fn default() -> Self {
        ProfitFactor::Ratio(0.0)
    }
}

impl fmt::Display for ProfitFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfitFactor::Ratio(v) => write!(f, "{v:.2}"),
            ProfitFactor::Infinite => write!(f, "∞"),
        }
    }
}

/// Id and P&L of a single standout trade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeOutcome {
    pub id: String,
    pub symbol: String,
    pub pnl: f64,
}

/// Headline statistics over one record set.
///
/// `total_trades` counts every record, open or closed; win/loss ratios use
/// closed records only. The two win-rate fields exist because the stat
/// cards round to a whole percent while the analytics view keeps one
/// decimal.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub total_trades: usize,
    pub closed_trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub breakeven: usize,
    pub win_rate_integer: u32,
    pub win_rate_precise: f64,
    pub total_pnl: f64,
    pub avg_win: f64,
    pub avg_loss: f64,
    /// Mean per-trade percentage return against entry cost; trades with
    /// zero entry cost contribute 0.
    pub avg_return_pct: f64,
    pub profit_factor: ProfitFactor,
    pub best_trade: Option<TradeOutcome>,
    pub worst_trade: Option<TradeOutcome>,
    /// Ids whose stored P&L was non-finite. Those trades still count
    /// toward the totals but contribute 0 to every sum.
    pub warnings: Vec<String>,
}

/// One step of the running balance, emitted per closed trade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquityPoint {
    pub date: DateTime<Utc>,
    pub balance: f64,
}

/// Peak-to-trough decline of the running balance.
///
/// Two percentage variants ship side by side: the backtest-session view
/// divides by the initial capital, the dashboard view by the peak in force
/// when the maximum drawdown occurred.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Drawdown {
    pub max_absolute: f64,
    pub percent_of_initial: f64,
    pub percent_of_peak: f64,
}

/// Aggregate for one group key (a symbol or a weekday name).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    pub key: String,
    pub total_pnl: f64,
    pub trade_count: usize,
    pub win_count: usize,
    pub win_rate_percent: u32,
}

/// Stateless calculator for journal performance metrics. Every method is
/// a pure function of its inputs; input order never affects `summary`,
/// while the curve and drawdown sort chronologically themselves.
#[derive(Debug, Default)]
pub struct PerformanceAnalyzer;

impl PerformanceAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn summary(&self, records: &[TradeRecord]) -> Summary {
        let warnings: Vec<String> = records
            .iter()
            .filter(|r| !r.pnl.is_finite())
            .map(|r| r.id.clone())
            .collect();

        let closed: Vec<&TradeRecord> = records.iter().filter(|r| r.is_closed).collect();
        let closed_trades = closed.len();

        let win_pnls: Vec<f64> = closed
            .iter()
            .map(|r| finite_or_zero(r.pnl))
            .filter(|p| *p > 0.0)
            .collect();
        let loss_pnls: Vec<f64> = closed
            .iter()
            .map(|r| finite_or_zero(r.pnl))
            .filter(|p| *p < 0.0)
            .collect();
        let wins = win_pnls.len();
        let losses = loss_pnls.len();
        let breakeven = closed_trades - wins - losses;

        let win_rate_raw = if closed_trades > 0 {
            wins as f64 / closed_trades as f64 * 100.0
        } else {
            0.0
        };

        let total_pnl: f64 = closed.iter().map(|r| finite_or_zero(r.pnl)).sum();

        let avg_win = if wins > 0 {
            win_pnls.iter().sum::<f64>() / wins as f64
        } else {
            0.0
        };
        let avg_loss = if losses > 0 {
            (loss_pnls.iter().sum::<f64>() / losses as f64).abs()
        } else {
            0.0
        };

        let profit_factor = if avg_loss > 0.0 {
            let gross_profit = avg_win * wins as f64;
            let gross_loss = avg_loss * losses as f64;
            ProfitFactor::Ratio(round2(gross_profit / gross_loss))
        } else if wins > 0 {
            ProfitFactor::Infinite
        } else {
            ProfitFactor::Ratio(0.0)
        };

        let avg_return_pct = if closed_trades > 0 {
            closed
                .iter()
                .map(|r| {
                    if r.entry_cost > 0.0 {
                        finite_or_zero(r.pnl) / r.entry_cost * 100.0
                    } else {
                        0.0
                    }
                })
                .sum::<f64>()
                / closed_trades as f64
        } else {
            0.0
        };

        let best_trade = closed
            .iter()
            .max_by(|a, b| finite_or_zero(a.pnl).total_cmp(&finite_or_zero(b.pnl)))
            .map(|r| outcome(r));
        let worst_trade = closed
            .iter()
            .min_by(|a, b| finite_or_zero(a.pnl).total_cmp(&finite_or_zero(b.pnl)))
            .map(|r| outcome(r));

        Summary {
            total_trades: records.len(),
            closed_trades,
            wins,
            losses,
            breakeven,
            win_rate_integer: win_rate_raw.round() as u32,
            win_rate_precise: round1(win_rate_raw),
            total_pnl: round2(total_pnl),
            avg_win: round2(avg_win),
            avg_loss: round2(avg_loss),
            avg_return_pct: round1(avg_return_pct),
            profit_factor,
            best_trade,
            worst_trade,
            warnings,
        }
    }

    /// Running balance after each closed trade, oldest first. Same-day
    /// trades keep their insertion order (stable sort).
    pub fn equity_curve(&self, records: &[TradeRecord], starting_balance: f64) -> Vec<EquityPoint> {
        let mut balance = starting_balance;
        self.closed_chronological(records)
            .into_iter()
            .map(|r| {
                balance += finite_or_zero(r.pnl);
                EquityPoint {
                    date: r.closed_at,
                    balance: round2(balance),
                }
            })
            .collect()
    }

    pub fn drawdown(&self, records: &[TradeRecord], starting_balance: f64) -> Drawdown {
        let mut running = starting_balance;
        let mut peak = starting_balance;
        let mut max_dd = 0.0f64;
        let mut peak_at_max = starting_balance;

        for r in self.closed_chronological(records) {
            running += finite_or_zero(r.pnl);
            if running > peak {
                peak = running;
            }
            let dd = peak - running;
            if dd > max_dd {
                max_dd = dd;
                peak_at_max = peak;
            }
        }

        Drawdown {
            max_absolute: round2(max_dd),
            percent_of_initial: if starting_balance > 0.0 {
                round1(max_dd / starting_balance * 100.0)
            } else {
                0.0
            },
            percent_of_peak: if peak_at_max > 0.0 {
                round1(max_dd / peak_at_max * 100.0)
            } else {
                0.0
            },
        }
    }

    /// Generic aggregation of closed trades by an arbitrary key.
    pub fn grouped<F>(&self, records: &[TradeRecord], key_fn: F) -> HashMap<String, GroupStats>
    where
        F: Fn(&TradeRecord) -> String,
    {
        let mut buckets: HashMap<String, (f64, usize, usize)> = HashMap::new();
        for r in records.iter().filter(|r| r.is_closed) {
            let pnl = finite_or_zero(r.pnl);
            let entry = buckets.entry(key_fn(r)).or_default();
            entry.0 += pnl;
            entry.1 += 1;
            if pnl > 0.0 {
                entry.2 += 1;
            }
        }

        buckets
            .into_iter()
            .map(|(key, (total_pnl, trade_count, win_count))| {
                let win_rate_percent = if trade_count > 0 {
                    (win_count as f64 / trade_count as f64 * 100.0).round() as u32
                } else {
                    0
                };
                let stats = GroupStats {
                    key: key.clone(),
                    total_pnl: round2(total_pnl),
                    trade_count,
                    win_count,
                    win_rate_percent,
                };
                (key, stats)
            })
            .collect()
    }

    /// Per-symbol aggregates, best performer first.
    pub fn by_symbol(&self, records: &[TradeRecord]) -> Vec<GroupStats> {
        let mut out: Vec<GroupStats> = self
            .grouped(records, |r| r.symbol.clone())
            .into_values()
            .collect();
        out.sort_by(|a, b| b.total_pnl.total_cmp(&a.total_pnl));
        out
    }

    /// Per-weekday aggregates in calendar order (Sunday first), skipping
    /// weekdays with no trades.
    pub fn by_weekday(&self, records: &[TradeRecord]) -> Vec<GroupStats> {
        let map = self.grouped(records, |r| weekday_name(r.weekday()).to_string());
        WEEKDAYS
            .iter()
            .filter_map(|d| map.get(weekday_name(*d)).cloned())
            .collect()
    }

    fn closed_chronological<'a>(&self, records: &'a [TradeRecord]) -> Vec<&'a TradeRecord> {
        let mut closed: Vec<&TradeRecord> = records.iter().filter(|r| r.is_closed).collect();
        closed.sort_by_key(|r| r.closed_at);
        closed
    }
}

fn outcome(r: &TradeRecord) -> TradeOutcome {
    TradeOutcome {
        id: r.id.clone(),
        symbol: r.symbol.clone(),
        pnl: round2(finite_or_zero(r.pnl)),
    }
}

fn finite_or_zero(pnl: f64) -> f64 {
    if pnl.is_finite() {
        pnl
    } else {
        0.0
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
