use serde::Serialize;

use crate::analytics::analyzer::{
    Drawdown, EquityPoint, GroupStats, PerformanceAnalyzer, Summary,
};
use crate::models::TradeRecord;

/// Everything the journal views derive from one record set, computed in
/// a single pass over the analyzer.
#[derive(Debug, Clone, Serialize)]
pub struct JournalReport {
    pub starting_balance: f64,
    pub summary: Summary,
    pub equity_curve: Vec<EquityPoint>,
    pub drawdown: Drawdown,
    pub symbol_stats: Vec<GroupStats>,
    pub weekday_stats: Vec<GroupStats>,
}

impl JournalReport {
    pub fn build(records: &[TradeRecord], starting_balance: f64) -> Self {
        let analyzer = PerformanceAnalyzer::new();
        JournalReport {
            starting_balance,
            summary: analyzer.summary(records),
            equity_curve: analyzer.equity_curve(records, starting_balance),
            drawdown: analyzer.drawdown(records, starting_balance),
            symbol_stats: analyzer.by_symbol(records),
            weekday_stats: analyzer.by_weekday(records),
        }
    }

    pub fn final_balance(&self) -> f64 {
        self.equity_curve
            .last()
            .map(|p| p.balance)
            .unwrap_or(self.starting_balance)
    }

    pub fn print_summary(&self) {
        let s = &self.summary;

        println!("\n{}", "=".repeat(70));
        println!("  JOURNAL PERFORMANCE REPORT");
        println!("{}", "=".repeat(70));
        println!();
        println!("  PERFORMANCE");
        println!("  ───────────────────────────────────");
        println!("  Starting:    ${:.2}", self.starting_balance);
        println!("  Final:       ${:.2}", self.final_balance());
        println!("  Total P&L:   ${:+.2}", s.total_pnl);
        println!("  Avg Return:  {:+.1}%", s.avg_return_pct);
        println!();
        println!("  TRADES");
        println!("  ───────────────────────────────────");
        println!("  Total:       {} ({} closed)", s.total_trades, s.closed_trades);
        println!(
            "  W/L/BE:      {} / {} / {}",
            s.wins, s.losses, s.breakeven
        );
        println!("  Win Rate:    {:.1}%", s.win_rate_precise);
        println!("  Avg Win:     ${:+.2}", s.avg_win);
        println!("  Avg Loss:    ${:.2}", s.avg_loss);
        if let Some(best) = &s.best_trade {
            println!("  Best:        ${:+.2} ({})", best.pnl, best.symbol);
        }
        if let Some(worst) = &s.worst_trade {
            println!("  Worst:       ${:+.2} ({})", worst.pnl, worst.symbol);
        }
        println!("  Profit Factor: {}", s.profit_factor);
        println!();
        println!("  RISK");
        println!("  ───────────────────────────────────");
        println!(
            "  Max DD:      ${:.2} ({:.1}% of initial, {:.1}% of peak)",
            self.drawdown.max_absolute,
            self.drawdown.percent_of_initial,
            self.drawdown.percent_of_peak
        );

        if !s.warnings.is_empty() {
            println!();
            println!("  DATA QUALITY");
            println!("  ───────────────────────────────────");
            println!("  {} record(s) with non-numeric P&L: {}", s.warnings.len(), s.warnings.join(", "));
        }

        if !self.symbol_stats.is_empty() {
            println!();
            println!("  BY SYMBOL");
            println!("  ───────────────────────────────────");
            for stats in &self.symbol_stats {
                println!(
                    "  {:>10}: {} trades | WR {}% | PnL ${:+.2}",
                    stats.key, stats.trade_count, stats.win_rate_percent, stats.total_pnl
                );
            }
        }

        if !self.weekday_stats.is_empty() {
            println!();
            println!("  BY WEEKDAY");
            println!("  ───────────────────────────────────");
            for stats in &self.weekday_stats {
                println!(
                    "  {:>10}: {} trades | WR {}% | PnL ${:+.2}",
                    stats.key, stats.trade_count, stats.win_rate_percent, stats.total_pnl
                );
            }
        }

        println!("{}", "=".repeat(70));
    }
}
