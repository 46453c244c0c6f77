pub mod analyzer;
pub mod report;

pub use analyzer::{
    Drawdown, EquityPoint, GroupStats, PerformanceAnalyzer, ProfitFactor, Summary, TradeOutcome,
};
pub use report::JournalReport;
