use serde::Deserialize;
use serde_json::Value;

/// A discretionary journal row as returned by the hosted backend.
///
/// Numeric columns come back as JSON numbers or stringified numbers
/// depending on the column type, so they are kept loose here and coerced
/// during normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawJournalTrade {
    pub id: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub entry_price: Value,
    #[serde(default)]
    pub exit_price: Value,
    #[serde(default)]
    pub quantity: Value,
    #[serde(default)]
    pub entry_date: Option<String>,
    #[serde(default)]
    pub exit_date: Option<String>,
    #[serde(default)]
    pub pnl: Value,
}

/// A backtest or future-trading session row. These always represent a
/// realized outcome and carry a single trade date.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBacktestTrade {
    pub id: String,
    #[serde(default)]
    pub pair: String,
    #[serde(default)]
    pub trade_date: Option<String>,
    #[serde(default)]
    pub pnl: Value,
    #[serde(default)]
    pub day_of_week: Option<String>,
}

/// One raw row tagged with its source shape, ready for normalization.
#[derive(Debug, Clone)]
pub enum RawRecord {
    Journal(RawJournalTrade),
    Backtest(RawBacktestTrade),
    FutureTrading(RawBacktestTrade),
}

impl RawRecord {
    pub fn id(&self) -> &str {
        match self {
            RawRecord::Journal(t) => &t.id,
            RawRecord::Backtest(t) | RawRecord::FutureTrading(t) => &t.id,
        }
    }
}
