pub mod raw;
pub mod trade;

pub use raw::{RawBacktestTrade, RawJournalTrade, RawRecord};
pub use trade::{weekday_name, TradeCategory, TradeRecord, WEEKDAYS};
