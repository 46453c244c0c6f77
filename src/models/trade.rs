use chrono::{DateTime, Datelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Fixed calendar order used for weekday aggregation output.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Full English name, matching the labels stored on backtest rows.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Which source table a record came from. Backtest-style rows always
/// represent a realized outcome; discretionary journal rows may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeCategory {
    Discretionary,
    Backtest,
    FutureTrading,
}

impl TradeCategory {
    pub fn intrinsically_closed(&self) -> bool {
        matches!(self, TradeCategory::Backtest | TradeCategory::FutureTrading)
    }
}

/// Canonical trade shape every analytics operation consumes.
///
/// Built fresh per analysis from raw backend rows (see `journal::normalize`);
/// nothing in the analytics layer mutates or stores these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    pub id: String,
    pub symbol: String,
    /// Signed P&L in account currency. May be non-finite when the source
    /// row carried garbage; the analyzer quarantines such values.
    pub pnl: f64,
    /// Exit timestamp for closed trades; entry timestamp for open ones.
    /// Chronological sorting and weekday bucketing key off this.
    pub closed_at: DateTime<Utc>,
    /// Weekday label carried on the source row. When present it takes
    /// precedence over deriving the weekday from `closed_at`.
    #[serde(default)]
    pub day_of_week: Option<Weekday>,
    /// Entry price × quantity; zero when the source shape has no entry price.
    #[serde(default)]
    pub entry_cost: f64,
    pub is_closed: bool,
    pub category: TradeCategory,
}

impl TradeRecord {
    /// Weekday used for bucketing: explicit label first, UTC date otherwise.
    pub fn weekday(&self) -> Weekday {
        self.day_of_week.unwrap_or_else(|| self.closed_at.weekday())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn weekday_label_overrides_date() {
        // 2024-01-15 is a Monday
        let mut record = TradeRecord {
            id: "t1".to_string(),
            symbol: "EURUSD".to_string(),
            pnl: 10.0,
            closed_at: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
            day_of_week: None,
            entry_cost: 0.0,
            is_closed: true,
            category: TradeCategory::Backtest,
        };
        assert_eq!(record.weekday(), Weekday::Mon);

        record.day_of_week = Some(Weekday::Fri);
        assert_eq!(record.weekday(), Weekday::Fri);
    }

    #[test]
    fn backtest_categories_are_intrinsically_closed() {
        assert!(TradeCategory::Backtest.intrinsically_closed());
        assert!(TradeCategory::FutureTrading.intrinsically_closed());
        assert!(!TradeCategory::Discretionary.intrinsically_closed());
    }
}
