use chrono::{DateTime, Duration, Utc};

use crate::models::{TradeCategory, TradeRecord};

/// Monday, so weekday-offset math in tests stays readable.
pub fn base_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-15T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// A closed discretionary record `day_offset` days after the base time.
pub fn closed_record(id: &str, symbol: &str, pnl: f64, day_offset: i64) -> TradeRecord {
    TradeRecord {
        id: id.to_string(),
        symbol: symbol.to_string(),
        pnl,
        closed_at: base_time() + Duration::days(day_offset),
        day_of_week: None,
        entry_cost: 0.0,
        is_closed: true,
        category: TradeCategory::Discretionary,
    }
}

/// An open record — no realized exit, pnl 0.
pub fn open_record(id: &str, symbol: &str, day_offset: i64) -> TradeRecord {
    TradeRecord {
        is_closed: false,
        ..closed_record(id, symbol, 0.0, day_offset)
    }
}

/// Closed records from pnl values with auto-incrementing daily timestamps.
pub fn make_closed_records(pnls: &[f64]) -> Vec<TradeRecord> {
    pnls.iter()
        .enumerate()
        .map(|(i, &pnl)| closed_record(&format!("t{i}"), "EURUSD", pnl, i as i64))
        .collect()
}
