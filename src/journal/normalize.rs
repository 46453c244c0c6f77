use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde_json::Value;
use tracing::warn;

use crate::error::JournalError;
use crate::models::{RawBacktestTrade, RawJournalTrade, RawRecord, TradeCategory, TradeRecord};

/// A numeric field that could not be coerced. The value was substituted
/// with zero and the batch continued; callers may surface these as
/// data-quality flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericWarning {
    pub record_id: String,
    pub field: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct NormalizedBatch {
    pub records: Vec<TradeRecord>,
    pub warnings: Vec<NumericWarning>,
}

/// Normalize a batch of raw rows into canonical records.
///
/// Numeric garbage inside a row is recovered locally (zero + warning);
/// a row with no usable date aborts the whole batch with
/// `MalformedRecord`.
pub fn normalize_all(rows: &[RawRecord]) -> Result<NormalizedBatch, JournalError> {
    let mut batch = NormalizedBatch {
        records: Vec::with_capacity(rows.len()),
        warnings: Vec::new(),
    };
    for row in rows {
        let record = normalize_record(row, &mut batch.warnings)?;
        batch.records.push(record);
    }
    Ok(batch)
}

pub fn normalize_record(
    row: &RawRecord,
    warnings: &mut Vec<NumericWarning>,
) -> Result<TradeRecord, JournalError> {
    match row {
        RawRecord::Journal(t) => normalize_journal(t, warnings),
        RawRecord::Backtest(t) => normalize_backtest(t, TradeCategory::Backtest, warnings),
        RawRecord::FutureTrading(t) => {
            normalize_backtest(t, TradeCategory::FutureTrading, warnings)
        }
    }
}

fn normalize_journal(
    t: &RawJournalTrade,
    warnings: &mut Vec<NumericWarning>,
) -> Result<TradeRecord, JournalError> {
    let entry_price = numeric_or_zero(&t.entry_price, &t.id, "entry_price", warnings);
    let exit_price = numeric_or_zero(&t.exit_price, &t.id, "exit_price", warnings);
    let quantity = numeric_or_zero(&t.quantity, &t.id, "quantity", warnings);
    let pnl = numeric_or_zero(&t.pnl, &t.id, "pnl", warnings);

    // A journal row is closed once it has a real exit fill.
    let is_closed = exit_price > 0.0;

    let exit_at = t.exit_date.as_deref().and_then(parse_date);
    let entry_at = t.entry_date.as_deref().and_then(parse_date);
    let closed_at = exit_at
        .or(entry_at)
        .ok_or_else(|| JournalError::MalformedRecord {
            id: t.id.clone(),
            field: "entry_date",
        })?;

    Ok(TradeRecord {
        id: t.id.clone(),
        symbol: t.symbol.clone(),
        pnl,
        closed_at,
        day_of_week: None,
        entry_cost: entry_price * quantity,
        is_closed,
        category: TradeCategory::Discretionary,
    })
}

fn normalize_backtest(
    t: &RawBacktestTrade,
    category: TradeCategory,
    warnings: &mut Vec<NumericWarning>,
) -> Result<TradeRecord, JournalError> {
    let pnl = numeric_or_zero(&t.pnl, &t.id, "pnl", warnings);

    let closed_at = t
        .trade_date
        .as_deref()
        .and_then(parse_date)
        .ok_or_else(|| JournalError::MalformedRecord {
            id: t.id.clone(),
            field: "trade_date",
        })?;

    // An unrecognized label falls back to deriving from the trade date.
    let day_of_week = t
        .day_of_week
        .as_deref()
        .and_then(|s| s.parse::<Weekday>().ok());

    Ok(TradeRecord {
        id: t.id.clone(),
        symbol: t.pair.clone(),
        pnl,
        closed_at,
        day_of_week,
        entry_cost: 0.0,
        is_closed: category.intrinsically_closed(),
        category,
    })
}

/// Coerce a backend numeric column (number or stringified number) to f64.
fn coerce_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Absent fields are ordinary (open trades have no exit price) and coerce
/// silently; present-but-unparseable values are flagged.
fn numeric_or_zero(
    value: &Value,
    id: &str,
    field: &'static str,
    warnings: &mut Vec<NumericWarning>,
) -> f64 {
    match value {
        Value::Null => 0.0,
        other => coerce_numeric(other).unwrap_or_else(|| {
            warn!("record {id}: non-numeric {field} substituted with 0");
            warnings.push(NumericWarning {
                record_id: id.to_string(),
                field,
            });
            0.0
        }),
    }
}

/// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates (midnight UTC).
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    raw.trim()
        .parse::<NaiveDate>()
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc))
}
