use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::JournalError;
use crate::journal::normalize::{normalize_all, NormalizedBatch};
use crate::models::{RawBacktestTrade, RawJournalTrade, RawRecord};

/// On-disk journal export: one JSON object with one array per source
/// table. Absent arrays are treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JournalExport {
    #[serde(default)]
    pub trades: Vec<RawJournalTrade>,
    #[serde(default)]
    pub backtest_trades: Vec<RawBacktestTrade>,
    #[serde(default)]
    pub future_trades: Vec<RawBacktestTrade>,
}

impl JournalExport {
    pub fn into_raw_records(self) -> Vec<RawRecord> {
        let mut out =
            Vec::with_capacity(self.trades.len() + self.backtest_trades.len() + self.future_trades.len());
        out.extend(self.trades.into_iter().map(RawRecord::Journal));
        out.extend(self.backtest_trades.into_iter().map(RawRecord::Backtest));
        out.extend(self.future_trades.into_iter().map(RawRecord::FutureTrading));
        out
    }
}

pub fn load_export(path: &Path) -> Result<JournalExport, JournalError> {
    let content = std::fs::read_to_string(path).map_err(|source| JournalError::ExportIo {
        path: path.display().to_string(),
        source,
    })?;
    let export: JournalExport =
        serde_json::from_str(&content).map_err(|source| JournalError::ExportParse {
            path: path.display().to_string(),
            source,
        })?;
    info!(
        "Loaded export {}: {} journal trades, {} backtest, {} future-trading",
        path.display(),
        export.trades.len(),
        export.backtest_trades.len(),
        export.future_trades.len()
    );
    Ok(export)
}

/// Read an export file and normalize every row in one go.
pub fn load_and_normalize(path: &Path) -> Result<NormalizedBatch, JournalError> {
    let export = load_export(path)?;
    let raw = export.into_raw_records();
    normalize_all(&raw)
}
