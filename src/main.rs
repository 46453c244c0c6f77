use std::path::Path;

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

use trade_journal::analytics::JournalReport;
use trade_journal::config::Config;
use trade_journal::journal::loader;

fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    // Parse CLI args or use defaults
    let args: Vec<String> = std::env::args().collect();

    let export_path = args.get(1).cloned().unwrap_or_else(|| cfg.export_path.clone());

    let starting_balance: f64 = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(cfg.starting_balance);

    let batch = loader::load_and_normalize(Path::new(&export_path))?;
    tracing::info!(
        "Normalized {} records ({} numeric warnings)",
        batch.records.len(),
        batch.warnings.len()
    );

    let report = JournalReport::build(&batch.records, starting_balance);
    report.print_summary();

    Ok(())
}
