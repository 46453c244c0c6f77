use serde::{Deserialize, Serialize};

/// Balance the dashboard equity curve starts from when no session
/// capital applies.
pub const DEFAULT_STARTING_BALANCE: f64 = 10_000.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Starting balance for equity-curve and drawdown views. Backtest
    /// contexts override this with the session's initial capital.
    pub starting_balance: f64,

    /// Default journal export file read by the report binary.
    pub export_path: String,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Config {
            starting_balance: env("STARTING_BALANCE", "10000")
                .parse()
                .unwrap_or(DEFAULT_STARTING_BALANCE),
            export_path: env("JOURNAL_EXPORT", "journal.json"),
            log_level: env("LOG_LEVEL", "info"),
        }
    }
}
