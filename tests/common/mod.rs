use std::path::PathBuf;

/// Write a journal export fixture to a unique temp file and return its
/// path. Callers clean up with `std::fs::remove_file`.
pub fn write_export(name: &str, json: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("trade-journal-{}-{}.json", std::process::id(), name));
    std::fs::write(&path, json).expect("write export fixture");
    path
}

/// An export mixing all three source shapes:
/// - two closed journal trades (+150 AAPL, -50 TSLA), one open AAPL trade
/// - one backtest trade (+30 EURUSD, labelled Friday)
/// - one future-trading trade (-10 EURUSD)
pub const MIXED_EXPORT: &str = r#"{
  "trades": [
    {
      "id": "j1",
      "symbol": "AAPL",
      "entry_price": "190.0",
      "exit_price": "205.0",
      "quantity": 10,
      "entry_date": "2024-03-04T14:30:00Z",
      "exit_date": "2024-03-05T20:00:00Z",
      "pnl": 150.0
    },
    {
      "id": "j2",
      "symbol": "TSLA",
      "entry_price": 250.0,
      "exit_price": 245.0,
      "quantity": "10",
      "entry_date": "2024-03-06T14:30:00Z",
      "exit_date": "2024-03-07T20:00:00Z",
      "pnl": "-50"
    },
    {
      "id": "j3",
      "symbol": "AAPL",
      "entry_price": 200.0,
      "exit_price": null,
      "quantity": 5,
      "entry_date": "2024-03-08T14:30:00Z",
      "exit_date": null,
      "pnl": 0
    }
  ],
  "backtest_trades": [
    {
      "id": "b1",
      "pair": "EURUSD",
      "trade_date": "2024-03-08",
      "pnl": 30.0,
      "day_of_week": "Friday"
    }
  ],
  "future_trades": [
    {
      "id": "f1",
      "pair": "EURUSD",
      "trade_date": "2024-03-11",
      "pnl": -10.0
    }
  ]
}"#;
