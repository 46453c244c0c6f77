use thiserror::Error;

#[derive(Debug, Error)]
pub enum JournalError {
    /// A raw row is structurally unusable: no parseable date at all.
    /// Surfaced to the caller instead of silently skipping the row.
    #[error("record {id}: missing or unparseable {field}")]
    MalformedRecord { id: String, field: &'static str },

    #[error("failed to read journal export {path}")]
    ExportIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse journal export {path}")]
    ExportParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
