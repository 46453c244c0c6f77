pub mod loader;
pub mod normalize;

pub use loader::{load_and_normalize, load_export, JournalExport};
pub use normalize::{normalize_all, normalize_record, NormalizedBatch, NumericWarning};
