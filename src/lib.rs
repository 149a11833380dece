// Trainlog - training journal record store with JSON persistence and CSV import/export

mod atomic;
pub mod config;
pub mod csv_io;
pub mod error;
pub mod json_io;
pub mod progress;
pub mod query;
pub mod record;
pub mod store;
pub mod validate;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use config::Config;
pub use csv_io::{export_csv, import_csv};
pub use error::{PersistenceError, StoreError, ValidationError};
pub use json_io::{load_json, load_json_or_empty, save_json};
pub use progress::{ProgressPoint, exercise_names, series_for};
pub use query::{Query, SortOrder, View};
pub use record::{RawFields, Record, RecordId, StoredRecord};
pub use store::RecordStore;
pub use validate::validate;
