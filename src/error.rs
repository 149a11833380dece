// Error taxonomy for the record store and its codecs

use crate::record::RecordId;
use thiserror::Error;

/// Why a set of raw fields could not become a [`Record`](crate::Record)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid date {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("exercise name cannot be empty")]
    EmptyExercise,

    #[error("invalid weight {0:?} (expected a number)")]
    InvalidWeight(String),

    #[error("weight cannot be negative: {0}")]
    NegativeWeight(f64),

    #[error("invalid reps {0:?} (expected a whole number)")]
    InvalidReps(String),

    #[error("reps must be at least 1, got {0}")]
    NonPositiveReps(i64),
}

/// Errors raised by [`RecordStore`](crate::RecordStore) mutations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("record not found: {0}")]
    NotFound(RecordId),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Errors raised while saving, loading, exporting or importing
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("schema error: {0}")]
    Schema(String),

    #[error("header mismatch: expected {expected:?}, found {found:?}")]
    HeaderMismatch { expected: String, found: String },

    /// `index` is the 0-based array position for JSON and the 1-based data row for CSV
    #[error("record {index}: {reason}")]
    Record { index: usize, reason: ValidationError },

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

impl PersistenceError {
    pub(crate) fn schema(msg: impl Into<String>) -> Self {
        PersistenceError::Schema(msg.into())
    }
}
