//! Error types for inflammetry

use thiserror::Error;

/// Broad classification of an [`AnalysisError`].
///
/// `Type` means the input was not numeric data at all. `Value` means the
/// data was numeric but violates a domain invariant. `Io` covers file and
/// format plumbing around ingestion and persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Type,
    Value,
    Io,
}

/// Errors that can occur while validating or analysing inflammation data
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("inflammation data must be a numeric table, found {found:?} at row {row}, column {col}")]
    NotNumeric {
        row: usize,
        col: usize,
        found: String,
    },

    #[error("inflammation data must contain integer values")]
    NonIntegerValues,

    #[error("inflammation values must not be negative, found {value} at row {row}, column {col}")]
    NegativeValue { row: usize, col: usize, value: i64 },

    #[error("inflammation data must have exactly {expected} columns, found {actual}")]
    WrongColumnCount { expected: usize, actual: usize },

    #[error("inflammation table has no rows")]
    EmptyTable,

    #[error("row {row} has {actual} columns where {expected} were expected")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("failed to read CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalysisError {
    /// Classify this error into the Type/Value/Io taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::NotNumeric { .. } => ErrorKind::Type,
            AnalysisError::NonIntegerValues
            | AnalysisError::NegativeValue { .. }
            | AnalysisError::WrongColumnCount { .. }
            | AnalysisError::EmptyTable
            | AnalysisError::RaggedRow { .. } => ErrorKind::Value,
            AnalysisError::Csv(_) | AnalysisError::Json(_) | AnalysisError::Io(_) => ErrorKind::Io,
        }
    }
}
