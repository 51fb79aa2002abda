//! Metrics error types.

use thiserror::Error;

use crate::storage::repository::StorageError;

/// Errors that can occur while computing training-load metrics.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Target date could not be parsed. Rejected before any data access.
    #[error("invalid date format '{input}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The raw string the caller supplied.
        input: String,
    },

    /// The workout log could not be loaded or validated.
    #[error("failed to load workout data: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for metrics operations.
pub type MetricsResult<T> = Result<T, MetricsError>;
