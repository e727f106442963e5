//! Error types for daybook.

use thiserror::Error;

use crate::draft::DraftField;

/// Errors that can occur in daybook operations.
#[derive(Error, Debug)]
pub enum DaybookError {
    /// A draft was submitted before every required field was filled in.
    #[error("Missing required field: {0}")]
    MissingField(DraftField),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for daybook operations.
pub type DaybookResult<T> = Result<T, DaybookError>;
