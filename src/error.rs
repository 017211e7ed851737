//! Crate error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur while ingesting records or planning a roster.
#[derive(Debug, Error)]
pub enum ShiftError {
    #[error("invalid input: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    #[error("invalid time of day '{value}': {reason}")]
    TimeOfDay { value: String, reason: String },

    #[error("records disagree on store hours: {0}")]
    MixedStoreWindows(String),

    #[error("no records to derive store hours from")]
    NoRecords,

    #[error("malformed record JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<Vec<ValidationError>> for ShiftError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ShiftError::Validation(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type ShiftResult<T> = Result<T, ShiftError>;
