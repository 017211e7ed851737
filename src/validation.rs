//! Input validation for scheduling runs.
//!
//! Checks the preconditions the packer relies on before any shift is
//! produced. Detects:
//! - Inverted or empty store windows
//! - Inverted candidate availability
//! - Candidates without an identity
//! - Non-finite scores (scores must be totally ordered)
//! - Negative working time
//! - Day indices outside `0..=6`
//!
//! Every problem is reported, not just the first one.

use thiserror::Error;

use crate::models::{Candidate, StoreWindow};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Store window has `opening >= closing`.
    InvalidStoreWindow,
    /// Candidate availability has `end <= start`.
    InvertedAvailability,
    /// Candidate name is empty.
    EmptyName,
    /// Score is NaN or infinite.
    NonFiniteScore,
    /// Declared working time is negative.
    NegativeWorkingTime,
    /// Day index outside the week.
    InvalidDay,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input of a scheduling run.
///
/// Checks:
/// 1. The store window is well formed
/// 2. Every candidate has a name
/// 3. Every availability window has `start < end`
/// 4. Every score is finite
/// 5. No working time is negative
/// 6. Every day index is a real day of the week
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(candidates: &[Candidate], window: &StoreWindow) -> ValidationResult {
    let mut errors = Vec::new();

    if !window.is_well_formed() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidStoreWindow,
            format!(
                "Store window opens at {} but closes at {}",
                window.opening, window.closing
            ),
        ));
    }

    for (i, c) in candidates.iter().enumerate() {
        if c.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Candidate #{i} has no name"),
            ));
        }

        if c.end <= c.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedAvailability,
                format!(
                    "Candidate '{}' is available from {} to {}",
                    c.name, c.start, c.end
                ),
            ));
        }

        if !c.score.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFiniteScore,
                format!("Candidate '{}' has non-finite score {}", c.name, c.score),
            ));
        }

        if c.working_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeWorkingTime,
                format!(
                    "Candidate '{}' declares negative working time {}",
                    c.name, c.working_time
                ),
            ));
        }

        if !c.day.is_valid() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDay,
                format!(
                    "Candidate '{}' has day index {} outside 0..=6",
                    c.name,
                    c.day.index()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
