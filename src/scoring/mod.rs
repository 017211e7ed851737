//! Scoring providers.
//!
//! A scoring provider attaches a desirability score to each personnel
//! record before planning. The planner only needs the scores to be
//! finite and totally ordered; how they are produced is up to the
//! provider.
//!
//! # Score Convention
//! **Higher score = more preferred.**

mod linear;

pub use linear::{LinearScore, LinearWeights};

use crate::source::PersonnelRecord;
use std::fmt::Debug;

/// Produces a desirability score for a personnel record.
pub trait ScoringProvider: Send + Sync + Debug {
    /// Provider name (e.g., "precomputed", "linear").
    fn name(&self) -> &'static str;

    /// Scores one record. Higher = preferred.
    fn score(&self, record: &PersonnelRecord) -> f64;
}

/// Uses the score already attached to the record upstream.
///
/// Records without a score get 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrecomputedScore;

impl ScoringProvider for PrecomputedScore {
    fn name(&self) -> &'static str {
        "precomputed"
    }

    fn score(&self, record: &PersonnelRecord) -> f64 {
        record.score.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;

    pub(crate) fn record(score: Option<f64>) -> PersonnelRecord {
        PersonnelRecord {
            id: 1,
            store_label: "store".into(),
            personnel_name: "Ayse".into(),
            user_name: "ayse".into(),
            income: 600.0,
            invoice_count: 20.0,
            working_hours: 5.0,
            expense: 100.0,
            day: Day::Monday,
            opening_time: 36_000,
            closing_time: 75_600,
            start_time: 36_000,
            end_time: 54_000,
            simultaneous_personnel: 2,
            score,
        }
    }

    #[test]
    fn test_precomputed_score() {
        assert!((PrecomputedScore.score(&record(Some(3.25))) - 3.25).abs() < 1e-10);
        assert!((PrecomputedScore.score(&record(None)) - 0.0).abs() < 1e-10);
        assert_eq!(PrecomputedScore.name(), "precomputed");
    }
}
