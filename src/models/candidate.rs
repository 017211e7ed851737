//! Scored candidate model.
//!
//! A candidate is one person offering availability on one day of the
//! week, already carrying a desirability score from a
//! [`ScoringProvider`](crate::scoring::ScoringProvider).

use serde::{Deserialize, Serialize};

use super::Day;

/// A scored candidate for one day.
///
/// # Time Representation
/// `start`/`end` are offsets from midnight in the same resolution as the
/// [`StoreWindow`](super::StoreWindow) of the run. `working_time` is a
/// duration in that same resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Identity used on assigned shifts.
    pub name: String,
    /// Day this availability applies to.
    pub day: Day,
    /// Availability start (inclusive).
    pub start: i64,
    /// Availability end (exclusive).
    pub end: i64,
    /// Desirability score (higher = preferred).
    pub score: f64,
    /// Declared working time, checked against the store's working-time cap.
    pub working_time: i64,
}

impl Candidate {
    /// Creates a candidate with score 0 and no declared working time.
    pub fn new(name: impl Into<String>, day: Day, start: i64, end: i64) -> Self {
        Self {
            name: name.into(),
            day,
            start,
            end,
            score: 0.0,
            working_time: 0,
        }
    }

    /// Sets the score.
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    /// Sets the declared working time.
    pub fn with_working_time(mut self, working_time: i64) -> Self {
        self.working_time = working_time;
        self
    }

    /// Length of the availability window.
    #[inline]
    pub fn availability(&self) -> i64 {
        self.end - self.start
    }
}
