//! Selection-time eligibility filter.
//!
//! Candidates are screened against the store window before they reach
//! the packer. A candidate is eligible iff:
//! - its declared working time does not exceed `max_working_ratio` of the
//!   store's open duration, AND
//! - its availability window lies inside the store window (when
//!   `require_containment` is set).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::models::{Candidate, Day, StoreWindow};

/// Why a candidate was screened out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Declared working time is above the store's cap.
    ExceedsWorkingTime,
    /// Availability starts before opening or ends after closing.
    OutsideStoreHours,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::ExceedsWorkingTime => f.write_str("working time exceeds store cap"),
            Rejection::OutsideStoreHours => f.write_str("availability outside store hours"),
        }
    }
}

/// Eligibility rules applied before packing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EligibilityPolicy {
    /// Working-time cap as a fraction of the store's open duration.
    pub max_working_ratio: f64,
    /// Reject availability not fully inside the store window.
    pub require_containment: bool,
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            max_working_ratio: 0.5,
            require_containment: true,
        }
    }
}

impl EligibilityPolicy {
    /// Creates the default policy (half the open duration, containment on).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the working-time ratio.
    pub fn with_max_working_ratio(mut self, ratio: f64) -> Self {
        self.max_working_ratio = ratio;
        self
    }

    /// Enables or disables the containment check.
    pub fn with_containment(mut self, required: bool) -> Self {
        self.require_containment = required;
        self
    }

    /// Checks one candidate against the window.
    pub fn check(&self, candidate: &Candidate, window: &StoreWindow) -> Result<(), Rejection> {
        if candidate.working_time as f64 > window.working_time_cap(self.max_working_ratio) {
            return Err(Rejection::ExceedsWorkingTime);
        }
        if self.require_containment && !window.contains_interval(candidate.start, candidate.end) {
            return Err(Rejection::OutsideStoreHours);
        }
        Ok(())
    }

    #[inline]
    pub fn is_eligible(&self, candidate: &Candidate, window: &StoreWindow) -> bool {
        self.check(candidate, window).is_ok()
    }

    /// Splits candidates into eligible ones (input order kept) and
    /// rejected ones with their reason.
    pub fn partition(
        &self,
        candidates: Vec<Candidate>,
        window: &StoreWindow,
    ) -> (Vec<Candidate>, Vec<(Candidate, Rejection)>) {
        let mut eligible = Vec::with_capacity(candidates.len());
        let mut rejected = Vec::new();
        for c in candidates {
            match self.check(&c, window) {
                Ok(()) => eligible.push(c),
                Err(reason) => rejected.push((c, reason)),
            }
        }
        (eligible, rejected)
    }

    /// Highest-scoring eligible candidate for `day`.
    ///
    /// Ties go to the candidate seen first. Returns `None` if no candidate
    /// for that day passes the filter.
    pub fn best_for_day<'a>(
        &self,
        candidates: &'a [Candidate],
        day: Day,
        window: &StoreWindow,
    ) -> Option<&'a Candidate> {
        let mut best: Option<&'a Candidate> = None;
        for c in candidates
            .iter()
            .filter(|c| c.day == day && self.is_eligible(c, window))
        {
            match best {
                Some(b) if c.score.partial_cmp(&b.score) != Some(Ordering::Greater) => {}
                _ => best = Some(c),
            }
        }
        best
    }
}
