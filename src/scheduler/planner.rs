//! Scheduling run: validation, eligibility, grouping, packing.
//!
//! # Algorithm
//!
//! 1. Validate the whole input. Any problem aborts the run.
//! 2. Screen out candidates the [`EligibilityPolicy`] rejects.
//! 3. Group the rest by day.
//! 4. Pack each day independently, in day-index order.
//! 5. Concatenate the per-day shifts into a [`Roster`].

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{group, pack, EligibilityPolicy};
use crate::error::ShiftResult;
use crate::models::{Candidate, Roster, StoreWindow};
use crate::validation::validate_input;

/// Tunables of a scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Pre-packing filter.
    pub eligibility: EligibilityPolicy,
}

impl PlannerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the eligibility policy.
    pub fn with_eligibility(mut self, eligibility: EligibilityPolicy) -> Self {
        self.eligibility = eligibility;
        self
    }

    /// Sets the working-time ratio of the eligibility policy.
    pub fn with_max_working_ratio(mut self, ratio: f64) -> Self {
        self.eligibility.max_working_ratio = ratio;
        self
    }
}

/// Builds a roster for one store over one week.
///
/// # Example
///
/// ```
/// use u_shift::models::{Candidate, Day, StoreWindow};
/// use u_shift::scheduler::ShiftPlanner;
///
/// let window = StoreWindow::new(600, 1260);
/// let candidates = vec![
///     Candidate::new("A", Day::Saturday, 600, 900).with_score(9.0),
///     Candidate::new("B", Day::Saturday, 900, 1260).with_score(3.0),
///     Candidate::new("C", Day::Monday, 50, 80).with_score(99.0),
/// ];
///
/// let roster = ShiftPlanner::new().plan(candidates, &window).unwrap();
/// assert_eq!(roster.shift_count(), 2);
/// assert!(roster.shifts_for("C").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShiftPlanner {
    config: PlannerConfig,
}

impl ShiftPlanner {
    /// Creates a planner with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a planner with the given configuration.
    pub fn from_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Runs one scheduling pass.
    ///
    /// # Errors
    /// [`ShiftError::Validation`](crate::error::ShiftError::Validation) with
    /// every detected problem if the input breaks a precondition. No shift
    /// is produced in that case.
    pub fn plan(&self, candidates: Vec<Candidate>, window: &StoreWindow) -> ShiftResult<Roster> {
        validate_input(&candidates, window)?;

        let total = candidates.len();
        let (eligible, rejected) = self.config.eligibility.partition(candidates, window);
        for (c, reason) in &rejected {
            warn!(name = %c.name, day = %c.day, %reason, "candidate screened out");
        }

        let mut roster = Roster::new();
        for (day, day_candidates) in group(eligible) {
            roster.extend_day(pack(day, &day_candidates, window));
        }

        info!(
            candidates = total,
            rejected = rejected.len(),
            shifts = roster.shift_count(),
            days = roster.days().len(),
            "roster planned"
        );
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShiftError;
    use crate::models::Day;
    use crate::validation::ValidationErrorKind;

    fn window() -> StoreWindow {
        StoreWindow::new(600, 1260)
    }

    #[test]
    fn test_plan_orders_by_day_then_start() {
        let candidates = vec![
            Candidate::new("S1", Day::Saturday, 600, 900).with_score(1.0),
            Candidate::new("M1", Day::Monday, 600, 1000).with_score(5.0),
            Candidate::new("S2", Day::Saturday, 600, 1260).with_score(2.0),
            Candidate::new("M2", Day::Monday, 900, 1260).with_score(4.0),
        ];
        let roster = ShiftPlanner::new().plan(candidates, &window()).unwrap();
        let got: Vec<_> = roster
            .shifts
            .iter()
            .map(|s| (s.day, s.name.as_str(), s.start, s.end))
            .collect();
        assert_eq!(
            got,
            vec![
                (Day::Monday, "M1", 600, 1000),
                (Day::Monday, "M2", 1000, 1260),
                (Day::Saturday, "S2", 600, 1260),
            ]
        );
    }

    #[test]
    fn test_out_of_hours_candidate_filtered() {
        let candidates = vec![
            Candidate::new("early", Day::Friday, 50, 80).with_score(10.0),
            Candidate::new("A", Day::Friday, 600, 900).with_score(1.0),
        ];
        let roster = ShiftPlanner::new().plan(candidates, &window()).unwrap();
        assert_eq!(roster.shift_count(), 1);
        assert!(roster.shifts_for("early").is_empty());
    }

    #[test]
    fn test_working_time_cap_filtered() {
        let candidates = vec![
            Candidate::new("tired", Day::Friday, 600, 1260)
                .with_score(10.0)
                .with_working_time(400),
            Candidate::new("A", Day::Friday, 600, 900)
                .with_score(1.0)
                .with_working_time(300),
        ];
        let roster = ShiftPlanner::new().plan(candidates.clone(), &window()).unwrap();
        assert_eq!(roster.shifts_for("tired").len(), 0);
        assert_eq!(roster.shifts_for("A").len(), 1);

        let lenient = ShiftPlanner::from_config(PlannerConfig::new().with_max_working_ratio(1.0));
        let roster = lenient.plan(candidates, &window()).unwrap();
        assert_eq!(roster.shifts_for("tired").len(), 1);
    }

    #[test]
    fn test_cap_checks_declared_time_not_shift_length() {
        // cap = 330; the shift itself spans the whole 660-long window.
        let candidates = vec![Candidate::new("A", Day::Sunday, 600, 1260)
            .with_score(1.0)
            .with_working_time(300)];
        let roster = ShiftPlanner::new().plan(candidates, &window()).unwrap();
        assert_eq!(roster.shift_count(), 1);
        let shift = &roster.shifts[0];
        assert_eq!((shift.start, shift.end), (600, 1260));
        assert!(shift.duration() as f64 > window().working_time_cap(0.5));
    }

    #[test]
    fn test_invalid_day_fails_whole_run() {
        let candidates = vec![
            Candidate::new("A", Day::Monday, 600, 900),
            Candidate::new("B", Day::from_index(7), 600, 900),
        ];
        let err = ShiftPlanner::new().plan(candidates, &window()).unwrap_err();
        match err {
            ShiftError::Validation(errors) => {
                assert!(errors
                    .iter()
                    .any(|e| e.kind == ValidationErrorKind::InvalidDay));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_inverted_window_rejected() {
        let err = ShiftPlanner::new()
            .plan(Vec::new(), &StoreWindow::new(1260, 600))
            .unwrap_err();
        assert!(matches!(err, ShiftError::Validation(_)));
    }

    #[test]
    fn test_empty_input_gives_empty_roster() {
        let roster = ShiftPlanner::new().plan(Vec::new(), &window()).unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn test_config_serde_defaults() {
        let cfg: PlannerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, PlannerConfig::default());

        let cfg: PlannerConfig =
            serde_json::from_str(r#"{"eligibility":{"max_working_ratio":0.75}}"#).unwrap();
        assert!((cfg.eligibility.max_working_ratio - 0.75).abs() < 1e-10);
        assert!(cfg.eligibility.require_containment);
    }
}
