//! Roster quality metrics (KPIs).
//!
//! Computes staffing indicators from a completed roster and the store
//! window it was planned against.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Coverage (per day) | staffed time / open duration |
//! | Uncovered (per day) | open duration - staffed time |
//! | Avg Coverage | Mean coverage over the evaluated days |
//! | Fully Covered Days | Days with coverage 1.0 |
//! | Shifts per Person | Number of shifts handed to each candidate |

use std::collections::{BTreeMap, HashMap};

use crate::models::{Day, Roster, StoreWindow};

/// Roster performance indicators.
///
/// Time values use the resolution of the store window.
#[derive(Debug, Clone)]
pub struct RosterKpi {
    /// Fraction of opening hours staffed, per evaluated day (0.0..1.0).
    pub coverage_by_day: BTreeMap<Day, f64>,
    /// Unstaffed opening time per evaluated day.
    pub uncovered_by_day: BTreeMap<Day, i64>,
    /// Mean of `coverage_by_day`.
    pub avg_coverage: f64,
    /// Days whose opening hours are fully staffed.
    pub fully_covered_days: Vec<Day>,
    /// Shift count per candidate.
    pub shifts_by_person: HashMap<String, usize>,
}

impl RosterKpi {
    /// Computes KPIs for `days` (days without shifts count as 0% covered).
    ///
    /// # Arguments
    /// * `roster` - The planned roster.
    /// * `window` - The store window the roster was planned against.
    /// * `days` - Days to evaluate, e.g. [`Day::ALL`].
    pub fn calculate(roster: &Roster, window: &StoreWindow, days: &[Day]) -> Self {
        let open = window.duration();
        let mut coverage_by_day = BTreeMap::new();
        let mut uncovered_by_day = BTreeMap::new();
        let mut fully_covered_days = Vec::new();

        for &day in days {
            let covered = roster.covered_time(day).min(open);
            let coverage = if open > 0 {
                covered as f64 / open as f64
            } else {
                0.0
            };
            if open > 0 && covered == open {
                fully_covered_days.push(day);
            }
            coverage_by_day.insert(day, coverage);
            uncovered_by_day.insert(day, open - covered);
        }
        fully_covered_days.sort();
        fully_covered_days.dedup();

        let avg_coverage = if coverage_by_day.is_empty() {
            0.0
        } else {
            coverage_by_day.values().sum::<f64>() / coverage_by_day.len() as f64
        };

        let mut shifts_by_person: HashMap<String, usize> = HashMap::new();
        for s in &roster.shifts {
            *shifts_by_person.entry(s.name.clone()).or_insert(0) += 1;
        }

        Self {
            coverage_by_day,
            uncovered_by_day,
            avg_coverage,
            fully_covered_days,
            shifts_by_person,
        }
    }

    /// Computes KPIs over the whole week, so days without shifts pull the
    /// average down.
    pub fn for_week(roster: &Roster, window: &StoreWindow) -> Self {
        Self::calculate(roster, window, &Day::ALL)
    }

    /// Whether every evaluated day reaches `min_coverage`.
    pub fn meets_threshold(&self, min_coverage: f64) -> bool {
        self.coverage_by_day.values().all(|&c| c >= min_coverage)
    }
}
