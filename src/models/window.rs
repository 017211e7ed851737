//! Store opening window.
//!
//! # Time Model
//! Times are offsets from midnight in a single resolution chosen by the
//! record source (seconds for JSON ingestion). Intervals are half-open:
//! `[opening, closing)`.

use serde::{Deserialize, Serialize};

/// Opening hours of the single store in a scheduling run.
///
/// Invariant (checked by [`validate_input`](crate::validation::validate_input)):
/// `opening < closing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreWindow {
    /// Opening time (inclusive).
    pub opening: i64,
    /// Closing time (exclusive).
    pub closing: i64,
}

impl StoreWindow {
    /// Creates a store window.
    pub fn new(opening: i64, closing: i64) -> Self {
        Self { opening, closing }
    }

    /// Total open duration.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.closing - self.opening
    }

    /// Whether `opening < closing`.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.opening < self.closing
    }

    /// Whether `[start, end)` lies inside the window.
    #[inline]
    pub fn contains_interval(&self, start: i64, end: i64) -> bool {
        start >= self.opening && end <= self.closing
    }

    /// Largest working time a candidate may declare, as a fraction of the
    /// open duration.
    pub fn working_time_cap(&self, ratio: f64) -> f64 {
        self.duration() as f64 * ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_basics() {
        let w = StoreWindow::new(600, 1260);
        assert_eq!(w.duration(), 660);
        assert!(w.is_well_formed());
        assert!((w.working_time_cap(0.5) - 330.0).abs() < 1e-10);
    }

    #[test]
    fn test_contains_interval() {
        let w = StoreWindow::new(600, 1260);
        assert!(w.contains_interval(600, 1260));
        assert!(w.contains_interval(700, 800));
        assert!(!w.contains_interval(50, 80));
        assert!(!w.contains_interval(1200, 1300));
    }

    #[test]
    fn test_inverted_window() {
        assert!(!StoreWindow::new(900, 900).is_well_formed());
        assert!(!StoreWindow::new(1000, 900).is_well_formed());
    }
}
