//! Roster (solution) model.
//!
//! A roster is the flattened output of a scheduling run: every assigned
//! shift, grouped implicitly by day and ordered by day index, then by
//! start time within a day.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Day;

/// A shift handed to one candidate.
///
/// Invariant: `start < end`, and `[start, end)` lies inside the store
/// window of the run that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedShift {
    /// Candidate identity.
    pub name: String,
    /// Day the shift is worked.
    pub day: Day,
    /// Shift start (inclusive).
    pub start: i64,
    /// Shift end (exclusive).
    pub end: i64,
}

impl AssignedShift {
    /// Creates a shift.
    pub fn new(name: impl Into<String>, day: Day, start: i64, end: i64) -> Self {
        Self {
            name: name.into(),
            day,
            start,
            end,
        }
    }

    /// Shift length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether two shifts on the same day intersect.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

/// All shifts produced by one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// Shifts in day-index order, then start-time order.
    pub shifts: Vec<AssignedShift>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the shifts of one day.
    pub fn extend_day(&mut self, shifts: impl IntoIterator<Item = AssignedShift>) {
        self.shifts.extend(shifts);
    }

    /// Shifts worked on `day`, in start order.
    pub fn shifts_for_day(&self, day: Day) -> Vec<&AssignedShift> {
        self.shifts.iter().filter(|s| s.day == day).collect()
    }

    /// Shifts handed to `name`.
    pub fn shifts_for(&self, name: &str) -> Vec<&AssignedShift> {
        self.shifts.iter().filter(|s| s.name == name).collect()
    }

    /// Days that received at least one shift.
    pub fn days(&self) -> Vec<Day> {
        self.shifts
            .iter()
            .map(|s| s.day)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Total staffed time on `day`.
    pub fn covered_time(&self, day: Day) -> i64 {
        self.shifts_for_day(day).iter().map(|s| s.duration()).sum()
    }

    /// Number of shifts.
    pub fn shift_count(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Roster {
        let mut r = Roster::new();
        r.extend_day(vec![
            AssignedShift::new("ayse", Day::Monday, 600, 900),
            AssignedShift::new("mehmet", Day::Monday, 900, 1260),
        ]);
        r.extend_day(vec![AssignedShift::new("ayse", Day::Saturday, 600, 840)]);
        r
    }

    #[test]
    fn test_shift_duration_and_overlap() {
        let a = AssignedShift::new("a", Day::Monday, 600, 900);
        let b = AssignedShift::new("b", Day::Monday, 899, 1000);
        let c = AssignedShift::new("c", Day::Monday, 900, 1000);
        let d = AssignedShift::new("d", Day::Tuesday, 600, 900);
        assert_eq!(a.duration(), 300);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c)); // half-open
        assert!(!a.overlaps(&d)); // different day
    }

    #[test]
    fn test_roster_queries() {
        let r = sample_roster();
        assert_eq!(r.shift_count(), 3);
        assert_eq!(r.shifts_for_day(Day::Monday).len(), 2);
        assert_eq!(r.shifts_for("ayse").len(), 2);
        assert_eq!(r.days(), vec![Day::Monday, Day::Saturday]);
        assert_eq!(r.covered_time(Day::Monday), 660);
        assert_eq!(r.covered_time(Day::Sunday), 0);
    }

    #[test]
    fn test_empty_roster() {
        let r = Roster::new();
        assert!(r.is_empty());
        assert!(r.days().is_empty());
    }
}
