//! Day-of-week grouping.
//!
//! Splits a run's candidates into independent per-day work sets. Input
//! order is preserved inside each day because the packer breaks score
//! ties by it.

use std::collections::BTreeMap;

use crate::models::{Candidate, Day};

/// Candidates keyed by day, in day-index order.
pub type DayGroups = BTreeMap<Day, Vec<Candidate>>;

/// Groups candidates by day of week.
///
/// Out-of-range days are kept as their own [`Day::Invalid`] bucket; it is
/// up to the caller to reject them. Never fails; empty input yields an
/// empty map.
///
/// # Example
/// ```
/// use u_shift::models::{Candidate, Day};
/// use u_shift::scheduler::group;
///
/// let groups = group(vec![
///     Candidate::new("A", Day::Monday, 600, 900),
///     Candidate::new("B", Day::Sunday, 600, 900),
///     Candidate::new("C", Day::Monday, 900, 1200),
/// ]);
/// assert_eq!(groups[&Day::Monday].len(), 2);
/// assert_eq!(groups.keys().next(), Some(&Day::Sunday));
/// ```
pub fn group(candidates: impl IntoIterator<Item = Candidate>) -> DayGroups {
    let mut groups = DayGroups::new();
    for candidate in candidates {
        groups.entry(candidate.day).or_default().push(candidate);
    }
    groups
}

/// Flattens groups back into a single sequence, day by day.
pub fn flatten(groups: DayGroups) -> Vec<Candidate> {
    groups.into_values().flatten().collect()
}
