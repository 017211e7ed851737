//! Greedy per-day shift packer.
//!
//! # Algorithm
//!
//! 1. Stable-sort the day's candidates by score, descending. Ties keep
//!    input order.
//! 2. Start a cursor at the store's opening time.
//! 3. For each candidate in that order:
//!    - skip it if the cursor has already reached its availability end;
//!    - otherwise hand it `[cursor, min(closing, availability end))` and
//!      advance the cursor to the shift end;
//!    - stop once the cursor reaches closing time.
//!
//! This is a single-pass interval-covering heuristic. It never
//! backtracks, so a high-scoring candidate with a short window can leave
//! less total coverage than a different choice would have.
//!
//! # Complexity
//! O(n log n) for n candidates on the day.

use std::cmp::Ordering;

use tracing::debug;

use crate::models::{AssignedShift, Candidate, Day, StoreWindow};

/// Cursor state of one packing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PackState {
    /// Next shift starts at `cursor`.
    Filling { cursor: i64 },
    /// The store window is fully covered.
    DayComplete,
}

impl PackState {
    fn advance(cursor: i64, window: &StoreWindow) -> Self {
        if cursor >= window.closing {
            PackState::DayComplete
        } else {
            PackState::Filling { cursor }
        }
    }
}

/// Returns candidate indices ordered by score descending, ties in input order.
pub fn rank_by_score(candidates: &[Candidate]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..candidates.len()).collect();
    // Vec::sort_by is stable.
    indices.sort_by(|&a, &b| {
        candidates[b]
            .score
            .partial_cmp(&candidates[a].score)
            .unwrap_or(Ordering::Equal)
    });
    indices
}

/// Packs one day's candidates into consecutive shifts.
///
/// Candidates are expected to have passed the
/// [`EligibilityPolicy`](super::EligibilityPolicy) already, and the window
/// to be well formed. Returned shifts are in start-time order.
///
/// # Example
/// ```
/// use u_shift::models::{Candidate, Day, StoreWindow};
/// use u_shift::scheduler::pack;
///
/// let window = StoreWindow::new(600, 1260);
/// let candidates = vec![
///     Candidate::new("B", Day::Saturday, 900, 1260).with_score(3.0),
///     Candidate::new("A", Day::Saturday, 600, 900).with_score(9.0),
/// ];
/// let shifts = pack(Day::Saturday, &candidates, &window);
/// assert_eq!(shifts.len(), 2);
/// assert_eq!((shifts[0].name.as_str(), shifts[0].start, shifts[0].end), ("A", 600, 900));
/// assert_eq!((shifts[1].name.as_str(), shifts[1].start, shifts[1].end), ("B", 900, 1260));
/// ```
pub fn pack(day: Day, candidates: &[Candidate], window: &StoreWindow) -> Vec<AssignedShift> {
    let mut shifts = Vec::new();
    let mut state = PackState::advance(window.opening, window);

    for idx in rank_by_score(candidates) {
        let cursor = match state {
            PackState::Filling { cursor } => cursor,
            PackState::DayComplete => break,
        };
        let candidate = &candidates[idx];

        if cursor >= candidate.end {
            debug!(
                %day,
                name = %candidate.name,
                cursor,
                available_until = candidate.end,
                "candidate availability already elapsed, skipping"
            );
            continue;
        }

        let end = window.closing.min(candidate.end);
        debug!(%day, name = %candidate.name, start = cursor, end, "assigned shift");
        shifts.push(AssignedShift::new(&candidate.name, day, cursor, end));
        state = PackState::advance(end, window);
    }

    debug!(
        %day,
        shifts = shifts.len(),
        complete = state == PackState::DayComplete,
        "day packed"
    );
    shifts
}
