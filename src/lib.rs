//! Store shift rostering for the U-Engine ecosystem.
//!
//! Assigns personnel to shifts inside a store's opening hours, using a
//! desirability score per candidate per day. Each day is filled greedily:
//! highest score first, one contiguous slice per candidate, until the
//! store is covered or the candidates run out.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Candidate`, `Day`, `StoreWindow`,
//!   `AssignedShift`, `Roster`
//! - **`validation`**: Input precondition checks (windows, scores, day range)
//! - **`scheduler`**: Eligibility filter, day grouping, greedy packer,
//!   planner and coverage KPIs
//! - **`scoring`**: Scoring providers that attach scores to records
//! - **`source`**: JSON ingestion of personnel availability records
//! - **`report`**: Console and JSON rendering of a roster
//!
//! # Example
//!
//! ```
//! use u_shift::scheduler::ShiftPlanner;
//! use u_shift::scoring::PrecomputedScore;
//! use u_shift::source::RecordSource;
//!
//! let source = RecordSource::from_json(r#"[
//!     {"username": "ayse", "days": 6, "openingtime": "10:00:00Z", "closingtime": "21:00:00Z",
//!      "starttime": "10:00:00Z", "endtime": "15:00:00Z", "workinghours": 5, "score": 2.0}
//! ]"#).unwrap();
//!
//! let window = source.store_window().unwrap();
//! let roster = ShiftPlanner::new()
//!     .plan(source.candidates(&PrecomputedScore), &window)
//!     .unwrap();
//! assert_eq!(roster.shift_count(), 1);
//! ```
//!
//! # Architecture
//!
//! Scores are produced upstream and never recomputed by the planner.
//! The crate holds no global state; a run is a pure function of its input.

pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod scoring;
pub mod source;
pub mod validation;

pub use error::{ShiftError, ShiftResult};
