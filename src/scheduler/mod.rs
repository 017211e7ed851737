//! Greedy shift planning and KPI evaluation.
//!
//! # Algorithm
//!
//! A scheduling run screens candidates with an [`EligibilityPolicy`],
//! groups them by day with [`group`], and fills each day's store window
//! with [`pack`]: highest score first, one contiguous slice per
//! candidate, never backtracking. It is not optimal, but it is fast and
//! fully deterministic.
//!
//! # KPI
//!
//! [`RosterKpi`] reports per-day coverage of the store window.

mod eligibility;
mod grouping;
mod kpi;
mod packer;
mod planner;

pub use eligibility::{EligibilityPolicy, Rejection};
pub use grouping::{flatten, group, DayGroups};
pub use kpi::RosterKpi;
pub use packer::{pack, rank_by_score};
pub use planner::{PlannerConfig, ShiftPlanner};
