//! Rostering domain models.
//!
//! Provides the data types that flow through a scheduling run:
//! scored candidates and the store window go in, a roster of
//! assigned shifts comes out.
//!
//! # Domain Mappings
//!
//! | u-shift | Retail | Hospitality | Clinic |
//! |---------|--------|-------------|--------|
//! | Candidate | Sales clerk availability | Waiter availability | Nurse availability |
//! | StoreWindow | Opening hours | Service hours | Consultation hours |
//! | AssignedShift | Till shift | Floor shift | Desk shift |
//! | Roster | Weekly rota | Weekly rota | Duty roster |

mod candidate;
mod day;
mod roster;
mod window;

pub use candidate::Candidate;
pub use day::Day;
pub use roster::{AssignedShift, Roster};
pub use window::StoreWindow;
