//! Goal Tracking
//!
//! Goal collection, milestone-driven progress, and dashboard summary.

#![warn(missing_docs)]

pub mod error;
pub mod summary;
pub mod tracker;

pub use error::{Result, TrackerError};
pub use summary::GoalSummary;
pub use tracker::{GoalTracker, TrackerConfig};
