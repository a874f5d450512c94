//! CareerPath core data models.
//!
//! This crate defines the records shared by the goal tracker and the
//! skill assessment: goals with their milestones, assessment questions,
//! and the qualitative levels derived from scores.

#![warn(missing_docs)]

// Core identities
mod id;

// Goal tracking
mod goal;

// Skill assessment
mod question;

// Shared arithmetic
pub mod percent;

// Re-exports
pub use id::*;

// Goal & Milestone
pub use goal::{Goal, GoalStatus, Milestone, NewGoal, ParseEnumError, Priority, DEFAULT_CATEGORY};

// Assessment
pub use question::{Level, Question, MAX_POINTS, OPTION_COUNT};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;

/// Calendar date type used for deadlines and due dates
pub type Date = chrono::NaiveDate;
