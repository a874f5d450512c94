//! Goal tracker errors.

use careerpath_core::{GoalId, MilestoneId};

/// Error type for goal tracker operations.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Errors that can occur while mutating goals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    /// No goal with this id
    #[error("Goal not found: {0}")]
    GoalNotFound(GoalId),

    /// The goal exists but has no milestone with this id
    #[error("Milestone {milestone} not found in goal {goal}")]
    MilestoneNotFound {
        /// Owning goal
        goal: GoalId,
        /// Missing milestone
        milestone: MilestoneId,
    },
}
