//! Dashboard summary over a goal collection.

use careerpath_core::{percent, Goal, GoalStatus};
use serde::Serialize;

/// Counts by status and mean progress across all goals.
///
/// An empty collection summarizes to all zeros. Progress above 100 counts
/// as 100.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GoalSummary {
    /// Number of goals
    pub total: usize,

    /// Goals with status active
    pub active: usize,

    /// Goals with status completed
    pub completed: usize,

    /// Goals with status paused
    pub paused: usize,

    /// Arithmetic mean of progress (0.0-100.0)
    pub mean_progress: f64,

    /// Mean progress rounded half to even, as shown on the dashboard
    pub mean_progress_rounded: u8,
}

impl GoalSummary {
    /// Summarize a goal collection.
    pub fn from_goals(goals: &[Goal]) -> Self {
        if goals.is_empty() {
            return Self::default();
        }

        let mut summary = Self {
            total: goals.len(),
            ..Self::default()
        };
        let mut progress_sum = 0u64;

        for goal in goals {
            match goal.status {
                GoalStatus::Active => summary.active += 1,
                GoalStatus::Completed => summary.completed += 1,
                GoalStatus::Paused => summary.paused += 1,
            }
            progress_sum += u64::from(goal.progress.min(100));
        }

        summary.mean_progress = progress_sum as f64 / summary.total as f64;
        summary.mean_progress_rounded =
            percent::div_round_even(progress_sum, summary.total as u64).min(100) as u8;
        summary
    }

    /// Whether the summarized collection was empty.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerpath_core::NewGoal;

    fn goal(progress: u8, status: GoalStatus) -> Goal {
        let mut goal = Goal::new(NewGoal::new("Goal"));
        goal.progress = progress;
        goal.status = status;
        goal
    }

    #[test]
    fn test_empty_summary_is_zero() {
        let summary = GoalSummary::from_goals(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.active, 0);
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.paused, 0);
        assert_eq!(summary.mean_progress, 0.0);
        assert_eq!(summary.mean_progress_rounded, 0);
    }

    #[test]
    fn test_counts_by_status() {
        let goals = vec![
            goal(10, GoalStatus::Active),
            goal(100, GoalStatus::Completed),
            goal(40, GoalStatus::Paused),
            goal(75, GoalStatus::Active),
        ];
        let summary = GoalSummary::from_goals(&goals);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.active, 2);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.paused, 1);
        assert_eq!(summary.active + summary.completed + summary.paused, summary.total);
    }

    #[test]
    fn test_mean_progress() {
        let goals = vec![goal(75, GoalStatus::Active), goal(40, GoalStatus::Active)];
        let summary = GoalSummary::from_goals(&goals);
        assert_eq!(summary.mean_progress, 57.5);
        // 57.5 ties to even
        assert_eq!(summary.mean_progress_rounded, 58);
    }

    #[test]
    fn test_out_of_range_progress_counts_as_full() {
        let goals = vec![goal(250, GoalStatus::Active), goal(50, GoalStatus::Active)];
        let summary = GoalSummary::from_goals(&goals);
        assert_eq!(summary.mean_progress, 75.0);
        assert_eq!(summary.mean_progress_rounded, 75);
    }

    #[test]
    fn test_mean_progress_stays_in_range() {
        let goals = vec![goal(100, GoalStatus::Completed), goal(100, GoalStatus::Completed)];
        let summary = GoalSummary::from_goals(&goals);
        assert_eq!(summary.mean_progress, 100.0);
        assert_eq!(summary.mean_progress_rounded, 100);
    }
}
