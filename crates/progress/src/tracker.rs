//! Goal tracking service.

use careerpath_core::{Date, Goal, GoalId, GoalStatus, Milestone, MilestoneId, NewGoal};
use tracing::{debug, warn};

use crate::error::{Result, TrackerError};
use crate::summary::GoalSummary;

/// Goal tracker configuration.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Increment applied by [`GoalTracker::advance_progress`]
    pub progress_step: u8,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self { progress_step: 10 }
    }
}

/// Owns the user's goals in insertion order.
///
/// Every operation either applies fully or leaves the collection untouched:
/// ids are resolved before anything is mutated.
#[derive(Debug, Clone, Default)]
pub struct GoalTracker {
    goals: Vec<Goal>,
    config: TrackerConfig,
}

impl GoalTracker {
    /// Create a tracker seeded with existing goals.
    ///
    /// Seeded progress above 100 is clamped to 100.
    pub fn new(mut goals: Vec<Goal>) -> Self {
        for goal in &mut goals {
            if goal.progress > 100 {
                warn!("Goal {} seeded with progress {}%, clamping to 100", goal.id, goal.progress);
                goal.progress = 100;
            }
        }
        Self {
            goals,
            config: TrackerConfig::default(),
        }
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// All goals in insertion order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Consume the tracker, returning its goals for persistence.
    pub fn into_goals(self) -> Vec<Goal> {
        self.goals
    }

    /// Look up a goal.
    pub fn goal(&self, goal_id: GoalId) -> Result<&Goal> {
        self.goals
            .iter()
            .find(|g| g.id == goal_id)
            .ok_or(TrackerError::GoalNotFound(goal_id))
    }

    fn goal_mut(&mut self, goal_id: GoalId) -> Result<&mut Goal> {
        match self.goals.iter_mut().find(|g| g.id == goal_id) {
            Some(goal) => Ok(goal),
            None => {
                warn!("Goal {} not found", goal_id);
                Err(TrackerError::GoalNotFound(goal_id))
            }
        }
    }

    /// Create a goal and append it to the collection.
    pub fn create_goal(&mut self, input: NewGoal) -> &Goal {
        let goal = Goal::new(input);
        debug!("Created goal {} ({})", goal.id, goal.title);

        let index = self.goals.len();
        self.goals.push(goal);
        &self.goals[index]
    }

    /// Append a milestone to a goal and re-derive its progress.
    pub fn add_milestone(
        &mut self,
        goal_id: GoalId,
        title: impl Into<String>,
        due_date: Option<Date>,
    ) -> Result<&Milestone> {
        let goal = self.goal_mut(goal_id)?;
        let milestone = Milestone::new(title, due_date);
        debug!("Adding milestone {} to goal {}", milestone.id, goal_id);

        let index = goal.milestones.len();
        goal.milestones.push(milestone);
        goal.recompute_progress();
        goal.touch();
        Ok(&goal.milestones[index])
    }

    /// Flip a milestone's completion and re-derive the goal's progress.
    pub fn toggle_milestone(&mut self, goal_id: GoalId, milestone_id: MilestoneId) -> Result<&Goal> {
        let goal = self.goal_mut(goal_id)?;
        let Some(milestone) = goal.milestone_mut(milestone_id) else {
            warn!("Milestone {} not found in goal {}", milestone_id, goal_id);
            return Err(TrackerError::MilestoneNotFound {
                goal: goal_id,
                milestone: milestone_id,
            });
        };

        milestone.completed = !milestone.completed;
        let completed = milestone.completed;
        goal.recompute_progress();
        goal.touch();

        debug!(
            "Milestone {} completed={}, goal {} progress now {}%",
            milestone_id, completed, goal_id, goal.progress
        );
        Ok(&*goal)
    }

    /// Overwrite a goal's progress, clamped to 0-100.
    ///
    /// Milestones are left alone, so this may disagree with the
    /// milestone-derived value until the next toggle.
    pub fn set_progress(&mut self, goal_id: GoalId, progress: i32) -> Result<u8> {
        let goal = self.goal_mut(goal_id)?;
        goal.progress = progress.clamp(0, 100) as u8;
        goal.touch();

        debug!("Goal {} progress set to {}%", goal_id, goal.progress);
        Ok(goal.progress)
    }

    /// Bump progress by the configured step, saturating at 100.
    pub fn advance_progress(&mut self, goal_id: GoalId) -> Result<u8> {
        let current = self.goal(goal_id)?.progress;
        let next = i32::from(current) + i32::from(self.config.progress_step);
        self.set_progress(goal_id, next)
    }

    /// Move a goal to another status. Progress is not touched.
    pub fn set_status(&mut self, goal_id: GoalId, status: GoalStatus) -> Result<&Goal> {
        let goal = self.goal_mut(goal_id)?;
        debug!("Goal {} status {} -> {}", goal_id, goal.status, status);
        goal.status = status;
        goal.touch();
        Ok(&*goal)
    }

    /// Summarize the whole collection.
    pub fn aggregate(&self) -> GoalSummary {
        GoalSummary::from_goals(&self.goals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with_goal(milestones: usize) -> (GoalTracker, GoalId, Vec<MilestoneId>) {
        let mut tracker = GoalTracker::default();
        let goal_id = tracker.create_goal(NewGoal::new("Complete certification")).id;
        let ids = (0..milestones)
            .map(|i| tracker.add_milestone(goal_id, format!("Step {}", i + 1), None).unwrap().id)
            .collect();
        (tracker, goal_id, ids)
    }

    #[test]
    fn test_create_goal_appends_in_order() {
        let mut tracker = GoalTracker::default();
        let first = tracker.create_goal(NewGoal::new("First")).id;
        let second = tracker.create_goal(NewGoal::new("Second")).id;

        let ids: Vec<_> = tracker.goals().iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![first, second]);
        assert_eq!(tracker.goal(second).unwrap().progress, 0);
        assert_eq!(tracker.goal(second).unwrap().status, GoalStatus::Active);
    }

    #[test]
    fn test_three_of_four_milestones() {
        let (mut tracker, goal_id, ids) = tracker_with_goal(4);
        for id in &ids[..3] {
            tracker.toggle_milestone(goal_id, *id).unwrap();
        }
        assert_eq!(tracker.goal(goal_id).unwrap().progress, 75);
    }

    #[test]
    fn test_untoggle_drops_progress() {
        let (mut tracker, goal_id, ids) = tracker_with_goal(4);
        for id in &ids[..3] {
            tracker.toggle_milestone(goal_id, *id).unwrap();
        }
        let goal = tracker.toggle_milestone(goal_id, ids[2]).unwrap();
        assert_eq!(goal.progress, 50);
        assert!(!goal.milestones[2].completed);
    }

    #[test]
    fn test_progress_tracks_any_toggle_sequence() {
        let (mut tracker, goal_id, ids) = tracker_with_goal(7);
        let sequence = [0, 3, 3, 6, 1, 0, 5, 2, 4, 6, 1];
        for &i in &sequence {
            let goal = tracker.toggle_milestone(goal_id, ids[i]).unwrap();
            let expected = careerpath_core::percent::percentage(
                goal.completed_milestones() as u64,
                goal.milestones.len() as u64,
            );
            assert_eq!(goal.progress, expected);
        }
    }

    #[test]
    fn test_add_milestone_rederives_progress() {
        let (mut tracker, goal_id, ids) = tracker_with_goal(1);
        tracker.toggle_milestone(goal_id, ids[0]).unwrap();
        assert_eq!(tracker.goal(goal_id).unwrap().progress, 100);

        tracker.add_milestone(goal_id, "Another step", None).unwrap();
        assert_eq!(tracker.goal(goal_id).unwrap().progress, 50);
    }

    #[test]
    fn test_toggle_unknown_goal() {
        let (mut tracker, _, ids) = tracker_with_goal(1);
        let missing = GoalId::new();
        let err = tracker.toggle_milestone(missing, ids[0]).unwrap_err();
        assert_eq!(err, TrackerError::GoalNotFound(missing));
    }

    #[test]
    fn test_toggle_unknown_milestone_leaves_goal_untouched() {
        let (mut tracker, goal_id, _) = tracker_with_goal(2);
        let before = tracker.goal(goal_id).unwrap().clone();
        let missing = MilestoneId::new();

        let err = tracker.toggle_milestone(goal_id, missing).unwrap_err();
        assert!(matches!(err, TrackerError::MilestoneNotFound { goal, milestone } if goal == goal_id && milestone == missing));
        assert_eq!(tracker.goal(goal_id).unwrap(), &before);
    }

    #[test]
    fn test_set_progress_clamps() {
        let (mut tracker, goal_id, _) = tracker_with_goal(0);
        assert_eq!(tracker.set_progress(goal_id, 997).unwrap(), 100);
        assert_eq!(tracker.goal(goal_id).unwrap().progress, 100);
        assert_eq!(tracker.set_progress(goal_id, -20).unwrap(), 0);
        assert_eq!(tracker.set_progress(goal_id, 42).unwrap(), 42);
    }

    #[test]
    fn test_set_progress_overrides_milestones() {
        let (mut tracker, goal_id, ids) = tracker_with_goal(4);
        tracker.toggle_milestone(goal_id, ids[0]).unwrap();
        tracker.set_progress(goal_id, 90).unwrap();

        let goal = tracker.goal(goal_id).unwrap();
        assert_eq!(goal.progress, 90);
        assert_eq!(goal.completed_milestones(), 1);
    }

    #[test]
    fn test_set_progress_unknown_goal() {
        let mut tracker = GoalTracker::default();
        assert!(matches!(
            tracker.set_progress(GoalId::new(), 10),
            Err(TrackerError::GoalNotFound(_))
        ));
    }

    #[test]
    fn test_advance_progress_saturates() {
        let (mut tracker, goal_id, _) = tracker_with_goal(0);
        tracker.set_progress(goal_id, 85).unwrap();
        assert_eq!(tracker.advance_progress(goal_id).unwrap(), 95);
        assert_eq!(tracker.advance_progress(goal_id).unwrap(), 100);
        assert_eq!(tracker.advance_progress(goal_id).unwrap(), 100);
    }

    #[test]
    fn test_advance_progress_uses_configured_step() {
        let mut tracker = GoalTracker::default().with_config(TrackerConfig { progress_step: 25 });
        let goal_id = tracker.create_goal(NewGoal::new("Network")).id;
        assert_eq!(tracker.advance_progress(goal_id).unwrap(), 25);
        assert_eq!(tracker.config().progress_step, 25);
    }

    #[test]
    fn test_set_status_keeps_progress() {
        let (mut tracker, goal_id, _) = tracker_with_goal(0);
        tracker.set_progress(goal_id, 60).unwrap();
        let goal = tracker.set_status(goal_id, GoalStatus::Paused).unwrap();
        assert_eq!(goal.status, GoalStatus::Paused);
        assert_eq!(goal.progress, 60);
    }

    #[test]
    fn test_aggregate_empty() {
        let summary = GoalTracker::default().aggregate();
        assert_eq!(summary, GoalSummary::default());
        assert_eq!(summary.mean_progress, 0.0);
    }

    #[test]
    fn test_aggregate_consistency() {
        let mut tracker = GoalTracker::default();
        let a = tracker.create_goal(NewGoal::new("A")).id;
        let b = tracker.create_goal(NewGoal::new("B")).id;
        tracker.create_goal(NewGoal::new("C"));
        tracker.set_status(a, GoalStatus::Completed).unwrap();
        tracker.set_status(b, GoalStatus::Paused).unwrap();
        tracker.set_progress(a, 100).unwrap();
        tracker.set_progress(b, 30).unwrap();

        let summary = tracker.aggregate();
        assert_eq!(summary.active + summary.completed + summary.paused, tracker.goals().len());
        assert!(summary.mean_progress >= 0.0 && summary.mean_progress <= 100.0);
        assert_eq!(summary.mean_progress_rounded, 43);
    }

    #[test]
    fn test_seeded_progress_above_100_is_clamped() {
        let mut seeded = Goal::new(NewGoal::new("Imported"));
        seeded.progress = 250;
        let goal_id = seeded.id;

        let tracker = GoalTracker::new(vec![seeded]);
        assert_eq!(tracker.goal(goal_id).unwrap().progress, 100);

        let summary = tracker.aggregate();
        assert_eq!(summary.mean_progress, 100.0);
        assert_eq!(summary.mean_progress_rounded, 100);
    }

    #[test]
    fn test_into_goals_returns_collection() {
        let (tracker, goal_id, _) = tracker_with_goal(2);
        let goals = tracker.into_goals();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].id, goal_id);
        assert_eq!(goals[0].milestones.len(), 2);
    }
}
