//! Goal model - career objective with milestone-driven progress.

use serde::{Deserialize, Serialize};
use crate::id::{GoalId, MilestoneId};
use crate::percent;
use crate::{Date, Time};

/// Category assigned when a new goal does not name one.
pub const DEFAULT_CATEGORY: &str = "Other";

/// A goal is a career objective the user tracks toward a deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Goal title
    pub title: String,

    /// Detailed description (may be empty)
    pub description: String,

    /// Free-form grouping such as "Education" or "Networking"
    pub category: String,

    /// Goal priority
    pub priority: Priority,

    /// Target date
    pub deadline: Date,

    /// Percentage complete (0-100)
    pub progress: u8,

    /// Goal status
    pub status: GoalStatus,

    /// Milestones in creation order
    pub milestones: Vec<Milestone>,

    /// When created
    pub created_at: Time,

    /// Last updated
    pub updated_at: Time,
}

/// Goal priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority
    Low,
    /// Medium priority
    Medium,
    /// High priority
    High,
}

/// Goal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    /// Goal is being worked on
    Active,
    /// Goal achieved
    Completed,
    /// Goal on hold
    Paused,
}

/// A sub-task of a goal whose completion drives derived progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Unique identifier within the owning goal
    pub id: MilestoneId,

    /// Milestone title
    pub title: String,

    /// Whether the milestone is done
    pub completed: bool,

    /// Optional due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Date>,
}

/// Input for creating a goal. Omitted fields take their defaults.
#[derive(Debug, Clone, Default)]
pub struct NewGoal {
    /// Goal title
    pub title: String,
    /// Description, empty when omitted
    pub description: Option<String>,
    /// Category, [`DEFAULT_CATEGORY`] when omitted
    pub category: Option<String>,
    /// Priority, medium when omitted
    pub priority: Option<Priority>,
    /// Deadline, today when omitted
    pub deadline: Option<Date>,
}

/// Error returned when parsing a priority or status from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl Goal {
    /// Create a new active goal with no progress and no milestones.
    pub fn new(input: NewGoal) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: GoalId::new(),
            title: input.title,
            description: input.description.unwrap_or_default(),
            category: input.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            priority: input.priority.unwrap_or_default(),
            deadline: input.deadline.unwrap_or_else(|| now.date_naive()),
            progress: 0,
            status: GoalStatus::Active,
            milestones: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Number of completed milestones.
    pub fn completed_milestones(&self) -> usize {
        self.milestones.iter().filter(|m| m.completed).count()
    }

    /// Progress implied by milestone completion, if the goal has milestones.
    pub fn derived_progress(&self) -> Option<u8> {
        if self.milestones.is_empty() {
            return None;
        }
        Some(percent::percentage(
            self.completed_milestones() as u64,
            self.milestones.len() as u64,
        ))
    }

    /// Overwrite progress with the milestone-derived value.
    ///
    /// Goals without milestones keep their manually entered progress.
    pub fn recompute_progress(&mut self) {
        if let Some(progress) = self.derived_progress() {
            self.progress = progress;
        }
    }

    /// Find a milestone by id.
    pub fn milestone(&self, id: MilestoneId) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == id)
    }

    /// Find a milestone by id for mutation.
    pub fn milestone_mut(&mut self, id: MilestoneId) -> Option<&mut Milestone> {
        self.milestones.iter_mut().find(|m| m.id == id)
    }

    /// Mark the goal as modified now.
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }
}

impl Milestone {
    /// Create an incomplete milestone.
    pub fn new(title: impl Into<String>, due_date: Option<Date>) -> Self {
        Self {
            id: MilestoneId::new(),
            title: title.into(),
            completed: false,
            due_date,
        }
    }
}

impl NewGoal {
    /// Start a goal input with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set deadline.
    pub fn with_deadline(mut self, deadline: Date) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Priority {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(ParseEnumError { kind: "priority", value: s.to_string() }),
        }
    }
}

impl GoalStatus {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Active => "active",
            GoalStatus::Completed => "completed",
            GoalStatus::Paused => "paused",
        }
    }
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GoalStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(GoalStatus::Active),
            "completed" => Ok(GoalStatus::Completed),
            "paused" => Ok(GoalStatus::Paused),
            _ => Err(ParseEnumError { kind: "status", value: s.to_string() }),
        }
    }
}
