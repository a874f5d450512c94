//! Assessment question model and score levels.

use serde::{Deserialize, Serialize};
use crate::id::QuestionId;

/// Number of options every question presents.
pub const OPTION_COUNT: usize = 4;

/// Points earned by the last option; option `i` is worth `i` points.
pub const MAX_POINTS: u8 = (OPTION_COUNT - 1) as u8;

/// A self-assessment question.
///
/// There is no right answer: options are ordered from least to most
/// experienced and each one contributes its index as points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier
    pub id: QuestionId,

    /// Category the question contributes to
    pub category: String,

    /// Question text
    pub prompt: String,

    /// Options, weakest first
    pub options: Vec<String>,
}

impl Question {
    /// Create a question.
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            id: QuestionId::new(id),
            category: category.into(),
            prompt: prompt.into(),
            options,
        }
    }

    /// Number of options presented.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}

/// Qualitative level derived from a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    /// Below 40
    Beginner,
    /// 40 to 59
    Intermediate,
    /// 60 to 79
    Advanced,
    /// 80 and above
    Expert,
}

impl Level {
    /// Map a score to its level, highest threshold first.
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Level::Expert
        } else if score >= 60 {
            Level::Advanced
        } else if score >= 40 {
            Level::Intermediate
        } else {
            Level::Beginner
        }
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
            Level::Expert => "Expert",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
