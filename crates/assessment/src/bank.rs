//! Validated question bank.

use careerpath_core::{Question, OPTION_COUNT};
use serde::Serialize;

use crate::error::{AssessmentError, Result};

/// An ordered, non-empty set of questions that all present
/// [`OPTION_COUNT`] options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Validate and wrap a question list.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(AssessmentError::EmptyQuestionBank);
        }
        if let Some(bad) = questions.iter().find(|q| q.option_count() != OPTION_COUNT) {
            return Err(AssessmentError::InvalidQuestion {
                id: bad.id.clone(),
                option_count: bad.option_count(),
                expected: OPTION_COUNT,
            });
        }
        Ok(Self { questions })
    }

    /// Questions in presentation order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions. Never zero.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the bank has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question at a position.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}
