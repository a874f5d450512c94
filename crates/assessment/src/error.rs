//! Assessment errors.

use careerpath_core::QuestionId;

/// Error type for assessment operations.
pub type Result<T> = std::result::Result<T, AssessmentError>;

/// Errors that can occur while building or running an assessment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    /// Question bank has no questions
    #[error("Question bank is empty")]
    EmptyQuestionBank,

    /// Question does not present the expected number of options
    #[error("Question {id} has {option_count} options, expected {expected}")]
    InvalidQuestion {
        /// Offending question
        id: QuestionId,
        /// Options it has
        option_count: usize,
        /// Options required
        expected: usize,
    },

    /// Answer index outside the current question's options
    #[error("Option {option} is out of range for a question with {option_count} options")]
    InvalidOption {
        /// Submitted index
        option: usize,
        /// Options on the current question
        option_count: usize,
    },

    /// Answer submitted after the last question
    #[error("Assessment is already complete")]
    AlreadyComplete,

    /// Result requested before the last question was answered
    #[error("Assessment is not complete")]
    NotComplete,
}
