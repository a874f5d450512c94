//! Skill Assessment
//!
//! Walks a fixed question bank one answer at a time and scores the
//! completed run overall and per category.

#![warn(missing_docs)]

pub mod bank;
pub mod error;
pub mod result;
pub mod scorer;

pub use bank::QuestionBank;
pub use error::{AssessmentError, Result};
pub use result::{AssessmentResult, CategoryScore};
pub use scorer::{AssessmentScorer, RunState};
