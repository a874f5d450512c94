//! Storage trait abstraction.

use async_trait::async_trait;
use careerpath_core::{Goal, Question};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage abstraction for CareerPath data.
///
/// Supplies seed data to the goal tracker and the assessment, and keeps
/// the goal collection between sessions. Writes replace the whole
/// collection (last write wins).
#[async_trait]
pub trait Storage: Send + Sync {
    /// Load all goals in display order. Nothing stored yet is an empty list.
    async fn load_goals(&self) -> Result<Vec<Goal>>;

    /// Replace the stored goal collection.
    async fn save_goals(&mut self, goals: &[Goal]) -> Result<()>;

    /// Load the question bank, `None` if none has been stored.
    async fn load_questions(&self) -> Result<Option<Vec<Question>>>;

    /// Replace the stored question bank.
    async fn save_questions(&mut self, questions: &[Question]) -> Result<()>;
}
