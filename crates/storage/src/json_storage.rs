//! JSON file storage implementation.
//!
//! Stores the goal collection in `goals.json` and the question bank in
//! `questions.json` under a root directory.

use std::path::{Path, PathBuf};
use careerpath_core::{Goal, Question};
use tokio::fs;
use tracing::debug;
use super::{Storage, Result};

const GOALS_FILE: &str = "goals.json";
const QUESTIONS_FILE: &str = "questions.json";

/// File-based JSON storage backend.
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Create storage rooted at `root`, creating the directory if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// Storage root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether a goal collection has been written.
    pub async fn is_initialized(&self) -> Result<bool> {
        Ok(fs::try_exists(self.goals_path()).await?)
    }

    fn goals_path(&self) -> PathBuf {
        self.root.join(GOALS_FILE)
    }

    fn questions_path(&self) -> PathBuf {
        self.root.join(QUESTIONS_FILE)
    }
}

#[async_trait::async_trait]
impl Storage for JsonStorage {
    async fn load_goals(&self) -> Result<Vec<Goal>> {
        Ok(read_json(&self.goals_path()).await?.unwrap_or_default())
    }

    async fn save_goals(&mut self, goals: &[Goal]) -> Result<()> {
        write_json(&self.goals_path(), goals).await?;
        debug!("Saved {} goals to {}", goals.len(), self.root.display());
        Ok(())
    }

    async fn load_questions(&self) -> Result<Option<Vec<Question>>> {
        read_json(&self.questions_path()).await
    }

    async fn save_questions(&mut self, questions: &[Question]) -> Result<()> {
        write_json(&self.questions_path(), questions).await?;
        debug!("Saved {} questions to {}", questions.len(), self.root.display());
        Ok(())
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json.as_bytes()).await?;
    Ok(())
}
