use async_trait::async_trait;
use quiz_core::model::{QuizConfig, QuizConfigError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("missing session value: {0}")]
    Missing(&'static str),

    #[error("connection error: {0}")]
    Connection(String),
}

/// Keys written by the parameter form and read by the quiz bootstrap.
pub mod keys {
    pub const QUIZ_TOPIC: &str = "quizTopic";
    pub const NUM_QUESTIONS: &str = "numQuestions";
    pub const DIFFICULTY: &str = "difficulty";

    pub const ALL: [&str; 3] = [QUIZ_TOPIC, NUM_QUESTIONS, DIFFICULTY];
}

/// Stored shape of the quiz parameters: three plain strings, one per key.
///
/// Mirrors `QuizConfig` so the store never has to know about domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizParamsRecord {
    pub topic: String,
    pub num_questions: String,
    pub difficulty: String,
}

impl QuizParamsRecord {
    #[must_use]
    pub fn from_config(config: &QuizConfig) -> Self {
        Self {
            topic: config.topic().to_owned(),
            num_questions: config.question_count().to_string(),
            difficulty: config.difficulty().as_str().to_owned(),
        }
    }

    /// Convert the record back into a validated `QuizConfig`.
    ///
    /// # Errors
    ///
    /// Returns `QuizConfigError` if any stored value fails validation.
    pub fn into_config(self) -> Result<QuizConfig, QuizConfigError> {
        QuizConfig::parse(&self.topic, &self.num_questions, &self.difficulty)
    }
}

/// Browser-session-scoped key/value store.
///
/// Lives for one run of the front end; nothing survives a restart.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Fetch the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failures.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Remove the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failures.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory store, the only backend the front end needs.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl SessionStore for InMemoryRepository {
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Write all three quiz parameters.
///
/// # Errors
///
/// Returns `StorageError` if any key cannot be written.
pub async fn write_params(
    store: &dyn SessionStore,
    record: &QuizParamsRecord,
) -> Result<(), StorageError> {
    store.set_item(keys::QUIZ_TOPIC, &record.topic).await?;
    store
        .set_item(keys::NUM_QUESTIONS, &record.num_questions)
        .await?;
    store.set_item(keys::DIFFICULTY, &record.difficulty).await?;
    Ok(())
}

/// Read all three quiz parameters.
///
/// # Errors
///
/// Returns `StorageError::Missing` naming the first absent key.
pub async fn read_params(store: &dyn SessionStore) -> Result<QuizParamsRecord, StorageError> {
    let topic = store
        .get_item(keys::QUIZ_TOPIC)
        .await?
        .ok_or(StorageError::Missing(keys::QUIZ_TOPIC))?;
    let num_questions = store
        .get_item(keys::NUM_QUESTIONS)
        .await?
        .ok_or(StorageError::Missing(keys::NUM_QUESTIONS))?;
    let difficulty = store
        .get_item(keys::DIFFICULTY)
        .await?
        .ok_or(StorageError::Missing(keys::DIFFICULTY))?;

    Ok(QuizParamsRecord {
        topic,
        num_questions,
        difficulty,
    })
}

/// Aggregates the session store behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub session: Arc<dyn SessionStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let session: Arc<dyn SessionStore> = Arc::new(InMemoryRepository::new());
        Self { session }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Difficulty;

    #[tokio::test]
    async fn params_round_trip_through_session_keys() {
        let repo = InMemoryRepository::new();
        let config = QuizConfig::new("History", 3, Difficulty::Easy).unwrap();

        write_params(&repo, &QuizParamsRecord::from_config(&config))
            .await
            .unwrap();

        assert_eq!(
            repo.get_item(keys::NUM_QUESTIONS).await.unwrap().as_deref(),
            Some("3")
        );
        assert_eq!(
            repo.get_item(keys::DIFFICULTY).await.unwrap().as_deref(),
            Some("easy")
        );

        let record = read_params(&repo).await.unwrap();
        assert_eq!(record.into_config().unwrap(), config);
    }

    #[tokio::test]
    async fn missing_key_is_reported() {
        let repo = InMemoryRepository::new();
        repo.set_item(keys::QUIZ_TOPIC, "Rust").await.unwrap();

        let err = read_params(&repo).await.unwrap_err();
        assert!(matches!(err, StorageError::Missing(keys::NUM_QUESTIONS)));
    }

    #[tokio::test]
    async fn remove_item_clears_value() {
        let repo = InMemoryRepository::new();
        repo.set_item("k", "v").await.unwrap();
        repo.remove_item("k").await.unwrap();
        assert_eq!(repo.get_item("k").await.unwrap(), None);
    }

    #[test]
    fn record_with_bad_count_fails_validation() {
        let record = QuizParamsRecord {
            topic: "Rust".into(),
            num_questions: "0".into(),
            difficulty: "hard".into(),
        };
        assert!(record.into_config().is_err());
    }
}
