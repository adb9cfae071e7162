use std::sync::Arc;

use quiz_core::model::QuizConfig;
use storage::repository::{
    QuizParamsRecord, SessionStore, StorageError, read_params, write_params,
};

use crate::error::QuizError;

/// Hands quiz parameters from the parameter form to the quiz bootstrap
/// through the session store.
#[derive(Clone)]
pub struct QuizParamsService {
    store: Arc<dyn SessionStore>,
}

impl QuizParamsService {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Persist the parameters of the next attempt.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` if the store rejects a write.
    pub async fn save(&self, config: &QuizConfig) -> Result<(), QuizError> {
        write_params(self.store.as_ref(), &QuizParamsRecord::from_config(config)).await?;
        tracing::debug!(
            topic = config.topic(),
            count = config.question_count(),
            difficulty = %config.difficulty(),
            "quiz parameters saved"
        );
        Ok(())
    }

    /// Load and validate the stored parameters.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::MissingParam` when a key was never written,
    /// `QuizError::Config` when a stored value is invalid, and
    /// `QuizError::Storage` on other store failures.
    pub async fn load(&self) -> Result<QuizConfig, QuizError> {
        let record = read_params(self.store.as_ref())
            .await
            .map_err(|err| match err {
                StorageError::Missing(key) => QuizError::MissingParam(key),
                other => QuizError::Storage(other),
            })?;
        Ok(record.into_config()?)
    }
}
