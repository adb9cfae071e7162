use std::sync::Arc;

use quiz_core::model::QuizConfig;

use super::service::QuizSession;
use crate::error::QuizError;
use crate::generator::QuestionSource;
use crate::params_service::QuizParamsService;

/// Orchestrates the bootstrap of a quiz attempt: parameters, fetch, session start.
#[derive(Clone)]
pub struct QuizLoopService {
    source: Arc<dyn QuestionSource>,
    params: QuizParamsService,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>, params: QuizParamsService) -> Self {
        Self { source, params }
    }

    #[must_use]
    pub fn params(&self) -> &QuizParamsService {
        &self.params
    }

    /// Fetch questions for `config` and start a fresh session.
    ///
    /// Failures are logged before being returned; none are retried.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Fetch` when the generator fails and
    /// `QuizError::EmptyQuiz` when it returns no questions.
    pub async fn start_quiz(&self, config: &QuizConfig) -> Result<QuizSession, QuizError> {
        let questions = match self.source.generate(config).await {
            Ok(questions) => questions,
            Err(err) => {
                tracing::error!(error = %err, topic = config.topic(), "error fetching quiz questions");
                return Err(QuizError::Fetch(err));
            }
        };

        let session = QuizSession::new(config.clone(), questions).inspect_err(|err| {
            tracing::error!(error = %err, topic = config.topic(), "error starting quiz");
        })?;

        tracing::info!(
            topic = config.topic(),
            requested = config.question_count(),
            received = session.total_questions(),
            difficulty = %config.difficulty(),
            "quiz session started"
        );
        Ok(session)
    }

    /// Start a session from the parameters stored by the parameter form.
    ///
    /// # Errors
    ///
    /// Returns the parameter errors of `QuizParamsService::load` or the fetch errors of
    /// `start_quiz`.
    pub async fn start_from_params(&self) -> Result<QuizSession, QuizError> {
        let config = self.params.load().await.inspect_err(|err| {
            tracing::error!(error = %err, "error loading quiz parameters");
        })?;
        self.start_quiz(&config).await
    }
}
