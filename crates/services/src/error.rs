//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{AnswerError, QuestionError, QuizConfigError};
use storage::repository::StorageError;

/// Errors emitted by a `QuestionSource`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GeneratorError {
    #[error("question generator responded with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("question {index} is malformed: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// Errors emitted by the quiz session controller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    /// Network failure, non-success status or malformed payload.
    #[error("could not fetch questions: {0}")]
    Fetch(#[from] GeneratorError),
    #[error("no questions were returned by the generator")]
    EmptyQuiz,
    #[error("please select an answer")]
    NoSelection,
    #[error("option {index} does not exist for this question")]
    InvalidOption { index: usize },
    #[error("current question has already been answered")]
    AlreadyAnswered,
    #[error("current question has not been answered yet")]
    NotAnswered,
    #[error("quiz already finished")]
    Finished,
    #[error("quiz is not finished yet")]
    NotFinished,
    #[error("quiz parameter {0} is missing")]
    MissingParam(&'static str),
    #[error(transparent)]
    Config(#[from] QuizConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl QuizError {
    /// Whether the error ends the attempt: the quiz cannot proceed and the user must reload.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Fetch(_)
                | Self::EmptyQuiz
                | Self::MissingParam(_)
                | Self::Config(_)
                | Self::Storage(_)
        )
    }
}

impl From<AnswerError> for QuizError {
    fn from(err: AnswerError) -> Self {
        match err {
            AnswerError::AlreadyAnswered => Self::AlreadyAnswered,
        }
    }
}
