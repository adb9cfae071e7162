use std::env;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use quiz_core::model::{Question, QuestionId, QuizConfig};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

/// Path of the question-generation endpoint, relative to the base URL.
pub const GENERATE_QUESTIONS_PATH: &str = "/generate-questions";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Source of generated questions for a quiz attempt.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Request a question set for `config`.
    ///
    /// An empty list is a valid reply here; the session rejects it.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError` on transport failures, non-success statuses,
    /// or malformed questions.
    async fn generate(&self, config: &QuizConfig) -> Result<Vec<Question>, GeneratorError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub base_url: String,
}

impl GeneratorConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads `QUIZ_API_BASE_URL`, falling back to a local server.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("QUIZ_API_BASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        Self { base_url }
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}{GENERATE_QUESTIONS_PATH}",
            self.base_url.trim_end_matches('/')
        )
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// `QuestionSource` backed by the HTTP question-generation endpoint.
#[derive(Clone)]
pub struct HttpQuestionSource {
    client: Client,
    config: GeneratorConfig,
}

impl HttpQuestionSource {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(GeneratorConfig::from_env())
    }

    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    async fn generate(&self, config: &QuizConfig) -> Result<Vec<Question>, GeneratorError> {
        let url = self.config.endpoint();
        let payload = GenerateRequest {
            topic: config.topic(),
            count: config.question_count(),
            difficulty: config.difficulty().as_str(),
        };

        tracing::debug!(%url, topic = config.topic(), "requesting questions");
        let response = self.client.post(url).json(&payload).send().await?;

        if !response.status().is_success() {
            return Err(GeneratorError::HttpStatus(response.status()));
        }

        let body: GenerateResponse = response.json().await?;
        body.into_questions()
    }
}

/// In-memory `QuestionSource` serving a preset bank, for tests.
#[derive(Clone, Default)]
pub struct FixedQuestionSource {
    questions: Vec<Question>,
    failure: Option<StatusCode>,
    requests: Arc<Mutex<Vec<QuizConfig>>>,
}

impl FixedQuestionSource {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            failure: None,
            requests: Arc::default(),
        }
    }

    /// A source that answers every request with `status`.
    #[must_use]
    pub fn failing(status: StatusCode) -> Self {
        Self {
            questions: Vec::new(),
            failure: Some(status),
            requests: Arc::default(),
        }
    }

    /// Configs received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<QuizConfig> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl QuestionSource for FixedQuestionSource {
    async fn generate(&self, config: &QuizConfig) -> Result<Vec<Question>, GeneratorError> {
        if let Ok(mut guard) = self.requests.lock() {
            guard.push(config.clone());
        }
        if let Some(status) = self.failure {
            return Err(GeneratorError::HttpStatus(status));
        }
        Ok(self.questions.clone())
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    topic: &'a str,
    count: u32,
    difficulty: &'a str,
}

/// Reply body of the generator endpoint.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    questions: Vec<WireQuestion>,
}

#[derive(Debug, Deserialize)]
struct WireQuestion {
    question: String,
    options: Vec<String>,
    answer: String,
    #[serde(default)]
    explanation: Option<String>,
}

impl GenerateResponse {
    /// Validate every wire question, numbering them by position.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::InvalidQuestion` for the first malformed entry.
    pub fn into_questions(self) -> Result<Vec<Question>, GeneratorError> {
        self.questions
            .into_iter()
            .enumerate()
            .map(|(index, wire)| {
                Question::new(
                    QuestionId::from_index(index),
                    wire.question,
                    wire.options,
                    wire.answer,
                    wire.explanation,
                )
                .map_err(|source| GeneratorError::InvalidQuestion { index, source })
            })
            .collect()
    }
}
