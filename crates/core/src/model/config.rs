use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizConfigError {
    #[error("quiz topic cannot be empty")]
    EmptyTopic,

    #[error("question count must be a whole number, got {raw:?}")]
    InvalidQuestionCount { raw: String },

    #[error("question count must be between 1 and {max}, got {count}")]
    QuestionCountOutOfRange { count: u32, max: u32 },

    #[error("unknown difficulty {raw:?} (expected easy, medium or hard)")]
    UnknownDifficulty { raw: String },
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Difficulty level requested from the question generator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Name used on the wire and in the session store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = QuizConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| QuizConfigError::UnknownDifficulty {
                raw: raw.to_string(),
            })
    }
}

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// Parameters of one quiz attempt. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    topic: String,
    question_count: u32,
    difficulty: Difficulty,
}

impl QuizConfig {
    /// Upper bound on the number of questions requested in one attempt.
    pub const MAX_QUESTIONS: u32 = 50;

    /// Creates a validated config.
    ///
    /// The topic is stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns `QuizConfigError::EmptyTopic` for a blank topic and
    /// `QuizConfigError::QuestionCountOutOfRange` unless `1 <= question_count <= MAX_QUESTIONS`.
    pub fn new(
        topic: impl Into<String>,
        question_count: u32,
        difficulty: Difficulty,
    ) -> Result<Self, QuizConfigError> {
        let topic = topic.into();
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(QuizConfigError::EmptyTopic);
        }
        if !(1..=Self::MAX_QUESTIONS).contains(&question_count) {
            return Err(QuizConfigError::QuestionCountOutOfRange {
                count: question_count,
                max: Self::MAX_QUESTIONS,
            });
        }

        Ok(Self {
            topic: topic.to_string(),
            question_count,
            difficulty,
        })
    }

    /// Builds a config from raw form/session-store values.
    ///
    /// # Errors
    ///
    /// Returns `QuizConfigError` when any of the three values fails validation.
    pub fn parse(topic: &str, question_count: &str, difficulty: &str) -> Result<Self, QuizConfigError> {
        let count = question_count.trim().parse::<u32>().map_err(|_| {
            QuizConfigError::InvalidQuestionCount {
                raw: question_count.to_string(),
            }
        })?;
        let difficulty = difficulty.parse::<Difficulty>()?;
        Self::new(topic, count, difficulty)
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
