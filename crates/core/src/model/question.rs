use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::answer::answers_match;
use crate::model::ids::QuestionId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question needs at least two options, got {0}")]
    TooFewOptions(usize),

    #[error("correct answer {answer:?} does not match any option")]
    AnswerNotAnOption { answer: String },

    #[error("correct answer {answer:?} matches {matches} options")]
    AmbiguousAnswer { answer: String, matches: usize },
}

/// A multiple-choice question as returned by the generator.
///
/// Never mutated after construction; the user's choice lives in `AnsweredQuestion`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: Vec<String>,
    correct_answer: String,
    explanation: Option<String>,
}

impl Question {
    /// Creates a validated question.
    ///
    /// A blank explanation is stored as `None`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is blank, fewer than two options are given,
    /// or `correct_answer` does not match exactly one option.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        explanation: Option<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.len() < 2 {
            return Err(QuestionError::TooFewOptions(options.len()));
        }

        let correct_answer = correct_answer.into();
        let matches = options
            .iter()
            .filter(|option| answers_match(option, &correct_answer))
            .count();
        match matches {
            1 => {}
            0 => {
                return Err(QuestionError::AnswerNotAnOption {
                    answer: correct_answer,
                });
            }
            n => {
                return Err(QuestionError::AmbiguousAnswer {
                    answer: correct_answer,
                    matches: n,
                });
            }
        }

        let explanation = explanation.filter(|text| !text.trim().is_empty());

        Ok(Self {
            id,
            prompt,
            options,
            correct_answer,
            explanation,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// Whether `answer` is the correct answer to this question.
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        answers_match(answer, &self.correct_answer)
    }
}
