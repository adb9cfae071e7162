use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::question::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("question has already been answered")]
    AlreadyAnswered,
}

/// Compares a chosen answer with the correct one.
///
/// Surrounding whitespace is ignored on both sides; everything else, case included,
/// must match exactly. Submission grading and review use this same rule.
#[must_use]
pub fn answers_match(chosen: &str, correct: &str) -> bool {
    chosen.trim() == correct.trim()
}

/// A question plus the user's recorded choice.
///
/// `user_answer` is `None` until the question is submitted and is written at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    question: Question,
    user_answer: Option<String>,
}

impl AnsweredQuestion {
    #[must_use]
    pub fn new(question: Question) -> Self {
        Self {
            question,
            user_answer: None,
        }
    }

    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    #[must_use]
    pub fn user_answer(&self) -> Option<&str> {
        self.user_answer.as_deref()
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.user_answer.is_some()
    }

    /// `None` while unanswered, otherwise whether the recorded answer is correct.
    #[must_use]
    pub fn is_correct(&self) -> Option<bool> {
        self.user_answer
            .as_deref()
            .map(|answer| self.question.is_correct(answer))
    }

    /// Record the user's answer (trimmed) and report whether it was correct.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::AlreadyAnswered` if an answer was recorded before.
    pub fn record_answer(&mut self, answer: &str) -> Result<bool, AnswerError> {
        if self.user_answer.is_some() {
            return Err(AnswerError::AlreadyAnswered);
        }
        let answer = answer.trim().to_string();
        let correct = self.question.is_correct(&answer);
        self.user_answer = Some(answer);
        Ok(correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionId;

    fn question() -> Question {
        Question::new(
            QuestionId::new(0),
            "Largest planet?",
            vec!["Mars".into(), "Jupiter ".into()],
            "Jupiter",
            None,
        )
        .unwrap()
    }

    #[test]
    fn trimmed_comparison_is_case_sensitive() {
        assert!(answers_match("  Jupiter\n", "Jupiter"));
        assert!(!answers_match("jupiter", "Jupiter"));
    }

    #[test]
    fn records_trimmed_answer_once() {
        let mut answered = AnsweredQuestion::new(question());
        assert_eq!(answered.is_correct(), None);

        assert!(answered.record_answer("Jupiter ").unwrap());
        assert_eq!(answered.user_answer(), Some("Jupiter"));
        assert_eq!(answered.is_correct(), Some(true));

        let err = answered.record_answer("Mars").unwrap_err();
        assert_eq!(err, AnswerError::AlreadyAnswered);
        assert_eq!(answered.user_answer(), Some("Jupiter"));
    }

    #[test]
    fn wrong_answer_is_recorded_as_incorrect() {
        let mut answered = AnsweredQuestion::new(question());
        assert!(!answered.record_answer("Mars").unwrap());
        assert_eq!(answered.is_correct(), Some(false));
    }
}
