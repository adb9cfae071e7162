use std::fmt;

use quiz_core::model::{AnsweredQuestion, Question, QuizConfig, QuizPhase};

use super::progress::QuizProgress;
use super::view::{QuizResults, ReviewItem};
use crate::error::QuizError;

pub const NEXT_QUESTION_LABEL: &str = "Next Question";
pub const FINISH_QUIZ_LABEL: &str = "Finish Quiz";

//
// ─── TRANSITION RESULTS ────────────────────────────────────────────────────────
//

/// Feedback produced by submitting an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub user_answer: String,
    pub correct_answer: String,
    pub explanation: Option<String>,
}

/// Where `QuizSession::advance` moved the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the question at this zero-based index.
    Next(usize),
    Finished,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One attempt at a quiz.
///
/// Steps through the fetched questions in order. Each question goes
/// `Unanswered -> Answered` exactly once via `submit_answer`; `advance` then moves to the
/// next question or finishes the attempt. The score only changes on submission.
pub struct QuizSession {
    config: QuizConfig,
    questions: Vec<AnsweredQuestion>,
    current: usize,
    score: u32,
    phase: QuizPhase,
}

impl QuizSession {
    /// Start an attempt with the fetched questions.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyQuiz` if no questions are provided.
    pub fn new(config: QuizConfig, questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuiz);
        }

        Ok(Self {
            config,
            questions: questions.into_iter().map(AnsweredQuestion::new).collect(),
            current: 0,
            score: 0,
            phase: QuizPhase::Active,
        })
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    #[must_use]
    pub fn questions(&self) -> &[AnsweredQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    /// Total number of questions in this attempt.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions that already carry an answer.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_answered()).count()
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current + 1 < self.questions.len()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            current_number: (self.current + 1).min(self.questions.len()),
            total: self.total_questions(),
            answered: self.answered_count(),
            score: self.score,
            phase: self.phase,
        }
    }

    /// The question on screen; `None` once finished.
    #[must_use]
    pub fn current_question(&self) -> Option<&AnsweredQuestion> {
        if self.phase.is_active() {
            self.questions.get(self.current)
        } else {
            None
        }
    }

    /// Submit the option the user has selected, if any.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoSelection` when `selection` is `None`, leaving the
    /// session untouched. See `submit_answer` for the other cases.
    pub fn submit_selection(&mut self, selection: Option<usize>) -> Result<AnswerFeedback, QuizError> {
        let index = selection.ok_or(QuizError::NoSelection)?;
        self.submit_answer(index)
    }

    /// Answer the current question with the option at `option_index`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Finished` after the last question,
    /// `QuizError::AlreadyAnswered` if the current question was answered before, and
    /// `QuizError::InvalidOption` for an index outside the option list.
    pub fn submit_answer(&mut self, option_index: usize) -> Result<AnswerFeedback, QuizError> {
        if !self.phase.is_active() {
            return Err(QuizError::Finished);
        }
        let current = self
            .questions
            .get_mut(self.current)
            .ok_or(QuizError::Finished)?;
        if current.is_answered() {
            return Err(QuizError::AlreadyAnswered);
        }
        let chosen = current
            .question()
            .option(option_index)
            .ok_or(QuizError::InvalidOption {
                index: option_index,
            })?
            .to_owned();

        let correct = current.record_answer(&chosen)?;
        if correct {
            self.score += 1;
        }

        let question = current.question();
        Ok(AnswerFeedback {
            correct,
            user_answer: current.user_answer().unwrap_or_default().to_owned(),
            correct_answer: question.correct_answer().to_owned(),
            explanation: question.explanation().map(str::to_owned),
        })
    }

    /// Label of the control that follows a submission.
    ///
    /// `None` while the current question is still unanswered or the quiz is over.
    #[must_use]
    pub fn advance_label(&self) -> Option<&'static str> {
        let current = self.current_question()?;
        if !current.is_answered() {
            return None;
        }
        Some(if self.has_next() {
            NEXT_QUESTION_LABEL
        } else {
            FINISH_QUIZ_LABEL
        })
    }

    /// Move past the answered current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Finished` if the quiz is already over and
    /// `QuizError::NotAnswered` if the current question has no answer yet.
    pub fn advance(&mut self) -> Result<Advance, QuizError> {
        let current = self.current_question().ok_or(QuizError::Finished)?;
        if !current.is_answered() {
            return Err(QuizError::NotAnswered);
        }

        if self.has_next() {
            self.current += 1;
            Ok(Advance::Next(self.current))
        } else {
            self.phase = QuizPhase::Finished;
            tracing::info!(
                topic = self.config.topic(),
                score = self.score,
                total = self.total_questions(),
                "quiz finished"
            );
            Ok(Advance::Finished)
        }
    }

    /// Summary statistics of a finished attempt.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotFinished` while questions remain.
    pub fn results(&self) -> Result<QuizResults, QuizError> {
        if !self.is_finished() {
            return Err(QuizError::NotFinished);
        }
        Ok(QuizResults::new(self.score, self.total_questions()))
    }

    /// Per-question reconstruction of the attempt, in question order.
    #[must_use]
    pub fn review(&self) -> Vec<ReviewItem> {
        self.questions
            .iter()
            .enumerate()
            .map(|(index, answered)| ReviewItem::from_answered(index + 1, answered))
            .collect()
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("topic", &self.config.topic())
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
