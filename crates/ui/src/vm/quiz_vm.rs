use services::{Advance, AnswerFeedback, QuizError, QuizSession};

use crate::vm::results_vm::{ResultsVm, map_results};
use crate::vm::review_vm::{ReviewVm, map_review};

pub const SUBMIT_LABEL: &str = "Submit";
pub const NO_SELECTION_WARNING: &str = "Please select an answer!";
pub const NO_EXPLANATION: &str = "No explanation provided.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(usize),
    Submit,
    Advance,
    OpenReview,
    CloseReview,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Finished,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub text: String,
    pub selected: bool,
    pub locked: bool,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub text: String,
    pub class: &'static str,
    pub explanation: String,
}

impl FeedbackVm {
    #[must_use]
    pub fn from_feedback(feedback: &AnswerFeedback) -> Self {
        let text = if feedback.correct {
            "✅ Correct!".to_string()
        } else {
            format!("❌ Wrong! Correct answer was: {}", feedback.correct_answer)
        };
        let explanation = feedback.explanation.as_deref().unwrap_or(NO_EXPLANATION);
        Self {
            correct: feedback.correct,
            text,
            class: if feedback.correct {
                "feedback correct"
            } else {
                "feedback wrong"
            },
            explanation: format!("Explanation: {explanation}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimaryActionVm {
    pub label: &'static str,
    pub intent: QuizIntent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionScreenVm {
    pub title: String,
    pub progress_label: String,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub feedback: Option<FeedbackVm>,
    pub warning: Option<&'static str>,
    pub primary: PrimaryActionVm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreenVm {
    Question(QuestionScreenVm),
    Results(ResultsVm),
    Review(ReviewVm),
}

/// Owns one quiz attempt plus the transient UI state around it.
///
/// All state changes go through `dispatch`; `screen` derives what to draw.
pub struct QuizVm {
    session: QuizSession,
    selection: Option<usize>,
    feedback: Option<AnswerFeedback>,
    warning: Option<&'static str>,
    show_review: bool,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            selection: None,
            feedback: None,
            warning: None,
            show_review: false,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Apply a user intent.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoSelection` when submitting without a choice (the warning is
    /// shown and nothing else changes), and the session's transition errors otherwise.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<QuizOutcome, QuizError> {
        match intent {
            QuizIntent::Select(index) => {
                self.select(index);
                Ok(QuizOutcome::Continue)
            }
            QuizIntent::Submit => {
                match self.session.submit_selection(self.selection) {
                    Ok(feedback) => {
                        self.feedback = Some(feedback);
                        self.warning = None;
                    }
                    Err(QuizError::NoSelection) => {
                        self.warning = Some(NO_SELECTION_WARNING);
                        return Err(QuizError::NoSelection);
                    }
                    Err(err) => return Err(err),
                }
                Ok(QuizOutcome::Continue)
            }
            QuizIntent::Advance => {
                let advance = self.session.advance()?;
                self.selection = None;
                self.feedback = None;
                self.warning = None;
                Ok(match advance {
                    Advance::Next(_) => QuizOutcome::Continue,
                    Advance::Finished => QuizOutcome::Finished,
                })
            }
            QuizIntent::OpenReview => {
                self.show_review = self.session.is_finished();
                Ok(self.outcome())
            }
            QuizIntent::CloseReview => {
                self.show_review = false;
                Ok(self.outcome())
            }
        }
    }

    fn outcome(&self) -> QuizOutcome {
        if self.session.is_finished() {
            QuizOutcome::Finished
        } else {
            QuizOutcome::Continue
        }
    }

    fn select(&mut self, index: usize) {
        let Some(current) = self.session.current_question() else {
            return;
        };
        if current.is_answered() || index >= current.question().options().len() {
            return;
        }
        self.selection = Some(index);
        self.warning = None;
    }

    /// Derive the screen for the current state.
    #[must_use]
    pub fn screen(&self) -> QuizScreenVm {
        if let Ok(results) = self.session.results() {
            return if self.show_review {
                QuizScreenVm::Review(map_review(&self.session.review()))
            } else {
                QuizScreenVm::Results(map_results(&results))
            };
        }
        QuizScreenVm::Question(self.question_screen())
    }

    fn question_screen(&self) -> QuestionScreenVm {
        let progress = self.session.progress();
        let config = self.session.config();
        let current = self.session.current_question();
        let answered = current.is_some_and(|q| q.is_answered());

        let options = current
            .map(|q| q.question().options())
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(index, text)| {
                // Selection is frozen once answered, so it names the submitted option.
                let selected = self.selection == Some(index);
                OptionVm {
                    index,
                    text: text.clone(),
                    selected,
                    locked: answered,
                    class: match (selected, answered) {
                        (true, true) => "option selected locked",
                        (true, false) => "option selected",
                        (false, true) => "option locked",
                        (false, false) => "option",
                    },
                }
            })
            .collect();

        let primary = match self.session.advance_label() {
            Some(label) => PrimaryActionVm {
                label,
                intent: QuizIntent::Advance,
            },
            None => PrimaryActionVm {
                label: SUBMIT_LABEL,
                intent: QuizIntent::Submit,
            },
        };

        QuestionScreenVm {
            title: format!("{} Quiz ({})", config.topic(), config.difficulty().label()),
            progress_label: format!(
                "Question {} of {}",
                progress.current_number, progress.total
            ),
            prompt: current
                .map(|q| q.question().prompt().to_string())
                .unwrap_or_default(),
            options,
            feedback: self.feedback.as_ref().map(FeedbackVm::from_feedback),
            warning: self.warning,
            primary,
        }
    }
}
