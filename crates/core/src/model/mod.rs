mod answer;
mod config;
mod ids;
mod phase;
mod question;

pub use ids::QuestionId;

pub use answer::{AnswerError, AnsweredQuestion, answers_match};
pub use config::{Difficulty, QuizConfig, QuizConfigError};
pub use phase::QuizPhase;
pub use question::{Question, QuestionError};
