#![forbid(unsafe_code)]

pub mod error;
pub mod generator;
pub mod params_service;
pub mod sessions;

pub use error::{GeneratorError, QuizError};
pub use generator::{FixedQuestionSource, GeneratorConfig, HttpQuestionSource, QuestionSource};
pub use params_service::QuizParamsService;
pub use reqwest::StatusCode;

pub use sessions::{
    Advance, AnswerFeedback, QuizLoopService, QuizProgress, QuizResults, QuizSession, ReviewItem,
};
