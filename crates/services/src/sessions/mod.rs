mod progress;
mod service;
mod view;
mod workflow;

// Public API of the quiz session subsystem.
pub use crate::error::QuizError;
pub use progress::QuizProgress;
pub use service::{Advance, AnswerFeedback, QuizSession};
pub use view::{QuizResults, ReviewItem};
pub use workflow::QuizLoopService;
