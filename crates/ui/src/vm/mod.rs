mod params_vm;
mod quiz_vm;
mod results_vm;
mod review_vm;

pub use params_vm::{
    DEFAULT_QUESTION_COUNT, DifficultyOptionVm, difficulty_options, parse_params,
};
pub use quiz_vm::{
    FeedbackVm, NO_EXPLANATION, NO_SELECTION_WARNING, OptionVm, PrimaryActionVm, QuestionScreenVm,
    QuizIntent, QuizOutcome, QuizScreenVm, QuizVm, SUBMIT_LABEL,
};
pub use results_vm::{ResultsVm, ScoreBreakdownVm, map_results};
pub use review_vm::{NOT_ANSWERED, ReviewItemVm, ReviewVm, map_review};
