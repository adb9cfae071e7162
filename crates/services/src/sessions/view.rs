use quiz_core::model::AnsweredQuestion;

/// Presentation-agnostic summary of a finished attempt.
///
/// No pre-formatted strings here; the UI owns wording and layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResults {
    pub score: u32,
    pub total: u32,
    pub correct: u32,
    pub incorrect: u32,
    /// `score / total * 100`, rounded half up.
    pub percentage: u32,
}

impl QuizResults {
    #[must_use]
    pub fn new(score: u32, total_questions: usize) -> Self {
        let total = u32::try_from(total_questions).unwrap_or(u32::MAX);
        let score = score.min(total);
        Self {
            score,
            total,
            correct: score,
            incorrect: total - score,
            percentage: rounded_percentage(score, total),
        }
    }
}

fn rounded_percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let score = u64::from(score);
    let total = u64::from(total);
    let pct = (score * 200 + total) / (total * 2);
    u32::try_from(pct).unwrap_or(100)
}

/// One question of a finished attempt, as shown on the review screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    /// One-based position in the quiz.
    pub number: usize,
    pub prompt: String,
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub explanation: Option<String>,
    pub is_correct: bool,
}

impl ReviewItem {
    #[must_use]
    pub fn from_answered(number: usize, answered: &AnsweredQuestion) -> Self {
        let question = answered.question();
        Self {
            number,
            prompt: question.prompt().to_owned(),
            user_answer: answered.user_answer().map(str::to_owned),
            correct_answer: question.correct_answer().to_owned(),
            explanation: question.explanation().map(str::to_owned),
            is_correct: answered.is_correct().unwrap_or(false),
        }
    }
}
