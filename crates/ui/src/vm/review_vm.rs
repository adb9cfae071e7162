use services::ReviewItem;

use crate::vm::quiz_vm::NO_EXPLANATION;

pub const NOT_ANSWERED: &str = "Not answered";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItemVm {
    pub heading: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub explanation: String,
    pub is_correct: bool,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewVm {
    pub items: Vec<ReviewItemVm>,
}

impl From<&ReviewItem> for ReviewItemVm {
    fn from(item: &ReviewItem) -> Self {
        Self {
            heading: format!("Q{}: {}", item.number, item.prompt),
            user_answer: item
                .user_answer
                .clone()
                .unwrap_or_else(|| NOT_ANSWERED.to_string()),
            correct_answer: item.correct_answer.clone(),
            explanation: item
                .explanation
                .clone()
                .unwrap_or_else(|| NO_EXPLANATION.to_string()),
            is_correct: item.is_correct,
            class: if item.is_correct {
                "review-item correct"
            } else {
                "review-item wrong"
            },
        }
    }
}

#[must_use]
pub fn map_review(items: &[ReviewItem]) -> ReviewVm {
    ReviewVm {
        items: items.iter().map(ReviewItemVm::from).collect(),
    }
}
