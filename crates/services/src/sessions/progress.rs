use quiz_core::model::QuizPhase;

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// One-based number of the question on screen; equals `total` once finished.
    pub current_number: usize,
    pub total: usize,
    pub answered: usize,
    pub score: u32,
    pub phase: QuizPhase,
}
