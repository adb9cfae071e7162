use services::QuizResults;

/// Correct vs wrong split of a finished attempt, drawn as a two-segment bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreBreakdownVm {
    pub correct: u32,
    pub incorrect: u32,
    /// Share of the bar for each segment, in percent; the two add up to 100.
    pub correct_share: u32,
    pub incorrect_share: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub summary: String,
    pub breakdown: ScoreBreakdownVm,
}

impl From<&QuizResults> for ResultsVm {
    fn from(results: &QuizResults) -> Self {
        Self {
            summary: format!(
                "You scored {} out of {}! ({}%)",
                results.score, results.total, results.percentage
            ),
            breakdown: ScoreBreakdownVm {
                correct: results.correct,
                incorrect: results.incorrect,
                correct_share: results.percentage,
                incorrect_share: 100 - results.percentage.min(100),
            },
        }
    }
}

#[must_use]
pub fn map_results(results: &QuizResults) -> ResultsVm {
    ResultsVm::from(results)
}
