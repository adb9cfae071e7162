use quiz_core::model::{Difficulty, QuizConfig};

pub const DEFAULT_QUESTION_COUNT: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DifficultyOptionVm {
    pub value: &'static str,
    pub label: &'static str,
}

#[must_use]
pub fn difficulty_options() -> Vec<DifficultyOptionVm> {
    Difficulty::ALL
        .into_iter()
        .map(|level| DifficultyOptionVm {
            value: level.as_str(),
            label: level.label(),
        })
        .collect()
}

/// Validate the raw form fields.
///
/// # Errors
///
/// Returns a user-facing message describing the first invalid field.
pub fn parse_params(topic: &str, num_questions: &str, difficulty: &str) -> Result<QuizConfig, String> {
    QuizConfig::parse(topic, num_questions, difficulty).map_err(|err| {
        let message = err.to_string();
        let mut chars = message.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_cover_every_difficulty() {
        let values: Vec<_> = difficulty_options().iter().map(|o| o.value).collect();
        assert_eq!(values, vec!["easy", "medium", "hard"]);
    }

    #[test]
    fn invalid_fields_produce_messages() {
        assert_eq!(
            parse_params("", "3", "easy").unwrap_err(),
            "Quiz topic cannot be empty"
        );
        assert!(parse_params("Rust", "0", "easy").is_err());
        assert!(parse_params("Rust", "3", "impossible").is_err());
        assert_eq!(
            parse_params("Rust", "3", "hard").unwrap().question_count(),
            3
        );
    }
}
