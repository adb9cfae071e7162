use dioxus::prelude::*;
use services::QuizError;

pub const FETCH_FAILED_HINT: &str =
    "Could not fetch questions. Please ensure your backend server is running and accessible.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    MissingParams,
    /// Transport failure, non-success status or an empty question list.
    FetchFailed,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Unknown => "Something went wrong. Please try again.",
            Self::MissingParams => "No quiz settings found. Please set up a quiz first.",
            Self::FetchFailed => FETCH_FAILED_HINT,
        }
    }

    #[must_use]
    pub fn from_quiz_error(err: &QuizError) -> Self {
        if !err.is_fatal() {
            return Self::Unknown;
        }
        match err {
            QuizError::MissingParam(_) | QuizError::Config(_) => Self::MissingParams,
            QuizError::Fetch(_) | QuizError::EmptyQuiz => Self::FetchFailed,
            _ => Self::Unknown,
        }
    }
}

/// A failed load: what to tell the user plus the underlying error text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadFailure {
    pub kind: ViewError,
    pub details: Option<String>,
}

impl LoadFailure {
    #[must_use]
    pub fn from_quiz_error(err: &QuizError) -> Self {
        Self {
            kind: ViewError::from_quiz_error(err),
            details: Some(err.to_string()),
        }
    }

    #[must_use]
    pub fn details_line(&self) -> Option<String> {
        self.details.as_ref().map(|details| format!("Details: {details}"))
    }
}

impl From<ViewError> for LoadFailure {
    fn from(kind: ViewError) -> Self {
        Self {
            kind,
            details: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T, E = ViewError> {
    Idle,
    Loading,
    Ready(T),
    Error(E),
}

#[must_use]
pub fn view_state_from_resource<T: Clone, E: Clone + From<ViewError>>(
    resource: &Resource<Result<T, E>>,
) -> ViewState<T, E> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Error(E::from(ViewError::Unknown)),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
