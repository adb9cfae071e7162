mod home;
mod quiz;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use quiz::{LOAD_ERROR_TITLE, LOADING_MESSAGE, QuizView};
pub use state::{FETCH_FAILED_HINT, LoadFailure, ViewError, ViewState, view_state_from_resource};
