use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;

pub const APP_TITLE: &str = "QuizGen";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{APP_TITLE}" }

        div { class: "quiz-app",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! { RenderFailure { details: format!("{errors:?}") } },
                Router::<Route> {}
            }
        }
    }
}

/// Last-resort panel for render errors that escape a view.
#[component]
fn RenderFailure(details: String) -> Element {
    tracing::error!(%details, "unhandled render error");
    rsx! {
        div { class: "fatal",
            h1 { "Something went wrong" }
            p { "Reload the window to start a new quiz." }
            pre { "{details}" }
        }
    }
}
