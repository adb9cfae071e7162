use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{DEFAULT_QUESTION_COUNT, difficulty_options, parse_params};

const NAVIGATION_DELAY: Duration = Duration::from_millis(500);

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut topic = use_signal(String::new);
    let mut num_questions = use_signal(|| DEFAULT_QUESTION_COUNT.to_string());
    let mut difficulty = use_signal(|| "medium".to_string());
    let mut form_error = use_signal(|| None::<String>);
    let mut preparing = use_signal(|| false);

    let on_submit = {
        let quiz_params = ctx.quiz_params();
        move |evt: FormEvent| {
            evt.prevent_default();
            if preparing() {
                return;
            }
            let config = match parse_params(&topic.read(), &num_questions.read(), &difficulty.read()) {
                Ok(config) => config,
                Err(message) => {
                    form_error.set(Some(message));
                    return;
                }
            };
            form_error.set(None);
            preparing.set(true);

            let quiz_params = quiz_params.clone();
            spawn(async move {
                if let Err(err) = quiz_params.save(&config).await {
                    tracing::error!(error = %err, "failed to store quiz parameters");
                    form_error.set(Some(ViewError::Unknown.message().to_string()));
                    preparing.set(false);
                    return;
                }
                tokio::time::sleep(NAVIGATION_DELAY).await;
                navigator.push(Route::Quiz {});
            });
        }
    };

    let options = difficulty_options();
    let is_preparing = preparing();

    rsx! {
        div { class: "page home-page",
            section { class: "quiz-setup",
                h2 { "Create a Quiz" }
                form { id: "quiz-params-form", onsubmit: on_submit,
                    label { r#for: "topic-title", "Topic" }
                    input {
                        id: "topic-title",
                        r#type: "text",
                        placeholder: "e.g. World History",
                        value: "{topic}",
                        oninput: move |evt| topic.set(evt.value()),
                    }
                    label { r#for: "num-questions", "Number of questions" }
                    input {
                        id: "num-questions",
                        r#type: "number",
                        min: "1",
                        value: "{num_questions}",
                        oninput: move |evt| num_questions.set(evt.value()),
                    }
                    label { r#for: "difficulty", "Difficulty" }
                    select {
                        id: "difficulty",
                        value: "{difficulty}",
                        onchange: move |evt| difficulty.set(evt.value()),
                        for level in options {
                            option { value: "{level.value}", "{level.label}" }
                        }
                    }
                    if let Some(message) = form_error() {
                        p { class: "form-error", "{message}" }
                    }
                    button {
                        class: "btn btn-primary",
                        id: "generate-btn",
                        r#type: "submit",
                        disabled: is_preparing,
                        "Generate Quiz"
                    }
                }
                if is_preparing {
                    div { class: "loading", id: "loadingIndicator", "Preparing your quiz..." }
                }
            }
        }
    }
}
