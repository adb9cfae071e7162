use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::model::QuizPhase;
use services::QuizError;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{LoadFailure, ViewState, view_state_from_resource};
use crate::vm::{
    QuestionScreenVm, QuizIntent, QuizScreenVm, QuizVm, ResultsVm, ReviewVm, ScoreBreakdownVm,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

pub const LOADING_MESSAGE: &str = "Generating your quiz...";
pub const LOAD_ERROR_TITLE: &str = "⚠️ Error Loading Quiz";

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz_loop = ctx.quiz_loop();
    let vm = use_signal(|| None::<QuizVm>);

    let resource = use_resource(move || {
        let quiz_loop = quiz_loop.clone();
        let mut vm = vm;
        async move {
            vm.set(None);
            let session = quiz_loop.start_from_params().await.map_err(|err| {
                tracing::warn!(error = %err, "quiz view failed to load");
                LoadFailure::from_quiz_error(&err)
            })?;
            vm.set(Some(QuizVm::new(session)));
            Ok::<_, LoadFailure>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut guard = vm.write();
        let Some(quiz) = guard.as_mut() else {
            return;
        };
        match quiz.dispatch(intent) {
            // The warning is part of the screen.
            Ok(_) | Err(QuizError::NoSelection) => {}
            Err(err) if err.is_fatal() => {
                tracing::error!(error = %err, ?intent, "quiz intent failed");
            }
            Err(err) => {
                tracing::warn!(error = %err, ?intent, "quiz intent rejected");
            }
        }
    });

    let on_play_again = use_callback(move |()| {
        let mut resource = resource;
        resource.restart();
    });
    let on_back = use_callback(move |()| {
        navigator.push(Route::Home {});
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, on_play_again);
            }
        }
    }

    let (phase, screen) = vm
        .read()
        .as_ref()
        .map_or((QuizPhase::Loading, None), |quiz| {
            (quiz.session().phase(), Some(quiz.screen()))
        });
    let body = match (state, screen) {
        (ViewState::Error(failure), _) => rsx! {
            LoadError { failure, on_back }
        },
        (ViewState::Ready(()), Some(QuizScreenVm::Question(screen))) => rsx! {
            QuestionCard { screen, on_intent: dispatch_intent }
        },
        (ViewState::Ready(()), Some(QuizScreenVm::Results(results))) => rsx! {
            ResultsPanel { results, on_intent: dispatch_intent, on_play_again, on_back }
        },
        (ViewState::Ready(()), Some(QuizScreenVm::Review(review))) => rsx! {
            ReviewPanel { review, on_intent: dispatch_intent }
        },
        _ => rsx! {
            div { class: "loading", id: "quiz-loading", "{LOADING_MESSAGE}" }
        },
    };

    rsx! {
        div { class: "page quiz-page", "data-phase": phase.as_str(), {body} }
    }
}

#[component]
fn LoadError(failure: LoadFailure, on_back: Callback<()>) -> Element {
    let details = failure.details_line();
    rsx! {
        div { class: "error-panel", id: "quiz-error",
            h2 { "{LOAD_ERROR_TITLE}" }
            p { "{failure.kind.message()}" }
            if let Some(details) = details {
                p { class: "error-details", "{details}" }
            }
            button {
                class: "btn btn-secondary",
                id: "back-btn",
                r#type: "button",
                onclick: move |_| on_back.call(()),
                "Back to Setup"
            }
        }
    }
}

#[component]
fn QuestionCard(screen: QuestionScreenVm, on_intent: Callback<QuizIntent>) -> Element {
    let primary_intent = screen.primary.intent;
    rsx! {
        div { class: "quiz-card",
            h2 { class: "quiz-title", "{screen.title}" }
            p { class: "quiz-progress", id: "quiz-progress", "{screen.progress_label}" }
            div { id: "question-container",
                p { class: "question-text", "{screen.prompt}" }
                div { class: "options",
                    {screen.options.iter().map(|option| {
                        let index = option.index;
                        rsx! {
                            button {
                                key: "{index}",
                                class: "{option.class}",
                                r#type: "button",
                                disabled: option.locked,
                                onclick: move |_| on_intent.call(QuizIntent::Select(index)),
                                "{option.text}"
                            }
                        }
                    })}
                }
            }
            if let Some(warning) = screen.warning {
                p { class: "warning", id: "selection-warning", "{warning}" }
            }
            if let Some(feedback) = screen.feedback.as_ref() {
                div { class: "{feedback.class}", id: "feedback",
                    p { class: "feedback-text", "{feedback.text}" }
                    p { class: "explanation", "{feedback.explanation}" }
                }
            }
            button {
                class: "btn btn-primary",
                id: "submit-btn",
                r#type: "button",
                onclick: move |_| on_intent.call(primary_intent),
                "{screen.primary.label}"
            }
        }
    }
}

#[component]
fn ResultsPanel(
    results: ResultsVm,
    on_intent: Callback<QuizIntent>,
    on_play_again: Callback<()>,
    on_back: Callback<()>,
) -> Element {
    rsx! {
        div { class: "results", id: "results-container",
            h2 { "Quiz Complete!" }
            p { class: "score", id: "score-text", "{results.summary}" }
            ScoreChart { breakdown: results.breakdown.clone() }
            div { class: "results-actions",
                button {
                    class: "btn btn-secondary",
                    id: "review-btn",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::OpenReview),
                    "Review Answers"
                }
                button {
                    class: "btn btn-primary",
                    id: "play-again-btn",
                    r#type: "button",
                    onclick: move |_| on_play_again.call(()),
                    "Play Again"
                }
                button {
                    class: "btn btn-secondary",
                    id: "back-btn",
                    r#type: "button",
                    onclick: move |_| on_back.call(()),
                    "Back to Setup"
                }
            }
        }
    }
}

#[component]
fn ScoreChart(breakdown: ScoreBreakdownVm) -> Element {
    rsx! {
        div { class: "score-chart", id: "score-chart",
            div { class: "score-bar",
                div { class: "score-bar__correct", style: "width: {breakdown.correct_share}%" }
                div { class: "score-bar__incorrect", style: "width: {breakdown.incorrect_share}%" }
            }
            div { class: "score-legend",
                span { class: "legend-correct", "Correct: {breakdown.correct}" }
                span { class: "legend-incorrect", "Incorrect: {breakdown.incorrect}" }
            }
        }
    }
}

#[component]
fn ReviewPanel(review: ReviewVm, on_intent: Callback<QuizIntent>) -> Element {
    rsx! {
        div { class: "review", id: "review-container",
            h2 { "Review Answers" }
            {review.items.iter().enumerate().map(|(position, item)| rsx! {
                div { key: "{position}", class: "{item.class}",
                    h3 { "{item.heading}" }
                    p { "Your answer: {item.user_answer}" }
                    p { "Correct answer: {item.correct_answer}" }
                    p { class: "explanation", "Explanation: {item.explanation}" }
                }
            })}
            button {
                class: "btn btn-secondary",
                id: "back-to-results-btn",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::CloseReview),
                "Back to Results"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    play_again: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, play_again: Callback<()>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.play_again.borrow_mut() = Some(play_again);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn play_again(&self) -> Callback<()> {
        (*self.play_again.borrow()).expect("quiz play again registered")
    }
}
