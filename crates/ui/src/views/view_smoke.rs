use services::{FixedQuestionSource, StatusCode};

use super::test_harness::{ViewKind, history_config, history_questions, setup_view_harness};
use crate::vm::QuizIntent;

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_parameter_form() {
    let mut harness =
        setup_view_harness(ViewKind::Home, FixedQuestionSource::new(Vec::new()), None).await;
    harness.rebuild();
    let html = harness.render();

    for id in ["topic-title", "num-questions", "difficulty", "generate-btn"] {
        assert!(html.contains(id), "missing {id} in {html}");
    }
    assert!(html.contains("Medium"), "missing difficulty label in {html}");
    assert!(!html.contains("loadingIndicator"), "unexpected loader in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        FixedQuestionSource::new(history_questions()),
        Some(history_config()),
    )
    .await;
    harness.rebuild();
    let html = harness.drive_until("Question 1 of 3").await;

    assert!(html.contains("Question 1 of 3"), "missing progress in {html}");
    assert!(html.contains("History Quiz (Easy)"), "missing title in {html}");
    assert!(html.contains("Who was the first Roman emperor?"), "missing prompt in {html}");
    assert!(html.contains("submit-btn"), "missing submit in {html}");
    assert_eq!(harness.source.requests(), vec![history_config()]);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_plays_through_to_results() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        FixedQuestionSource::new(history_questions()),
        Some(history_config()),
    )
    .await;
    harness.rebuild();
    harness.drive_until("Question 1 of 3").await;

    harness.dispatch(QuizIntent::Submit);
    let html = harness.render();
    assert!(html.contains("Please select an answer!"), "missing warning in {html}");
    assert!(html.contains("Question 1 of 3"), "progress moved in {html}");

    harness.dispatch(QuizIntent::Select(0));
    harness.dispatch(QuizIntent::Submit);
    let html = harness.render();
    assert!(html.contains("✅ Correct!"), "missing feedback in {html}");
    assert!(html.contains("Next Question"), "missing next label in {html}");

    harness.dispatch(QuizIntent::Advance);
    harness.dispatch(QuizIntent::Select(0));
    harness.dispatch(QuizIntent::Submit);
    let html = harness.render();
    assert!(
        html.contains("❌ Wrong! Correct answer was: 1945"),
        "missing wrong feedback in {html}"
    );
    assert!(html.contains("No explanation provided."), "missing placeholder in {html}");

    harness.dispatch(QuizIntent::Advance);
    harness.dispatch(QuizIntent::Select(1));
    harness.dispatch(QuizIntent::Submit);
    assert!(harness.render().contains("Finish Quiz"));

    harness.dispatch(QuizIntent::Advance);
    let html = harness.render();
    assert!(
        html.contains("You scored 2 out of 3! (67%)"),
        "missing summary in {html}"
    );

    harness.dispatch(QuizIntent::OpenReview);
    let html = harness.render();
    assert!(html.contains("Q2: In which year did WW2 end?"), "missing review in {html}");
    assert!(html.contains("Your answer: 1944"), "missing user answer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_error_panel_on_server_failure() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        FixedQuestionSource::failing(StatusCode::INTERNAL_SERVER_ERROR),
        Some(history_config()),
    )
    .await;
    harness.rebuild();
    let html = harness.drive_until("Error Loading Quiz").await;

    assert!(html.contains("Error Loading Quiz"), "missing error title in {html}");
    assert!(
        html.contains("Please ensure your backend server is running and accessible."),
        "missing hint in {html}"
    );
    assert!(!html.contains("submit-btn"), "submit should be hidden in {html}");
    assert!(!html.contains("Question 1 of"), "no question expected in {html}");
    assert!(html.contains(r#"data-phase="loading""#), "phase moved in {html}");
    assert!(html.contains("Details: could not fetch questions"), "missing details in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_reports_empty_reply_like_a_fetch_failure() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        FixedQuestionSource::new(Vec::new()),
        Some(history_config()),
    )
    .await;
    harness.rebuild();
    let html = harness.drive_until("Error Loading Quiz").await;

    assert!(
        html.contains("Please ensure your backend server is running and accessible."),
        "missing hint in {html}"
    );
    assert!(
        html.contains("Details: no questions were returned by the generator"),
        "missing details in {html}"
    );
    assert!(!html.contains("submit-btn"), "submit should be hidden in {html}");
    assert!(html.contains(r#"data-phase="loading""#), "phase moved in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_play_again_refetches_a_fresh_session() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        FixedQuestionSource::new(history_questions()),
        Some(history_config()),
    )
    .await;
    harness.rebuild();
    harness.drive_until("Question 1 of 3").await;

    for option in [0, 1, 1] {
        harness.dispatch(QuizIntent::Select(option));
        harness.dispatch(QuizIntent::Submit);
        harness.dispatch(QuizIntent::Advance);
    }
    let html = harness.render();
    assert!(html.contains("You scored 3 out of 3! (100%)"), "missing summary in {html}");
    assert!(html.contains(r#"data-phase="finished""#), "wrong phase in {html}");

    harness.play_again();
    let html = harness.drive_until("Question 1 of 3").await;

    assert_eq!(harness.source.requests().len(), 2);
    assert!(html.contains("Question 1 of 3"), "missing first question in {html}");
    assert!(html.contains(r#"data-phase="active""#), "wrong phase in {html}");
    assert!(!html.contains("option selected"), "selection carried over in {html}");
    assert!(!html.contains("feedback"), "feedback carried over in {html}");
    assert!(html.contains(">Submit<"), "submit label not reset in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_reports_missing_params() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        FixedQuestionSource::new(history_questions()),
        None,
    )
    .await;
    harness.rebuild();
    let html = harness.drive_until("No quiz settings found").await;

    assert!(html.contains("No quiz settings found"), "missing message in {html}");
    assert!(harness.source.requests().is_empty());
}
