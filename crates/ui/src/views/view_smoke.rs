use quiz_core::model::{Difficulty, Question, QuizResult, QuizSetup, UserId};
use quiz_core::time::fixed_clock;
use services::result_store::ResultStoreService;
use std::sync::Arc;

use super::test_harness::{HarnessConfig, ViewKind, setup_view_harness};

fn sample_setup() -> QuizSetup {
    QuizSetup::new("Capitals", Difficulty::Easy, 2).unwrap()
}

fn sample_result() -> QuizResult {
    let questions = vec![
        Question::new(
            "Capital of France?",
            vec!["Paris".to_string(), "Lyon".to_string()],
            "Paris",
        )
        .unwrap(),
        Question::new(
            "Capital of Italy?",
            vec!["Rome".to_string(), "Milan".to_string()],
            "Rome",
        )
        .unwrap(),
    ];
    let answers = vec!["Paris".to_string(), "Milan".to_string()];
    QuizResult::from_answers(questions, answers, 130).unwrap()
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_guest_note() {
    let mut harness = setup_view_harness(ViewKind::Home, HarnessConfig::default());
    harness.rebuild();
    harness.drive_async().await;
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Welcome"), "missing heading in {html}");
    assert!(
        html.contains("Playing as a guest"),
        "missing guest note in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn setup_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Setup, HarnessConfig::default());
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Set Up Your Quiz"), "missing title in {html}");
    assert!(html.contains("Topic"), "missing topic field in {html}");
    assert!(html.contains("easy"), "missing difficulty options in {html}");
    assert!(html.contains("Start Quiz"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question_and_timer() {
    let mut harness = setup_view_harness(ViewKind::Quiz, HarnessConfig::default());
    harness.handoff.put_setup(sample_setup());

    harness.rebuild();
    harness.drive_async().await;
    harness.rebuild();

    let html = harness.render();
    assert!(
        html.contains("Capital of France?"),
        "missing first question in {html}"
    );
    assert!(html.contains("1 of 2"), "missing progress in {html}");
    assert!(html.contains("01:00"), "missing timer in {html}");
    assert!(html.contains("Next Question"), "missing next button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_generation_error() {
    let config = HarnessConfig {
        questions: None,
        ..HarnessConfig::default()
    };
    let mut harness = setup_view_harness(ViewKind::Quiz, config);
    harness.handoff.put_setup(sample_setup());

    harness.rebuild();
    harness.drive_async().await;
    harness.rebuild();

    let html = harness.render();
    assert!(
        html.contains("Oops! Something went wrong"),
        "missing error heading in {html}"
    );
    assert!(html.contains("Try Again"), "missing retry cta in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_smoke_renders_score_and_review() {
    let mut harness = setup_view_harness(ViewKind::Result, HarnessConfig::default());
    harness.handoff.put_result(sample_result());

    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Quiz Complete!"), "missing heading in {html}");
    assert!(html.contains("50%"), "missing percentage in {html}");
    assert!(html.contains("1/2"), "missing score in {html}");
    assert!(html.contains("2m"), "missing time taken in {html}");
    assert!(
        html.contains("Capital of France?"),
        "missing review question in {html}"
    );
    assert!(
        html.contains("Take Another Quiz"),
        "missing retake cta in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_lists_saved_quizzes() {
    let user = UserId::random();
    let config = HarnessConfig {
        user_id: Some(user),
        ..HarnessConfig::default()
    };
    let mut harness = setup_view_harness(ViewKind::History, config);

    let store = ResultStoreService::new(fixed_clock(), Arc::clone(&harness.storage.results));
    store
        .save(user, &sample_setup(), &sample_result())
        .await
        .expect("save result");

    harness.rebuild();
    harness.drive_async().await;
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Capitals (easy)"), "missing row title in {html}");
    assert!(html.contains("1/2"), "missing score label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_prompts_anonymous_users() {
    let mut harness = setup_view_harness(ViewKind::History, HarnessConfig::default());
    harness.rebuild();
    harness.drive_async().await;
    harness.rebuild();

    let html = harness.render();
    assert!(
        html.contains("Sign in to keep your quiz history."),
        "missing sign-in prompt in {html}"
    );
}
