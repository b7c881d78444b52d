//! End-to-end controller flow against the scripted mock service.

use askara_client::{MockOutcome, MockStudyService, RecordedCall};
use askara_ui::{App, AppState, EntryStatus, View};
use std::sync::Arc;
use std::time::Instant;

fn app_with(outcomes: Vec<MockOutcome>) -> (App, MockStudyService) {
    let mock = MockStudyService::with_outcomes(outcomes);
    let app = App::new(AppState::default(), Arc::new(mock.clone()));
    (app, mock)
}

async fn pump(app: &mut App) {
    let event = app.recv_service_event().await.expect("service event");
    app.on_service_event(event, Instant::now());
}

fn type_draft(app: &mut App, text: &str) {
    for c in text.chars() {
        app.state_mut().session.input.insert_char(c);
    }
}

#[tokio::test]
async fn full_study_session() {
    let (mut app, mock) = app_with(vec![
        MockOutcome::text("**Q1** What is the derivative of x^2?"),
        MockOutcome::text("The derivative is `2x`."),
        MockOutcome::text("Differentiation measures the rate of change."),
        MockOutcome::text("**Q2** Integrate 2x dx."),
        MockOutcome::text("`x^2 + C`"),
    ]);

    // Landing until the first question lands.
    assert_eq!(app.state().view(), View::Landing);
    app.begin_generate_question();
    pump(&mut app).await;
    assert_eq!(app.state().view(), View::Study);

    // Reveal the answer to the first question.
    app.begin_reveal_answer();
    pump(&mut app).await;
    assert!(app.state().transcript.current_question_answered());

    // Ask a clarification about it.
    type_draft(&mut app, "why does the power drop?");
    app.submit_clarification(Instant::now());
    pump(&mut app).await;
    assert_eq!(app.state().session.clarification, "Differentiation measures the rate of change.");

    // Second exchange.
    app.begin_generate_question();
    pump(&mut app).await;
    assert!(!app.state().transcript.current_question_answered());
    app.begin_reveal_answer();
    pump(&mut app).await;

    // Transcript totals: 2 questions, 2 answers, 1 clarification pair.
    let transcript = &app.state().transcript;
    assert_eq!(transcript.question_count(), 2);
    assert_eq!(transcript.answer_count(), 2);
    assert_eq!(transcript.len(), 6);

    // With the default window of 2, the first exchange is now history.
    let pairs = transcript.history_pairs(app.state().display.history_window);
    assert_eq!(pairs.len(), 1);
    assert!(pairs[0].0.content.contains("Q1"));

    // The wire calls carried the right payloads, in order.
    let calls = mock.calls();
    assert_eq!(calls.len(), 5);
    assert!(matches!(&calls[0], RecordedCall::GenerateQuestion { paper_code } if paper_code == "MATH101"));
    assert!(matches!(&calls[1], RecordedCall::RevealAnswer { .. }));
    assert!(matches!(
        &calls[2],
        RecordedCall::Clarify { follow_up, question_id: Some(_) } if follow_up == "why does the power drop?"
    ));
}

#[tokio::test]
async fn failures_leave_the_session_usable() {
    let (mut app, _mock) = app_with(vec![
        MockOutcome::text("Q1"),
        MockOutcome::fail("answer service down"),
        MockOutcome::fail("clarify service down"),
        MockOutcome::text("A1 after retry"),
    ]);

    app.begin_generate_question();
    pump(&mut app).await;

    // Failed reveal: nothing appended, question still open.
    app.begin_reveal_answer();
    pump(&mut app).await;
    assert_eq!(app.state().transcript.answer_count(), 0);
    assert!(!app.state().transcript.current_question_answered());

    // Failed clarification: the optimistic entry stays, marked failed.
    type_draft(&mut app, "did you get this?");
    app.submit_clarification(Instant::now());
    pump(&mut app).await;
    let feed = app.state().transcript.recent_clarifications(8);
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].status, EntryStatus::Failed);

    // The reveal can simply be tried again.
    app.begin_reveal_answer();
    pump(&mut app).await;
    assert_eq!(app.state().session.answer, "A1 after retry");
    assert!(app.state().transcript.current_question_answered());
}

#[tokio::test]
async fn clear_during_inflight_request_discards_the_response() {
    let (mut app, _mock) = app_with(vec![MockOutcome::text("Q1"), MockOutcome::text("stale question")]);

    app.begin_generate_question();
    pump(&mut app).await;

    // A second request is in flight when the user clears the session.
    app.begin_generate_question();
    app.clear_history();
    pump(&mut app).await;

    assert!(app.state().transcript.is_empty());
    assert_eq!(app.state().view(), View::Landing);
    assert!(!app.state().session.is_generating());
}
