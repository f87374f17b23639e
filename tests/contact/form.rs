use std::{sync::Arc, time::Duration};

use folio::contact::{
    ContactErrorKind, ContactField, ContactForm, ContactPhase, ContactSubmission, ContactTiming,
    LogContactSink,
};
use tokio::time::Instant;

use crate::{FailingSink, RecordingSink, form_with, valid_submission};

#[tokio::test(start_paused = true)]
async fn given_valid_fields_when_submitting_then_delivered_after_delay_and_submitted() {
    let sink = Arc::new(RecordingSink::default());
    let mut form = form_with(sink.clone());
    form.fill(valid_submission()).expect("idle form should accept fields");
    assert_eq!(form.phase(), ContactPhase::Idle);

    let started = Instant::now();
    let receipt = form.submit().await.expect("valid submission should succeed");

    assert_eq!(form.phase(), ContactPhase::Submitted);
    assert!(started.elapsed() >= Duration::from_millis(1_000));
    assert!(!receipt.receipt_id.is_empty());
    assert_eq!(receipt.submission.name, "Visitor");

    let delivered = sink.delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0], receipt);
    let (_, delivered_at) = sink.receipts.lock().expect("lock")[0].clone();
    assert!(delivered_at.duration_since(started) >= Duration::from_millis(1_000));
}

#[tokio::test(start_paused = true)]
async fn given_submitted_form_when_settling_then_idle_and_cleared_after_reset_delay() {
    let mut form = form_with(Arc::new(LogContactSink));
    form.fill(valid_submission()).expect("idle form should accept fields");
    form.submit().await.expect("valid submission should succeed");

    let started = Instant::now();
    form.settle().await.expect("submitted form should settle");

    assert!(started.elapsed() >= Duration::from_millis(3_000));
    assert_eq!(form.phase(), ContactPhase::Idle);
    assert_eq!(form.fields(), &ContactSubmission::default());
}

#[tokio::test(start_paused = true)]
async fn given_invalid_fields_when_submitting_then_validation_error_and_still_idle() {
    let sink = Arc::new(RecordingSink::default());
    let mut form = form_with(sink.clone());
    form.update_field(ContactField::Email, "not-an-email")
        .expect("idle form should accept edits");
    form.update_field(ContactField::Subject, "Hi")
        .expect("idle form should accept edits");
    form.update_field(ContactField::Message, "   ")
        .expect("idle form should accept edits");

    let started = Instant::now();
    let err = form.submit().await.expect_err("invalid fields must be rejected");

    assert_eq!(err.kind, ContactErrorKind::Validation);
    let fields: Vec<&str> = err.field_errors.iter().map(|error| error.field.as_str()).collect();
    assert_eq!(fields, vec!["name", "email", "message"]);
    assert_eq!(err.field_message("email"), Some("email address is invalid"));
    assert_eq!(form.phase(), ContactPhase::Idle);
    assert_eq!(form.fields().subject, "Hi");
    assert_eq!(started.elapsed(), Duration::ZERO);
    assert!(sink.delivered().is_empty());
}

#[tokio::test(start_paused = true)]
async fn given_failing_sink_when_submitting_then_delivery_error_and_fields_kept() {
    let mut form = form_with(Arc::new(FailingSink));
    form.fill(valid_submission()).expect("idle form should accept fields");

    let err = form.submit().await.expect_err("sink failure must surface");

    assert_eq!(err.kind, ContactErrorKind::Delivery);
    assert_eq!(form.phase(), ContactPhase::Idle);
    assert_eq!(form.fields(), &valid_submission());
}

#[tokio::test(start_paused = true)]
async fn given_submit_cancelled_during_delay_when_resubmitting_then_form_is_idle_again() {
    let sink = Arc::new(RecordingSink::default());
    let mut form = form_with(sink.clone());
    form.fill(valid_submission()).expect("idle form should accept fields");

    let cancelled = tokio::time::timeout(Duration::from_millis(500), form.submit()).await;

    assert!(cancelled.is_err());
    assert_eq!(form.phase(), ContactPhase::Idle);
    assert!(sink.delivered().is_empty());
    assert_eq!(form.fields(), &valid_submission());

    form.submit().await.expect("form should accept a new submit after cancellation");
    assert_eq!(form.phase(), ContactPhase::Submitted);
    assert_eq!(sink.delivered().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn given_submitted_form_when_editing_or_resubmitting_then_invalid_state() {
    let mut form = form_with(Arc::new(LogContactSink));
    form.fill(valid_submission()).expect("idle form should accept fields");
    form.submit().await.expect("valid submission should succeed");

    let edit = form
        .update_field(ContactField::Name, "Other")
        .expect_err("submitted form must not accept edits");
    assert_eq!(edit.kind, ContactErrorKind::InvalidState);

    let resubmit = form.submit().await.expect_err("submitted form must not resubmit");
    assert_eq!(resubmit.kind, ContactErrorKind::InvalidState);
}

#[tokio::test(start_paused = true)]
async fn given_idle_form_when_settling_then_invalid_state() {
    let mut form = form_with(Arc::new(LogContactSink));

    let err = form.settle().await.expect_err("idle form has nothing to settle");
    assert_eq!(err.kind, ContactErrorKind::InvalidState);
}

#[tokio::test(start_paused = true)]
async fn given_custom_timing_when_submitting_then_configured_delay_is_used() {
    let timing = ContactTiming {
        submit_delay: Duration::from_millis(250),
        reset_delay: Duration::from_millis(500),
    };
    let mut form = ContactForm::new(timing, Arc::new(LogContactSink));
    form.fill(valid_submission()).expect("idle form should accept fields");

    let started = Instant::now();
    form.submit().await.expect("valid submission should succeed");
    let elapsed = started.elapsed();

    assert!(elapsed >= Duration::from_millis(250));
    assert!(elapsed < Duration::from_millis(1_000));
    assert_eq!(form.timing(), timing);
}
