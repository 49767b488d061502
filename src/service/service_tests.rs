use std::sync::Arc;

use parking_lot::Mutex;

use super::*;
use crate::db::LocalRepository;
use crate::mail::{MailError, Mailer, Notifier};
use crate::model::fixtures;

/// Transport double that records sends or fails on demand.
struct StubMailer {
    sent: Arc<Mutex<Vec<(String, String)>>>,
    fail: bool,
}

#[async_trait::async_trait]
impl Mailer for StubMailer {
    async fn send(&self, to: &str, subject: &str, _html_body: &str) -> Result<(), MailError> {
        if self.fail {
            return Err(MailError::Rejected("stub failure".to_string()));
        }
        self.sent.lock().push((to.to_string(), subject.to_string()));
        Ok(())
    }
}

fn recording_notifier() -> (Notifier, Arc<Mutex<Vec<(String, String)>>>) {
    let sent = Arc::new(Mutex::new(Vec::new()));
    let mailer = StubMailer {
        sent: Arc::clone(&sent),
        fail: false,
    };
    let notifier = Notifier::new(Some(Arc::new(mailer)), "The Harry List", "staff@hubble.cafe");
    (notifier, sent)
}

fn failing_notifier() -> Notifier {
    let mailer = StubMailer {
        sent: Arc::new(Mutex::new(Vec::new())),
        fail: true,
    };
    Notifier::new(Some(Arc::new(mailer)), "The Harry List", "staff@hubble.cafe")
}

#[tokio::test]
async fn create_forces_pending_status() {
    let repo = LocalRepository::new();
    let saved = create_reservation(&repo, &Notifier::disabled(), fixtures::draft("borrel"), true)
        .await
        .unwrap();
    assert_eq!(saved.status, ReservationStatus::Pending);
}

#[tokio::test]
async fn change_status_on_unknown_id_is_not_found() {
    let repo = LocalRepository::new();
    let err = change_status(
        &repo,
        &Notifier::disabled(),
        99,
        ReservationStatus::Confirmed,
        None,
        true,
    )
    .await
    .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn notification_failure_does_not_fail_the_mutation() {
    let repo = LocalRepository::new();
    let notifier = failing_notifier();
    let saved = create_reservation(&repo, &notifier, fixtures::draft("borrel"), true)
        .await
        .unwrap();

    let confirmed = change_status(
        &repo,
        &notifier,
        saved.id,
        ReservationStatus::Confirmed,
        Some("Alex".to_string()),
        true,
    )
    .await
    .unwrap();
    assert_eq!(confirmed.status, ReservationStatus::Confirmed);

    delete_reservation(&repo, &notifier, saved.id, true)
        .await
        .unwrap();
    assert!(repo.find(saved.id).await.unwrap().is_none());
}

#[tokio::test]
async fn custom_email_reports_the_tri_state_outcome() {
    let repo = LocalRepository::new();
    let saved = create_reservation(&repo, &Notifier::disabled(), fixtures::draft("borrel"), false)
        .await
        .unwrap();

    // Disabled: no transport configured.
    let outcome = send_custom_email(&repo, &Notifier::disabled(), saved.id, "Hi", "msg")
        .await
        .unwrap();
    assert_eq!(outcome, SendOutcome::Disabled);

    // Sent.
    let (notifier, sent) = recording_notifier();
    let outcome = send_custom_email(&repo, &notifier, saved.id, "Hi", "msg")
        .await
        .unwrap();
    assert_eq!(outcome, SendOutcome::Sent);
    assert_eq!(sent.lock().len(), 1);
    assert_eq!(sent.lock()[0].0, "john@example.com");

    // Error: transport configured but delivery failed.
    let outcome = send_custom_email(&repo, &failing_notifier(), saved.id, "Hi", "msg")
        .await
        .unwrap();
    assert!(matches!(outcome, SendOutcome::Error(_)));

    // Unknown reservation: not found, nothing attempted.
    let err = send_custom_email(&repo, &Notifier::disabled(), 99, "Hi", "msg")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn delete_on_unknown_id_sends_nothing() {
    let repo = LocalRepository::new();
    let (notifier, sent) = recording_notifier();
    let err = delete_reservation(&repo, &notifier, 42, true).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(sent.lock().is_empty());
}
