use super::*;
use crate::model::fixtures;

#[tokio::test]
async fn insert_assigns_identity_and_lifecycle_columns() {
    let repo = LocalRepository::new();
    let saved = repo.insert(fixtures::draft("Annual Borrel")).await.unwrap();

    assert_eq!(saved.id, 1);
    assert_eq!(saved.confirmation_code.len(), 6);
    assert_eq!(saved.status, ReservationStatus::Pending);
    assert_eq!(saved.created_at, saved.updated_at);
    assert!(saved.internal_notes.is_none());
    assert!(saved.confirmed_by.is_none());
}

#[tokio::test]
async fn list_returns_rows_in_insertion_order() {
    let repo = LocalRepository::new();
    repo.insert(fixtures::draft("first")).await.unwrap();
    repo.insert(fixtures::draft("second")).await.unwrap();
    repo.insert(fixtures::draft("third")).await.unwrap();

    let titles: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.event_title)
        .collect();
    assert_eq!(titles, ["first", "second", "third"]);
}

#[tokio::test]
async fn update_preserves_store_owned_columns() {
    let repo = LocalRepository::new();
    let saved = repo.insert(fixtures::draft("before")).await.unwrap();
    repo.set_status(saved.id, ReservationStatus::Confirmed, None)
        .await
        .unwrap();

    let mut replacement = fixtures::draft("after");
    replacement.contact_name = "Someone Else".to_string();
    let updated = repo.update(saved.id, replacement).await.unwrap();

    assert_eq!(updated.event_title, "after");
    assert_eq!(updated.contact_name, "Someone Else");
    // The draft cannot touch status, code or creation time.
    assert_eq!(updated.status, ReservationStatus::Confirmed);
    assert_eq!(updated.confirmation_code, saved.confirmation_code);
    assert_eq!(updated.created_at, saved.created_at);
    assert!(updated.updated_at >= saved.updated_at);
}

#[tokio::test]
async fn set_status_records_confirming_staff_only_on_confirm() {
    let repo = LocalRepository::new();
    let saved = repo.insert(fixtures::draft("borrel")).await.unwrap();

    let rejected = repo
        .set_status(saved.id, ReservationStatus::Rejected, Some("Alex".to_string()))
        .await
        .unwrap();
    assert!(rejected.confirmed_by.is_none());

    let confirmed = repo
        .set_status(saved.id, ReservationStatus::Confirmed, Some("Alex".to_string()))
        .await
        .unwrap();
    assert_eq!(confirmed.confirmed_by.as_deref(), Some("Alex"));
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let repo = LocalRepository::new();

    assert!(repo.find(42).await.unwrap().is_none());
    assert!(repo.delete(42).await.unwrap_err().is_not_found());
    assert!(repo
        .update(42, fixtures::draft("ghost"))
        .await
        .unwrap_err()
        .is_not_found());
    assert!(repo
        .set_status(42, ReservationStatus::Confirmed, None)
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn delete_removes_the_row() {
    let repo = LocalRepository::new();
    let saved = repo.insert(fixtures::draft("gone soon")).await.unwrap();

    repo.delete(saved.id).await.unwrap();
    assert!(repo.find(saved.id).await.unwrap().is_none());
    assert!(repo.is_empty());
}

#[tokio::test]
async fn set_internal_notes_replaces_notes() {
    let repo = LocalRepository::new();
    let saved = repo.insert(fixtures::draft("borrel")).await.unwrap();

    let updated = repo
        .set_internal_notes(saved.id, "deposit received".to_string())
        .await
        .unwrap();
    assert_eq!(updated.internal_notes.as_deref(), Some("deposit received"));
}
