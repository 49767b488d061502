#![allow(dead_code)]

//! Shared helpers for the integration tests: a router wired to the
//! in-memory repository, request plumbing and seed data.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use base64::Engine as _;
use chrono::NaiveDate;
use tower::ServiceExt;

use harry_list::config::AppConfig;
use harry_list::db::LocalRepository;
// Re-exported so test files get the repository trait in scope via glob.
pub use harry_list::db::ReservationRepository;
use harry_list::http::{create_router, AppState};
use harry_list::mail::Notifier;
use harry_list::model::{
    BarLocation, EventType, OrganizerType, PaymentOption, Reservation, ReservationDraft,
    ReservationStatus,
};

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "test-password";

pub fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        admin_user: ADMIN_USER.to_string(),
        admin_password: ADMIN_PASSWORD.to_string(),
        feed_token: None,
        staff_feed_token: None,
        public_base_url: "http://localhost:8080".to_string(),
        organization_name: "The Harry List".to_string(),
        staff_email: "staff@hubble.cafe".to_string(),
        mail: None,
    }
}

pub struct TestApp {
    pub router: Router,
    pub repo: Arc<LocalRepository>,
}

/// App with default config and no mail transport.
pub fn test_app() -> TestApp {
    test_app_with(test_config(), Notifier::disabled())
}

pub fn test_app_with(config: AppConfig, notifier: Notifier) -> TestApp {
    let repo = Arc::new(LocalRepository::new());
    let state = AppState::new(repo.clone(), notifier, config);
    TestApp {
        router: create_router(state),
        repo,
    }
}

pub fn staff_auth() -> String {
    let encoded = base64::engine::general_purpose::STANDARD
        .encode(format!("{ADMIN_USER}:{ADMIN_PASSWORD}"));
    format!("Basic {encoded}")
}

/// Issue a request and return status plus raw body bytes.
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.clone().oneshot(request).await.expect("request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body read failed");
    (status, bytes.to_vec())
}

/// Issue a request and return status plus headers plus raw body bytes.
pub async fn send_full(
    router: &Router,
    request: Request<Body>,
) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = router.clone().oneshot(request).await.expect("request failed");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body read failed");
    (status, headers, bytes.to_vec())
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    send(router, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn get_staff(router: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    send(
        router,
        Request::builder()
            .uri(uri)
            .header(header::AUTHORIZATION, staff_auth())
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn json_body(bytes: &[u8]) -> serde_json::Value {
    serde_json::from_slice(bytes).expect("response was not JSON")
}

/// The example submission from the public form.
pub fn submission_json(title: &str) -> serde_json::Value {
    serde_json::json!({
        "contactName": "John Doe",
        "email": "john@example.com",
        "eventTitle": title,
        "eventType": "BORREL",
        "organizerType": "ASSOCIATION",
        "expectedGuests": 50,
        "eventDate": "2026-03-15",
        "startTime": "16:00",
        "endTime": "22:00",
        "location": "HUBBLE",
        "paymentOption": "INDIVIDUAL",
        "termsAccepted": true,
    })
}

pub fn draft(title: &str, event_date: NaiveDate, location: BarLocation) -> ReservationDraft {
    ReservationDraft {
        contact_name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        phone_number: None,
        organization_name: None,
        event_title: title.to_string(),
        description: None,
        event_type: EventType::Borrel,
        organizer_type: OrganizerType::Association,
        expected_guests: Some(50),
        event_date,
        start_time: chrono::NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
        end_time: chrono::NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        setup_time_minutes: None,
        location,
        seating_area: None,
        specific_area: None,
        payment_option: PaymentOption::Individual,
        cost_center: None,
        invoice_name: None,
        invoice_address: None,
        vat_number: None,
        food_required: None,
        dietary_preference: None,
        dietary_notes: None,
        drinks_included: None,
        budget_per_person: None,
        comments: None,
        terms_accepted: Some(true),
        referral_source: None,
    }
}

/// Insert a reservation directly into the store, optionally moving it to
/// a non-initial status.
pub async fn seed(
    repo: &LocalRepository,
    title: &str,
    event_date: NaiveDate,
    location: BarLocation,
    status: ReservationStatus,
) -> Reservation {
    let saved = repo.insert(draft(title, event_date, location)).await.unwrap();
    if status == ReservationStatus::Pending {
        saved
    } else {
        repo.set_status(saved.id, status, None).await.unwrap()
    }
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
