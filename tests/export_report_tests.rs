//! Integration tests for the daily PDF report export.

mod support;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use harry_list::model::{BarLocation, ReservationStatus};
use support::*;

fn staff_get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, staff_auth())
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn report_streams_a_pdf_attachment() {
    let app = test_app();
    seed(
        &app.repo,
        "Annual Borrel",
        day(2026, 3, 15),
        BarLocation::Hubble,
        ReservationStatus::Confirmed,
    )
    .await;

    let (status, headers, body) = send_full(
        &app.router,
        staff_get("/api/admin/export/daily-report?date=2026-03-15&location=HUBBLE"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers.get("content-type").unwrap(), "application/pdf");
    assert_eq!(
        headers.get("content-disposition").unwrap(),
        "attachment; filename=reservations-hubble-2026-03-15.pdf"
    );
    assert!(headers
        .get("cache-control")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("no-store"));
    assert!(body.starts_with(b"%PDF"));
}

#[tokio::test]
async fn location_parameter_is_case_insensitive() {
    let app = test_app();
    let (status, headers, _) = send_full(
        &app.router,
        staff_get("/api/admin/export/daily-report?date=2026-03-15&location=meteor"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get("content-disposition").unwrap(),
        "attachment; filename=reservations-meteor-2026-03-15.pdf"
    );
}

#[tokio::test]
async fn empty_day_still_returns_a_document() {
    let app = test_app();
    let (status, body) = send(
        &app.router,
        staff_get("/api/admin/export/daily-report?date=2026-03-15&location=HUBBLE"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.is_empty());
    assert!(body.starts_with(b"%PDF"));
}

#[tokio::test]
async fn confirmed_only_defaults_to_true() {
    let app = test_app();
    seed(
        &app.repo,
        "Pending party",
        day(2026, 3, 15),
        BarLocation::Hubble,
        ReservationStatus::Pending,
    )
    .await;

    let (_, _, default_body) = send_full(
        &app.router,
        staff_get("/api/admin/export/daily-report?date=2026-03-15&location=HUBBLE"),
    )
    .await;
    let (_, _, lenient_body) = send_full(
        &app.router,
        staff_get(
            "/api/admin/export/daily-report?date=2026-03-15&location=HUBBLE&confirmedOnly=false",
        ),
    )
    .await;

    // With the default flag the pending reservation is filtered out, so
    // the lenient report must carry an extra card page.
    assert!(lenient_body.len() > default_body.len());
}

#[tokio::test]
async fn malformed_inputs_are_client_errors() {
    let app = test_app();

    let (status, _) = send(
        &app.router,
        staff_get("/api/admin/export/daily-report?date=15-03-2026&location=HUBBLE"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app.router,
        staff_get("/api/admin/export/daily-report?date=2026-03-15&location=SATURN"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn export_requires_staff_credentials() {
    let app = test_app();
    let (status, _) = get(
        &app.router,
        "/api/admin/export/daily-report?date=2026-03-15&location=HUBBLE",
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
