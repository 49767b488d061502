//! Integration tests for the ICS feed endpoints: structure, filtering,
//! confidentiality and token gating.

mod support;

use axum::http::StatusCode;
use chrono::{Duration, Local};
use harry_list::mail::Notifier;
use harry_list::model::{BarLocation, ReservationStatus};
use support::*;

fn tokened_config() -> harry_list::config::AppConfig {
    let mut config = test_config();
    config.feed_token = Some("public-secret".to_string());
    config.staff_feed_token = Some("staff-secret".to_string());
    config
}

#[tokio::test]
async fn feed_renders_one_vevent_per_reservation() {
    let app = test_app();
    seed(&app.repo, "first", day(2026, 3, 15), BarLocation::Hubble, ReservationStatus::Pending)
        .await;
    seed(&app.repo, "second", day(2026, 3, 16), BarLocation::Meteor, ReservationStatus::Pending)
        .await;

    let (status, body) = get(&app.router, "/api/calendar/feed.ics").await;
    assert_eq!(status, StatusCode::OK);
    let ics = String::from_utf8(body).unwrap();

    assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(ics.ends_with("END:VCALENDAR\r\n"));
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
}

#[tokio::test]
async fn feed_content_type_and_cache_headers() {
    let app = test_app();
    let request = axum::http::Request::builder()
        .uri("/api/calendar/feed.ics")
        .body(axum::body::Body::empty())
        .unwrap();
    let (status, headers, _) = send_full(&app.router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get("content-type").unwrap(),
        "text/calendar; charset=utf-8"
    );
    assert!(headers
        .get("cache-control")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("no-store"));
}

#[tokio::test]
async fn public_feed_never_contains_confidential_fields() {
    let app = test_app();
    seed(&app.repo, "borrel", day(2026, 3, 15), BarLocation::Hubble, ReservationStatus::Pending)
        .await;

    let (_, body) = get(&app.router, "/api/calendar/feed.ics").await;
    let public = String::from_utf8(body).unwrap();
    assert!(!public.contains("john@example.com"));
    assert!(public.contains("(Contact details available in admin portal)"));
}

#[tokio::test]
async fn staff_feed_contains_confidential_fields() {
    let mut config = test_config();
    config.staff_feed_token = Some("staff-secret".to_string());
    let app = test_app_with(config, Notifier::disabled());
    seed(&app.repo, "borrel", day(2026, 3, 15), BarLocation::Hubble, ReservationStatus::Pending)
        .await;

    let (status, body) =
        get(&app.router, "/api/calendar/staff-feed.ics?token=staff-secret").await;
    assert_eq!(status, StatusCode::OK);
    let staff = String::from_utf8(body).unwrap();
    assert!(staff.contains("john@example.com"));
    assert!(staff.contains("Confidential Details:"));
}

#[tokio::test]
async fn example_scenario_location_and_status_filter() {
    // Two reservations, one CONFIRMED at HUBBLE, one PENDING at METEOR:
    // the filtered public feed contains exactly the HUBBLE one.
    let app = test_app();
    seed(
        &app.repo,
        "hubble confirmed",
        day(2026, 3, 15),
        BarLocation::Hubble,
        ReservationStatus::Confirmed,
    )
    .await;
    seed(
        &app.repo,
        "meteor pending",
        day(2026, 3, 15),
        BarLocation::Meteor,
        ReservationStatus::Pending,
    )
    .await;

    let (status, body) = get(
        &app.router,
        "/api/calendar/feed.ics?location=HUBBLE&status=CONFIRMED",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let ics = String::from_utf8(body).unwrap();
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
    assert!(ics.contains("hubble confirmed"));
    assert!(!ics.contains("meteor pending"));
}

#[tokio::test]
async fn location_filter_is_case_insensitive_end_to_end() {
    let app = test_app();
    seed(&app.repo, "hubble event", day(2026, 3, 15), BarLocation::Hubble, ReservationStatus::Pending)
        .await;
    seed(&app.repo, "meteor event", day(2026, 3, 15), BarLocation::Meteor, ReservationStatus::Pending)
        .await;

    let (_, lower) = get(&app.router, "/api/calendar/feed.ics?location=hubble").await;
    let (_, upper) = get(&app.router, "/api/calendar/feed.ics?location=HUBBLE").await;
    let lower = String::from_utf8(lower).unwrap();
    let upper = String::from_utf8(upper).unwrap();

    // DTSTAMP differs between the two renders; compare the event sets.
    assert_eq!(
        lower.matches("BEGIN:VEVENT").count(),
        upper.matches("BEGIN:VEVENT").count()
    );
    assert!(lower.contains("hubble event") && upper.contains("hubble event"));
    assert!(!lower.contains("meteor event") && !upper.contains("meteor event"));
}

#[tokio::test]
async fn upcoming_only_excludes_past_events() {
    let app = test_app();
    let today = Local::now().date_naive();
    let yesterday = today - Duration::days(1);

    seed(&app.repo, "yesterday event", yesterday, BarLocation::Hubble, ReservationStatus::Pending)
        .await;
    seed(&app.repo, "today event", today, BarLocation::Hubble, ReservationStatus::Pending).await;

    let (_, body) = get(&app.router, "/api/calendar/feed.ics?upcomingOnly=true").await;
    let ics = String::from_utf8(body).unwrap();

    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
    assert!(ics.contains("today event"));
    assert!(!ics.contains("yesterday event"));
}

#[tokio::test]
async fn invalid_status_filter_is_a_client_error() {
    let app = test_app();
    let (status, _) = get(&app.router, "/api/calendar/feed.ics?status=PARTYING").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn public_feed_token_is_enforced_when_configured() {
    let app = test_app_with(tokened_config(), Notifier::disabled());

    let (status, _) = get(&app.router, "/api/calendar/feed.ics").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = get(&app.router, "/api/calendar/feed.ics?token=wrong").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = get(&app.router, "/api/calendar/feed.ics?token=public-secret").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn staff_feed_requires_its_own_token() {
    let app = test_app_with(tokened_config(), Notifier::disabled());

    // The public token must not open the staff feed.
    let (status, _) =
        get(&app.router, "/api/calendar/staff-feed.ics?token=public-secret").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) =
        get(&app.router, "/api/calendar/staff-feed.ics?token=staff-secret").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn staff_feed_without_configured_token_is_unavailable() {
    let app = test_app();
    let (status, _) = get(&app.router, "/api/calendar/staff-feed.ics?token=anything").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn calendar_info_is_open() {
    let app = test_app();
    let (status, body) = get(&app.router, "/api/calendar/info").await;
    assert_eq!(status, StatusCode::OK);
    let json = json_body(&body).await;
    assert!(json["publicFeed"]["url"].as_str().unwrap().contains("feed.ics"));
}

#[tokio::test]
async fn admin_feed_listing_embeds_tokens_or_placeholders() {
    // Without tokens: placeholders.
    let app = test_app();
    let (status, body) = get_staff(&app.router, "/api/admin/calendar/feeds").await;
    assert_eq!(status, StatusCode::OK);
    let json = json_body(&body).await;
    let feeds = json["feeds"].as_array().unwrap();
    assert_eq!(feeds.len(), 4); // staff/public for each of the two venues
    assert!(feeds.iter().all(|f| f["hasToken"] == false && f["url"].is_null()));

    // With tokens: fully constructed URLs.
    let app = test_app_with(tokened_config(), Notifier::disabled());
    let (_, body) = get_staff(&app.router, "/api/admin/calendar/feeds").await;
    let json = json_body(&body).await;
    let feeds = json["feeds"].as_array().unwrap();
    assert!(feeds.iter().all(|f| f["hasToken"] == true));
    let urls: Vec<&str> = feeds.iter().map(|f| f["url"].as_str().unwrap()).collect();
    assert!(urls.iter().any(|u| u.contains("feed.ics?token=public-secret&location=HUBBLE")));
    assert!(urls
        .iter()
        .any(|u| u.contains("staff-feed.ics?token=staff-secret&location=METEOR")));

    // And the listing itself is staff-only.
    let (status, _) = get(&app.router, "/api/admin/calendar/feeds").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
