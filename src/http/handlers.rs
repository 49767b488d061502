//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an endpoint and delegates to the service
//! layer; DTO conversion and error mapping happen here.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use super::auth;
use super::dto::{
    CalendarFeedInfo, CalendarFeedsResponse, EmailRequest, EmailSendResponse, HealthResponse,
    OptionItem, ParameterInfo, ReservationDto, ReservationForm, SubmissionResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::mail::SendOutcome;
use crate::model::{
    BarLocation, DietaryPreference, EventType, LabeledEnum, OrganizerType, PaymentOption,
    ReservationStatus,
};
use crate::render::{self, FeedFilter, FeedMode};
use crate::service;

/// Result type for JSON handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

const NO_CACHE: &str = "no-cache, no-store, must-revalidate";

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailQuery {
    #[serde(default = "default_true")]
    pub send_email: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusQuery {
    pub status: String,
    pub confirmed_by: Option<String>,
    #[serde(default = "default_true")]
    pub send_email: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedQuery {
    pub token: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub upcoming_only: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    pub date: String,
    pub location: String,
    #[serde(default = "default_true")]
    pub confirmed_only: bool,
}

// =============================================================================
// Health
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let database = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {e}"),
    };
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        database,
    }))
}

// =============================================================================
// Public submission
// =============================================================================

/// POST /api/public/reservations
///
/// Anyone can submit a request; the response is a reduced payload that
/// never echoes internal fields.
pub async fn submit_reservation(
    State(state): State<AppState>,
    Json(form): Json<ReservationForm>,
) -> Result<(StatusCode, Json<SubmissionResponse>), AppError> {
    form.validate().map_err(|e| AppError::BadRequest(e.to_string()))?;

    let saved = service::create_reservation(
        state.repository.as_ref(),
        &state.notifier,
        form.into_draft(),
        true,
    )
    .await?;

    let response = SubmissionResponse {
        confirmation_code: saved.confirmation_code.clone(),
        event_title: saved.event_title.clone(),
        contact_name: saved.contact_name.clone(),
        email: saved.email.clone(),
        message: format!(
            "Your reservation request has been submitted successfully. \
             We will review your request and contact you at {} soon.",
            saved.email
        ),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

// =============================================================================
// Staff CRUD
// =============================================================================

/// GET /api/reservations
pub async fn list_reservations(
    State(state): State<AppState>,
) -> HandlerResult<Vec<ReservationDto>> {
    let reservations = state.repository.list().await?;
    tracing::debug!(count = reservations.len(), "listing reservations");
    Ok(Json(reservations.iter().map(ReservationDto::from).collect()))
}

/// GET /api/reservations/{id}
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<ReservationDto> {
    let reservation = state
        .repository
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("reservation {id}")))?;
    Ok(Json(ReservationDto::from(&reservation)))
}

/// POST /api/reservations
///
/// Staff creation on behalf of a requester; the record still starts out
/// `Pending`.
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(form): Json<ReservationForm>,
) -> Result<(StatusCode, Json<ReservationDto>), AppError> {
    form.validate().map_err(|e| AppError::BadRequest(e.to_string()))?;
    let saved = service::create_reservation(
        state.repository.as_ref(),
        &state.notifier,
        form.into_draft(),
        true,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(ReservationDto::from(&saved))))
}

/// PUT /api/reservations/{id}?sendEmail=
///
/// Full update; the server preserves existing status and creation
/// timestamp regardless of the payload.
pub async fn update_reservation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<SendEmailQuery>,
    Json(form): Json<ReservationForm>,
) -> HandlerResult<ReservationDto> {
    form.validate().map_err(|e| AppError::BadRequest(e.to_string()))?;
    let saved = service::update_reservation(
        state.repository.as_ref(),
        &state.notifier,
        id,
        form.into_draft(),
        query.send_email,
    )
    .await?;
    Ok(Json(ReservationDto::from(&saved)))
}

/// DELETE /api/reservations/{id}?sendEmail=
pub async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<SendEmailQuery>,
) -> Result<StatusCode, AppError> {
    service::delete_reservation(
        state.repository.as_ref(),
        &state.notifier,
        id,
        query.send_email,
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Staff lifecycle actions
// =============================================================================

/// PATCH /api/admin/reservations/{id}/status?status=&confirmedBy=&sendEmail=
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<StatusQuery>,
) -> HandlerResult<ReservationDto> {
    let status: ReservationStatus = query.status.parse().map_err(|_| {
        AppError::BadRequest(
            "Invalid status value. Use: PENDING, CONFIRMED, REJECTED, CANCELLED, COMPLETED"
                .to_string(),
        )
    })?;
    let saved = service::change_status(
        state.repository.as_ref(),
        &state.notifier,
        id,
        status,
        query.confirmed_by,
        query.send_email,
    )
    .await?;
    Ok(Json(ReservationDto::from(&saved)))
}

/// PATCH /api/admin/reservations/{id}/notes
///
/// Raw text body replaces the staff-only notes.
pub async fn update_notes(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    notes: String,
) -> HandlerResult<ReservationDto> {
    let saved = service::update_notes(state.repository.as_ref(), id, notes).await?;
    Ok(Json(ReservationDto::from(&saved)))
}

/// POST /api/admin/reservations/{id}/email
pub async fn send_custom_email(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<EmailRequest>,
) -> HandlerResult<EmailSendResponse> {
    let outcome = service::send_custom_email(
        state.repository.as_ref(),
        &state.notifier,
        id,
        &request.subject,
        &request.message,
    )
    .await?;

    let response = match outcome {
        SendOutcome::Sent => EmailSendResponse {
            status: "sent".to_string(),
            message: "Email sent successfully".to_string(),
        },
        SendOutcome::Disabled => EmailSendResponse {
            status: "disabled".to_string(),
            message: "Email service is not configured".to_string(),
        },
        SendOutcome::Error(detail) => EmailSendResponse {
            status: "error".to_string(),
            message: detail,
        },
    };
    Ok(Json(response))
}

// =============================================================================
// Calendar feeds
// =============================================================================

/// GET /api/calendar/feed.ics
///
/// Public feed without confidential fields. Token is only enforced when
/// one is configured.
pub async fn public_feed(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<Response, AppError> {
    if let Some(expected) = state.config.feed_token.as_deref() {
        if !auth::token_matches(query.token.as_deref(), expected) {
            return Err(AppError::Unauthorized("Invalid or missing token".to_string()));
        }
    }
    feed_response(&state, &query, FeedMode::Public, "reservations.ics").await
}

/// GET /api/calendar/staff-feed.ics
///
/// Staff feed with contact details. Requires its own token, distinct
/// from the public one; without a configured token the feed is off.
pub async fn staff_feed(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<Response, AppError> {
    let Some(expected) = state.config.staff_feed_token.as_deref() else {
        return Err(AppError::ServiceUnavailable("Staff feed not configured".to_string()));
    };
    if !auth::token_matches(query.token.as_deref(), expected) {
        return Err(AppError::Unauthorized("Invalid or missing staff token".to_string()));
    }
    feed_response(&state, &query, FeedMode::Staff, "staff-reservations.ics").await
}

async fn feed_response(
    state: &AppState,
    query: &FeedQuery,
    mode: FeedMode,
    filename: &str,
) -> Result<Response, AppError> {
    let filter = parse_filter(query)?;
    let reservations = state.repository.list().await?;
    let ics = render::render_feed(&reservations, &filter, mode);

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{filename}\""),
            ),
            (header::CACHE_CONTROL, NO_CACHE.to_string()),
            (header::PRAGMA, "no-cache".to_string()),
            (header::EXPIRES, "0".to_string()),
        ],
        ics,
    )
        .into_response())
}

fn parse_filter(query: &FeedQuery) -> Result<FeedFilter, AppError> {
    let mut statuses = Vec::new();
    if let Some(raw) = query.status.as_deref().filter(|s| !s.is_empty()) {
        for token in raw.split(',') {
            let status = token.trim().parse().map_err(|_| {
                AppError::BadRequest(
                    "Invalid status value. Use: PENDING, CONFIRMED, REJECTED, CANCELLED, COMPLETED"
                        .to_string(),
                )
            })?;
            statuses.push(status);
        }
    }
    Ok(FeedFilter {
        statuses,
        location: query.location.clone(),
        upcoming_only: query.upcoming_only,
    })
}

/// GET /api/calendar/info
///
/// Static subscription instructions.
pub async fn calendar_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "description": "Two calendar feeds available: public (no contact details) and staff (full details)",
        "publicFeed": {
            "url": "/api/calendar/feed.ics",
            "description": "Public feed - does NOT include email/phone for privacy",
            "example": "/api/calendar/feed.ics?token=PUBLIC_TOKEN",
        },
        "staffFeed": {
            "url": "/api/calendar/staff-feed.ics",
            "description": "Staff feed - includes ALL details including email/phone",
            "example": "/api/calendar/staff-feed.ics?token=STAFF_TOKEN",
        },
        "parameters": {
            "token": "Required authentication token",
            "status": "Optional: Filter by status (comma-separated: PENDING,CONFIRMED,REJECTED,CANCELLED)",
            "location": "Optional: Filter by location (HUBBLE or METEOR)",
            "upcomingOnly": "Optional: Set to true to only show upcoming events",
        },
        "instructions": {
            "googleCalendar": "Settings > Add calendar > From URL > Paste the feed URL",
            "outlook": "Add calendar > Subscribe from web > Paste the feed URL",
            "appleCalendar": "File > New Calendar Subscription > Paste the feed URL",
        },
    }))
}

/// GET /api/admin/calendar/feeds
///
/// Ready-to-subscribe feed URLs (staff/public, per venue) with tokens
/// embedded, or placeholders when a token is unconfigured.
pub async fn calendar_feeds(State(state): State<AppState>) -> HandlerResult<CalendarFeedsResponse> {
    let base = state.config.public_base_url.trim_end_matches('/');
    let mut feeds = Vec::new();

    for location in BarLocation::ALL {
        let venue = location.display_name();
        let token_param = location.token();

        feeds.push(match state.config.feed_token.as_deref() {
            Some(token) => CalendarFeedInfo {
                id: format!("public-{}", token_param.to_lowercase()),
                name: format!("Public Feed - {venue}"),
                description: "Event details without contact information (email/phone). Safe to share with external partners.".to_string(),
                url: Some(format!(
                    "{base}/api/calendar/feed.ics?token={token}&location={token_param}"
                )),
                has_token: true,
            },
            None => CalendarFeedInfo {
                id: format!("public-{}", token_param.to_lowercase()),
                name: format!("Public Feed - {venue}"),
                description: "Event details without contact information. Token not configured."
                    .to_string(),
                url: None,
                has_token: false,
            },
        });

        feeds.push(match state.config.staff_feed_token.as_deref() {
            Some(token) => CalendarFeedInfo {
                id: format!("staff-{}", token_param.to_lowercase()),
                name: format!("Staff Feed - {venue}"),
                description: "Full event details including contact information (email/phone). Only share with staff members.".to_string(),
                url: Some(format!(
                    "{base}/api/calendar/staff-feed.ics?token={token}&location={token_param}"
                )),
                has_token: true,
            },
            None => CalendarFeedInfo {
                id: format!("staff-{}", token_param.to_lowercase()),
                name: format!("Staff Feed - {venue}"),
                description: "Full event details including contact information. Token not configured.".to_string(),
                url: None,
                has_token: false,
            },
        });
    }

    let parameters = vec![
        ParameterInfo {
            name: "status".to_string(),
            description: "Filter by status: PENDING, CONFIRMED, REJECTED, CANCELLED (comma-separated)".to_string(),
            example: "?token=xxx&status=CONFIRMED".to_string(),
        },
        ParameterInfo {
            name: "location".to_string(),
            description: "Filter by location: HUBBLE or METEOR".to_string(),
            example: "?token=xxx&location=HUBBLE".to_string(),
        },
        ParameterInfo {
            name: "upcomingOnly".to_string(),
            description: "Only show future events".to_string(),
            example: "?token=xxx&upcomingOnly=true".to_string(),
        },
    ];

    Ok(Json(CalendarFeedsResponse { feeds, parameters }))
}

// =============================================================================
// Daily report export
// =============================================================================

/// GET /api/admin/export/daily-report?date=&location=&confirmedOnly=
///
/// Streams the PDF as an attachment. Malformed date or unknown location
/// are client errors; a renderer failure is a server error.
pub async fn daily_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Response, AppError> {
    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("unparseable date '{}'", query.date)))?;
    let location: BarLocation = query
        .location
        .parse()
        .map_err(|_| AppError::BadRequest(format!("unknown location '{}'", query.location)))?;

    let reservations = state.repository.list().await?;
    let pdf = render::generate_daily_report(&reservations, date, location, query.confirmed_only)?;

    let filename = format!(
        "reservations-{}-{}.pdf",
        location.token().to_lowercase(),
        date.format("%Y-%m-%d")
    );
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
            (header::CACHE_CONTROL, NO_CACHE.to_string()),
        ],
        pdf,
    )
        .into_response())
}

// =============================================================================
// Form options
// =============================================================================

fn enum_options<T: LabeledEnum>(variants: &[T]) -> Vec<OptionItem> {
    variants
        .iter()
        .map(|v| OptionItem {
            value: v.token().to_string(),
            label: v.display_name().to_string(),
        })
        .collect()
}

/// GET /api/options/event-types
pub async fn event_type_options() -> Json<Vec<OptionItem>> {
    Json(enum_options(EventType::ALL))
}

/// GET /api/options/organizer-types
pub async fn organizer_type_options() -> Json<Vec<OptionItem>> {
    Json(enum_options(OrganizerType::ALL))
}

/// GET /api/options/payment-options
pub async fn payment_options() -> Json<Vec<OptionItem>> {
    Json(enum_options(PaymentOption::ALL))
}

/// GET /api/options/locations
pub async fn location_options() -> Json<Vec<OptionItem>> {
    Json(enum_options(BarLocation::ALL))
}

/// GET /api/options/dietary-preferences
pub async fn dietary_preference_options() -> Json<Vec<OptionItem>> {
    Json(enum_options(DietaryPreference::ALL))
}

/// GET /api/options/all
pub async fn all_options() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "eventTypes": enum_options(EventType::ALL),
        "organizerTypes": enum_options(OrganizerType::ALL),
        "paymentOptions": enum_options(PaymentOption::ALL),
        "locations": enum_options(BarLocation::ALL),
        "dietaryPreferences": enum_options(DietaryPreference::ALL),
    }))
}
