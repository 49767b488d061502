//! Router configuration for the HTTP API.
//!
//! Three access tiers: open routes (public submission, options, calendar
//! info), token-gated feeds (checked inside the handlers) and staff
//! routes behind the Basic-auth middleware.

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::auth;
use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let open_routes = Router::new()
        .route("/public/reservations", post(handlers::submit_reservation))
        .route("/calendar/feed.ics", get(handlers::public_feed))
        .route("/calendar/staff-feed.ics", get(handlers::staff_feed))
        .route("/calendar/info", get(handlers::calendar_info))
        .route("/options/event-types", get(handlers::event_type_options))
        .route("/options/organizer-types", get(handlers::organizer_type_options))
        .route("/options/payment-options", get(handlers::payment_options))
        .route("/options/locations", get(handlers::location_options))
        .route("/options/dietary-preferences", get(handlers::dietary_preference_options))
        .route("/options/all", get(handlers::all_options));

    let staff_routes = Router::new()
        .route(
            "/reservations",
            get(handlers::list_reservations).post(handlers::create_reservation),
        )
        .route(
            "/reservations/{id}",
            get(handlers::get_reservation)
                .put(handlers::update_reservation)
                .delete(handlers::delete_reservation),
        )
        .route("/admin/reservations/{id}/status", patch(handlers::update_status))
        .route("/admin/reservations/{id}/notes", patch(handlers::update_notes))
        .route("/admin/reservations/{id}/email", post(handlers::send_custom_email))
        .route("/admin/calendar/feeds", get(handlers::calendar_feeds))
        .route("/admin/export/daily-report", get(handlers::daily_report))
        .layer(middleware::from_fn_with_state(state.clone(), auth::require_staff));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", open_routes.merge(staff_routes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
