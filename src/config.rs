//! Environment-driven application configuration, read once at startup.

use crate::mail::graph::GraphConfig;

/// Runtime configuration.
///
/// Environment variables:
/// - `HOST` / `PORT`: bind address (default 0.0.0.0:8080)
/// - `ADMIN_USER` / `ADMIN_PASSWORD`: staff Basic-auth credentials
/// - `CALENDAR_FEED_TOKEN`: token for the public ICS feed; unset leaves
///   the public feed open
/// - `CALENDAR_STAFF_FEED_TOKEN`: token for the staff ICS feed; unset
///   disables the staff feed entirely
/// - `PUBLIC_BASE_URL`: base URL used when constructing subscription links
/// - `BAR_NAME`: display name used in emails
/// - `STAFF_EMAIL`: address receiving staff copies of new submissions
/// - `MAIL_ENABLED` plus `MAIL_GRAPH_TENANT_ID`, `MAIL_GRAPH_CLIENT_ID`,
///   `MAIL_GRAPH_CLIENT_SECRET`, `MAIL_FROM`: Microsoft Graph transport
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub admin_user: String,
    pub admin_password: String,
    pub feed_token: Option<String>,
    pub staff_feed_token: Option<String>,
    pub public_base_url: String,
    pub organization_name: String,
    pub staff_email: String,
    pub mail: Option<GraphConfig>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let feed_token = non_empty_var("CALENDAR_FEED_TOKEN");
        let mut staff_feed_token = non_empty_var("CALENDAR_STAFF_FEED_TOKEN");

        // The staff feed exposes contact details; a token shared with the
        // public feed would defeat the split.
        if staff_feed_token.is_some() && staff_feed_token == feed_token {
            tracing::warn!(
                "CALENDAR_STAFF_FEED_TOKEN equals CALENDAR_FEED_TOKEN; disabling the staff feed"
            );
            staff_feed_token = None;
        }

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            admin_user: std::env::var("ADMIN_USER").unwrap_or_else(|_| "admin".to_string()),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string()),
            feed_token,
            staff_feed_token,
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            organization_name: std::env::var("BAR_NAME")
                .unwrap_or_else(|_| "Hubble and Meteor Community Cafes".to_string()),
            staff_email: std::env::var("STAFF_EMAIL").unwrap_or_default(),
            mail: mail_from_env(),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// The Graph transport needs all four settings; a partial configuration
/// is treated as disabled.
fn mail_from_env() -> Option<GraphConfig> {
    let enabled = std::env::var("MAIL_ENABLED")
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if !enabled {
        return None;
    }

    let tenant_id = non_empty_var("MAIL_GRAPH_TENANT_ID");
    let client_id = non_empty_var("MAIL_GRAPH_CLIENT_ID");
    let client_secret = non_empty_var("MAIL_GRAPH_CLIENT_SECRET");
    let from_address = non_empty_var("MAIL_FROM");

    match (tenant_id, client_id, client_secret, from_address) {
        (Some(tenant_id), Some(client_id), Some(client_secret), Some(from_address)) => {
            Some(GraphConfig {
                tenant_id,
                client_id,
                client_secret,
                from_address,
            })
        }
        _ => {
            tracing::warn!("MAIL_ENABLED is set but the Graph settings are incomplete; mail stays disabled");
            None
        }
    }
}
