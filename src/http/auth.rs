//! Authentication for the staff tier and the token-gated feeds.
//!
//! Staff routes use HTTP Basic auth against the configured credentials;
//! the calendar feeds use a shared-secret query token. Both comparisons
//! are constant-time so a mismatch position cannot be measured.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use base64::Engine as _;
use constant_time_eq::constant_time_eq;

use super::error::AppError;
use super::state::AppState;

/// Basic-auth guard layered over the staff routes. Rejects before any
/// business logic runs.
pub async fn require_staff(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let credentials = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Basic "))
        .and_then(decode_basic);

    let Some((user, password)) = credentials else {
        return Err(AppError::Unauthorized("missing credentials".to_string()));
    };

    let config = &state.config;
    // Non-short-circuiting: both fields are always compared.
    let ok = constant_time_eq(user.as_bytes(), config.admin_user.as_bytes())
        & constant_time_eq(password.as_bytes(), config.admin_password.as_bytes());
    if !ok {
        return Err(AppError::Unauthorized("invalid credentials".to_string()));
    }

    Ok(next.run(request).await)
}

fn decode_basic(encoded: &str) -> Option<(String, String)> {
    let decoded = base64::engine::general_purpose::STANDARD.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, password) = decoded.split_once(':')?;
    Some((user.to_string(), password.to_string()))
}

/// Compare a presented feed token against the configured one.
pub fn token_matches(presented: Option<&str>, expected: &str) -> bool {
    match presented {
        Some(token) => constant_time_eq(token.as_bytes(), expected.as_bytes()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_basic_splits_user_and_password() {
        let encoded = base64::engine::general_purpose::STANDARD.encode("admin:secret");
        assert_eq!(
            decode_basic(&encoded),
            Some(("admin".to_string(), "secret".to_string()))
        );
    }

    #[test]
    fn decode_basic_rejects_garbage() {
        assert_eq!(decode_basic("not base64!!!"), None);
        let no_colon = base64::engine::general_purpose::STANDARD.encode("nocolon");
        assert_eq!(decode_basic(&no_colon), None);
    }

    #[test]
    fn token_matching() {
        assert!(token_matches(Some("secret"), "secret"));
        assert!(!token_matches(Some("wrong"), "secret"));
        assert!(!token_matches(None, "secret"));
    }
}
