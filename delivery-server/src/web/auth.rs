//! HTTP Basic authentication for mutating endpoints.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::warn;

use super::routes::AppError;
use super::state::AppState;

/// Decode an `Authorization: Basic ...` header into user and password.
fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, password) = decoded.split_once(':')?;
    Some((user.to_string(), password.to_string()))
}

/// Reject requests that do not carry the admin credentials.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match basic_credentials(request.headers()) {
        Some((user, password)) if state.credentials.matches(&user, &password) => {
            Ok(next.run(request).await)
        }
        Some((user, _)) => {
            warn!(%user, path = %request.uri().path(), "rejected credentials");
            Err(AppError::Unauthorized)
        }
        None => {
            warn!(path = %request.uri().path(), "missing credentials");
            Err(AppError::Unauthorized)
        }
    }
}
