use std::sync::Arc;

use auth::Authenticator;
use auth::JwtError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use thiserror::Error;

use crate::inbound::http::handlers::ApiError;

/// Reasons the access gate turns a request away.
///
/// Every variant produces the same 401 response; the distinction only
/// reaches the logs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GateRejection {
    #[error("missing Authorization header")]
    MissingHeader,

    #[error("malformed Authorization header")]
    MalformedHeader,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("expired token")]
    ExpiredToken,
}

impl From<JwtError> for GateRejection {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::Expired => GateRejection::ExpiredToken,
            other => GateRejection::InvalidToken(other.to_string()),
        }
    }
}

impl From<GateRejection> for ApiError {
    fn from(rejection: GateRejection) -> Self {
        tracing::warn!(reason = %rejection, "Access gate rejected request");
        ApiError::Unauthorized("Unauthorized".to_string())
    }
}

/// Middleware guarding protected routes with a bearer token.
///
/// Validates the token against the current time and, on success, forwards
/// the request untouched and returns the downstream response as is.
///
/// # Errors
/// * `Unauthorized` - Header missing or malformed, token invalid or expired
pub async fn require_bearer(
    State(authenticator): State<Arc<Authenticator>>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(req.headers())?;

    let claims = authenticator
        .validate_token(token, Utc::now())
        .map_err(GateRejection::from)?;

    tracing::debug!(subject = %claims.sub, "Access gate admitted request");

    Ok(next.run(req).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// Exactly one Authorization header is accepted. The token must be non-empty
/// and contain no whitespace.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, GateRejection> {
    let mut values = headers.get_all(header::AUTHORIZATION).iter();

    let value = values.next().ok_or(GateRejection::MissingHeader)?;
    if values.next().is_some() {
        return Err(GateRejection::MalformedHeader);
    }

    let token = value
        .to_str()
        .map_err(|_| GateRejection::MalformedHeader)?
        .strip_prefix("Bearer ")
        .ok_or(GateRejection::MalformedHeader)?;

    if token.is_empty() || token.chars().any(char::is_whitespace) {
        return Err(GateRejection::MalformedHeader);
    }

    Ok(token)
}
