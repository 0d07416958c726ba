use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

use crate::{errors::JsonApiError, state::ServerState};

/// Why a presented credential was refused.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthFailure {
    Missing,
    Malformed,
    Invalid,
}

impl From<AuthFailure> for JsonApiError {
    fn from(f: AuthFailure) -> Self {
        match f {
            AuthFailure::Missing => JsonApiError::new(
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                Some("api key not provided".into()),
            ),
            AuthFailure::Malformed => JsonApiError::new(
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                Some("api key has an invalid format".into()),
            ),
            AuthFailure::Invalid => JsonApiError::new(
                StatusCode::FORBIDDEN,
                "Forbidden",
                Some("invalid api key".into()),
            ),
        }
    }
}

/// Check an `Authorization` header value of the form `ApiKey <key>`.
pub fn check_api_key(header: Option<&str>, secret: Option<&str>) -> Result<(), AuthFailure> {
    let header = header.ok_or(AuthFailure::Missing)?;
    let parts: Vec<&str> = header.split(' ').collect();
    if parts.len() != 2 || parts[0] != "ApiKey" {
        return Err(AuthFailure::Malformed);
    }
    match secret {
        Some(secret) if !parts[1].is_empty() && parts[1] == secret => Ok(()),
        _ => Err(AuthFailure::Invalid),
    }
}

/// Middleware: require `Authorization: ApiKey <key>` on mutating routes
pub async fn require_api_key(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let header = req.headers().get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    match check_api_key(header, state.auth.api_secret_key.as_deref()) {
        Ok(()) => {
            info!(method = %req.method(), path = %req.uri().path(), "api key accepted");
            Ok(next.run(req).await)
        }
        Err(failure) => {
            warn!(method = %req.method(), path = %req.uri().path(), ?failure, "api key rejected");
            Err(failure.into())
        }
    }
}
