//! Authentication Middleware
//! Mission: Guard routes with JWT verification and an admin role check

use crate::api::AppState;
use crate::auth::{jwt::JwtHandler, models::Claims};
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// Credential verifier: validates the bearer token on incoming requests.
///
/// On success the decoded claims are inserted into request extensions for
/// downstream guards and handlers.
pub async fn auth_middleware(
    State(jwt_handler): State<Arc<JwtHandler>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = JwtHandler::extract_bearer(header).ok_or(AuthError::MissingToken)?;

    let claims = jwt_handler
        .validate_token(token)
        .map_err(|_| AuthError::InvalidToken)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Role authorizer: requires the verifier upstream, then checks that the
/// claimed email belongs to a stored admin. One store read per request.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let claims = extract_claims(&req).ok_or(AuthError::MissingToken)?;

    let user = state
        .store
        .find_user_by_email(&claims.email)
        .await
        .map_err(|e| {
            warn!("Admin check store lookup failed: {:#}", e);
            AuthError::Internal
        })?;

    match user {
        Some(u) if u.is_admin() => Ok(next.run(req).await),
        _ => Err(AuthError::Forbidden),
    }
}

/// Extract claims from request (use after auth middleware)
pub fn extract_claims(req: &Request) -> Option<&Claims> {
    req.extensions().get::<Claims>()
}

/// Auth error types
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    Forbidden,
    Internal,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingToken | AuthError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, "unauthorized access")
            }
            AuthError::Forbidden => (StatusCode::FORBIDDEN, "forbidden access"),
            AuthError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "internal server error"),
        };

        (status, Json(json!({ "error": true, "message": message }))).into_response()
    }
}
