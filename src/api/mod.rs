//! HTTP API Module
//! Mission: Resource handlers and router assembly for the ordering site

pub mod carts;
pub mod menu;
pub mod reviews;
pub mod routes;
pub mod users;

pub use routes::create_router;

use crate::auth::JwtHandler;
use crate::store::Store;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use std::sync::Arc;
use tracing::error;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub jwt_handler: Arc<JwtHandler>,
}

// ===== Error Handling =====

/// Handler-level errors.
///
/// Store failures and malformed identifiers all collapse into a generic
/// 500; only the auth-shaped outcomes get structured status codes.
#[derive(Debug)]
pub enum ApiError {
    Database(anyhow::Error),
    Unauthorized,
    Forbidden,
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Database(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Database(err) => {
                error!("Store operation failed: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized access"),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "forbidden access"),
        };

        (status, Json(json!({ "error": true, "message": message }))).into_response()
    }
}
