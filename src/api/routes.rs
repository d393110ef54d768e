//! Router Assembly
//! Mission: Bind every route to its guard chain and handler

use crate::api::{carts, menu, reviews, users, ApiError, AppState};
use crate::auth::models::TokenResponse;
use crate::auth::{auth_middleware, require_admin, JwtHandler};
use axum::{
    extract::State,
    middleware,
    response::Json,
    routing::{delete, get, patch, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Create the API router.
///
/// Three guard chains: none, verifier only, and verifier + admin.
/// `route_layer` ordering matters: the verifier is added last so it runs
/// before the role check.
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/users", post(users::register_user))
        // matchit allows one param name per position, so this PATCH shares
        // ":id" with the GET below even though the GET receives an email
        .route("/users/admin/:id", patch(users::promote_user))
        .route("/menu", get(menu::list_menu))
        .route("/reviews", get(reviews::list_reviews))
        .route("/carts", post(carts::add_cart_item))
        .route("/carts/:id", delete(carts::remove_cart_item))
        .with_state(state.clone());

    let token_routes = Router::new()
        .route("/jwt", post(issue_token))
        .with_state(state.jwt_handler.clone());

    let verified_routes = Router::new()
        .route("/users/admin/:id", get(users::admin_status))
        .route("/carts", get(carts::list_cart_items))
        .route_layer(middleware::from_fn_with_state(
            state.jwt_handler.clone(),
            auth_middleware,
        ))
        .with_state(state.clone());

    let admin_routes = Router::new()
        .route("/users", get(users::list_users))
        .route("/menu", post(menu::create_menu_item))
        .route("/menu/:id", delete(menu::delete_menu_item))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(
            state.jwt_handler.clone(),
            auth_middleware,
        ))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(token_routes)
        .merge(verified_routes)
        .merge(admin_routes)
}

// ===== Route Handlers =====

/// Service banner - GET /
async fn root() -> &'static str {
    "Bistro Boss is running"
}

/// Health check endpoint - GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Issue a signed token - POST /jwt
///
/// Signs whatever claims object the caller posts. See DESIGN.md for the
/// trust boundary decision.
pub async fn issue_token(
    State(jwt_handler): State<Arc<JwtHandler>>,
    Json(claims): Json<serde_json::Value>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = jwt_handler.generate_token(&claims)?;
    Ok(Json(TokenResponse { token }))
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_banner() {
        assert_eq!(root().await, "Bistro Boss is running");
    }

    #[tokio::test]
    async fn test_health_check_reports_version() {
        let Json(health) = health_check().await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }
}
