//! User Endpoints
//! Mission: Registration, admin status checks, and admin-only listing

use crate::api::{ApiError, AppState};
use crate::auth::middleware::extract_claims;
use crate::models::{InsertReport, UpdateReport, User};
use axum::{
    extract::{Path, Request, State},
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use tracing::info;

/// List all users - GET /users (admin only, guarded upstream)
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store.list_users().await?;
    Ok(Json(users))
}

/// Register a user - POST /users
///
/// Idempotent on the identity key: a duplicate email is reported with a
/// plain message and a 200, never a conflict status.
pub async fn register_user(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> Result<Response, ApiError> {
    if state
        .store
        .find_user_by_email(&user.email)
        .await?
        .is_some()
    {
        return Ok(Json(json!({ "message": "user already exists" })).into_response());
    }

    let result = state.store.insert_user(&user).await?;
    info!("👤 User registered: {}", user.email);

    Ok(Json(InsertReport {
        inserted_id: result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .unwrap_or_default(),
    })
    .into_response())
}

/// Admin status check - GET /users/admin/:id (verifier upstream)
///
/// The path value is an email. A caller asking about any email other than
/// their own verified identity is told `admin: false`.
pub async fn admin_status(
    State(state): State<AppState>,
    Path(email): Path<String>,
    req: Request,
) -> Result<Json<serde_json::Value>, ApiError> {
    let claims = extract_claims(&req).ok_or(ApiError::Unauthorized)?;

    if claims.email != email {
        return Ok(Json(json!({ "admin": false })));
    }

    let user = state.store.find_user_by_email(&email).await?;
    let admin = user.map(|u| u.is_admin()).unwrap_or(false);

    Ok(Json(json!({ "admin": admin })))
}

/// Promote a user to admin - PATCH /users/admin/:id
///
/// Unguarded, matching the original service's wire contract; see
/// DESIGN.md on the preserved guard asymmetry.
pub async fn promote_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UpdateReport>, ApiError> {
    let result = state.store.promote_user(&id).await?;
    info!("⭐ User {} promoted to admin", id);

    Ok(Json(UpdateReport {
        matched_count: result.matched_count,
        modified_count: result.modified_count,
    }))
}
