//! Cart Endpoints
//! Mission: Owner-scoped cart reads, open cart writes

use crate::api::{ApiError, AppState};
use crate::auth::middleware::extract_claims;
use crate::models::{CartItem, DeleteReport, InsertReport};
use axum::{
    extract::{Path, Query, Request, State},
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CartQuery {
    pub email: Option<String>,
}

/// List cart items - GET /carts?email=... (verifier upstream)
///
/// No email parameter yields an empty list regardless of auth state; an
/// email other than the verified identity is forbidden.
pub async fn list_cart_items(
    State(state): State<AppState>,
    Query(params): Query<CartQuery>,
    req: Request,
) -> Result<Response, ApiError> {
    let Some(email) = params.email else {
        return Ok(Json(Vec::<CartItem>::new()).into_response());
    };

    let claims = extract_claims(&req).ok_or(ApiError::Unauthorized)?;
    if claims.email != email {
        return Err(ApiError::Forbidden);
    }

    let items = state.store.list_cart_items(&email).await?;
    Ok(Json(items).into_response())
}

/// Add a cart item - POST /carts
pub async fn add_cart_item(
    State(state): State<AppState>,
    Json(item): Json<CartItem>,
) -> Result<Json<InsertReport>, ApiError> {
    let result = state.store.insert_cart_item(&item).await?;

    Ok(Json(InsertReport {
        inserted_id: result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .unwrap_or_default(),
    }))
}

/// Remove a cart item - DELETE /carts/:id
pub async fn remove_cart_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteReport>, ApiError> {
    let result = state.store.delete_cart_item(&id).await?;

    Ok(Json(DeleteReport {
        deleted_count: result.deleted_count,
    }))
}
