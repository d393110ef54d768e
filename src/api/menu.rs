//! Menu Endpoints
//! Mission: Public catalog reads, admin-only catalog writes

use crate::api::{ApiError, AppState};
use crate::models::{DeleteReport, InsertReport, MenuItem};
use axum::{
    extract::{Path, State},
    response::Json,
};
use tracing::info;

/// List the menu catalog - GET /menu
pub async fn list_menu(State(state): State<AppState>) -> Result<Json<Vec<MenuItem>>, ApiError> {
    let items = state.store.list_menu().await?;
    Ok(Json(items))
}

/// Add a menu item - POST /menu (admin only, guarded upstream)
pub async fn create_menu_item(
    State(state): State<AppState>,
    Json(item): Json<MenuItem>,
) -> Result<Json<InsertReport>, ApiError> {
    let result = state.store.insert_menu_item(&item).await?;
    info!("🍲 Menu item added: {}", item.name);

    Ok(Json(InsertReport {
        inserted_id: result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .unwrap_or_default(),
    }))
}

/// Delete a menu item - DELETE /menu/:id (admin only, guarded upstream)
///
/// A missing identifier is not an error; the report carries a zero count.
pub async fn delete_menu_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteReport>, ApiError> {
    let result = state.store.delete_menu_item(&id).await?;

    Ok(Json(DeleteReport {
        deleted_count: result.deleted_count,
    }))
}
