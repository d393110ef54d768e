//! Review Endpoints
//! Mission: Public read-only review feed

use crate::api::{ApiError, AppState};
use crate::models::Review;
use axum::{extract::State, response::Json};

/// List all reviews - GET /reviews
pub async fn list_reviews(State(state): State<AppState>) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = state.store.list_reviews().await?;
    Ok(Json(reviews))
}
