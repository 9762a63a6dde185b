//! Like endpoints, nested under `/restaurants`.

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    routing::post,
};
use kuchikomi_common::AppResult;

use crate::{extractors::AuthUser, middleware::AppState};

/// Like a restaurant.
async fn create(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(restaurant_id): Path<i64>,
) -> AppResult<StatusCode> {
    state.like_service.create(user.id, restaurant_id).await?;

    Ok(StatusCode::CREATED)
}

/// Remove a like from a restaurant.
async fn remove(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(restaurant_id): Path<i64>,
) -> AppResult<StatusCode> {
    state.like_service.delete(user.id, restaurant_id).await?;

    Ok(StatusCode::OK)
}

/// Create the likes router.
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/likes", post(create).delete(remove))
}
