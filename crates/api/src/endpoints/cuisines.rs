//! Cuisine endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use kuchikomi_common::AppResult;
use kuchikomi_core::NewCuisineInput;
use kuchikomi_db::entities::cuisine;

use crate::{extractors::AuthUser, middleware::AppState};

/// Get all cuisines.
async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<cuisine::Model>>> {
    let cuisines = state.cuisine_service.get_all().await?;

    Ok(Json(cuisines))
}

/// Get a cuisine by ID.
async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<cuisine::Model>> {
    let cuisine = state.cuisine_service.get(id).await?;

    Ok(Json(cuisine))
}

/// Create a cuisine.
async fn create(
    AuthUser(_user): AuthUser,
    State(state): State<AppState>,
    Json(input): Json<NewCuisineInput>,
) -> AppResult<(StatusCode, Json<cuisine::Model>)> {
    let cuisine = state.cuisine_service.create(input).await?;

    Ok((StatusCode::CREATED, Json(cuisine)))
}

/// Create the cuisines router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_one))
}
