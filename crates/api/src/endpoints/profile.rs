//! Profile endpoints: the viewer's own posted and liked restaurants.

use axum::{Json, Router, extract::State, routing::get};
use kuchikomi_common::AppResult;

use crate::{endpoints::RestaurantResponse, extractors::AuthUser, middleware::AppState};

/// Get the restaurants the viewer posted.
async fn posted(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<RestaurantResponse>>> {
    let views = state
        .restaurant_service
        .list_posted_by(user.id, Some(user.id))
        .await?;

    Ok(Json(views.into_iter().map(Into::into).collect()))
}

/// Get the restaurants the viewer liked.
async fn liked(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<RestaurantResponse>>> {
    let views = state
        .restaurant_service
        .list_liked_by(user.id, Some(user.id))
        .await?;

    Ok(Json(views.into_iter().map(Into::into).collect()))
}

/// Create the profile router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(posted))
        .route("/likes", get(liked))
}
