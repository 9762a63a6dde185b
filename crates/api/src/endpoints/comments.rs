//! Comment endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, post},
};
use kuchikomi_common::AppResult;
use kuchikomi_core::NewCommentInput;

use crate::{endpoints::CommentResponse, extractors::AuthUser, middleware::AppState};

/// Comment on a restaurant.
async fn create(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(restaurant_id): Path<i64>,
    Json(input): Json<NewCommentInput>,
) -> AppResult<(StatusCode, Json<CommentResponse>)> {
    let comment = state
        .comment_service
        .create(user.id, restaurant_id, input)
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into())))
}

/// Delete a comment.
async fn remove(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(comment_id): Path<i64>,
) -> AppResult<StatusCode> {
    state.comment_service.delete(comment_id, user.id).await?;

    Ok(StatusCode::OK)
}

/// Routes nested under `/restaurants`.
pub fn restaurant_router() -> Router<AppState> {
    Router::new().route("/{id}/comments", post(create))
}

/// Routes nested under `/comments`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(remove))
}
