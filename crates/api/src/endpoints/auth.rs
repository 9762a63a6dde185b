//! Registration and session endpoints.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, post},
};
use kuchikomi_common::{AppError, AppResult};
use kuchikomi_core::{LoginInput, RegisterUserInput};
use serde::Serialize;

use crate::{endpoints::restaurants::UserResponse, extractors::AuthUser, middleware::AppState};

/// Session response.
#[derive(Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Register a new user.
async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterUserInput>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.user_service.register(input).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Log in, minting a session token.
async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> AppResult<(StatusCode, Json<SessionResponse>)> {
    let session = state
        .user_service
        .login(input)
        .await?
        .ok_or(AppError::Unauthorized)?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            token: session.token,
            user: session.user.into(),
        }),
    ))
}

/// Log out, revoking the current session token.
async fn logout(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> AppResult<StatusCode> {
    state.user_service.logout(user).await?;

    Ok(StatusCode::OK)
}

/// Create the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(register))
        .route("/auth/session", post(login).delete(logout))
}
