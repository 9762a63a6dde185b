//! API middleware.

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use kuchikomi_core::{
    CommentService, CuisineService, LikeService, PhotoService, PriceRangeService,
    RestaurantService, UserService,
};

/// Application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub restaurant_service: RestaurantService,
    pub like_service: LikeService,
    pub comment_service: CommentService,
    pub cuisine_service: CuisineService,
    pub price_range_service: PriceRangeService,
    pub photo_service: PhotoService,
}

/// Authentication middleware.
///
/// Resolves a `Bearer` token to its user and stashes the model in request
/// extensions; anonymous requests pass through untouched.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(auth_header) = req.headers().get("Authorization")
        && let Ok(auth_str) = auth_header.to_str()
        && let Some(token) = auth_str.strip_prefix("Bearer ")
    {
        // Authenticate user by token
        if let Ok(user) = state.user_service.authenticate_by_token(token).await {
            req.extensions_mut().insert(user);
        }
    }

    next.run(req).await
}
