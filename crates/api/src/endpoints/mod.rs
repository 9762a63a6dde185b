//! API endpoints.

mod auth;
mod comments;
mod cuisines;
mod likes;
mod price_ranges;
mod profile;
mod restaurants;

use axum::Router;

use crate::middleware::AppState;

pub use restaurants::{CommentResponse, RestaurantResponse};

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest(
            "/restaurants",
            restaurants::router()
                .merge(likes::router())
                .merge(comments::restaurant_router()),
        )
        .nest("/comments", comments::router())
        .nest("/cuisines", cuisines::router())
        .nest("/priceranges", price_ranges::router())
        .nest("/profile", profile::router())
}
