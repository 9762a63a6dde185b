//! Price range endpoints.

use axum::{Json, Router, extract::State, routing::get};
use kuchikomi_common::AppResult;
use kuchikomi_db::entities::price_range;

use crate::middleware::AppState;

/// Get all price ranges.
async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<price_range::Model>>> {
    let price_ranges = state.price_range_service.get_all().await?;

    Ok(Json(price_ranges))
}

/// Create the price ranges router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list))
}
