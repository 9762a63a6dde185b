//! Restaurant endpoints.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
};
use chrono::{DateTime, FixedOffset, Utc};
use kuchikomi_common::{AppError, AppResult};
use kuchikomi_core::{CommentWithAuthor, NewRestaurantInput, RestaurantView, UpdateRestaurantInput};
use kuchikomi_db::entities::{cuisine, photo_url, user};
use serde::Serialize;

use crate::{
    extractors::{AuthUser, MaybeAuthUser},
    middleware::AppState,
};

/// Wire value for a restaurant with no resolved price range.
///
/// Deliberately different from the missing-cuisine policy (null); clients
/// depend on both.
const PRICE_RANGE_NOT_SPECIFIED: &str = "Not Specified";

/// Photo URL response.
#[derive(Serialize, Clone)]
pub struct PhotoUrlResponse {
    pub id: i64,
    pub url: String,
}

impl From<photo_url::Model> for PhotoUrlResponse {
    fn from(photo: photo_url::Model) -> Self {
        Self {
            id: photo.id,
            url: photo.url,
        }
    }
}

/// Creator user response.
#[derive(Serialize, Clone)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

/// Cuisine response.
#[derive(Serialize, Clone)]
pub struct CuisineResponse {
    pub id: i64,
    pub name: String,
}

impl From<cuisine::Model> for CuisineResponse {
    fn from(cuisine: cuisine::Model) -> Self {
        Self {
            id: cuisine.id,
            name: cuisine.name,
        }
    }
}

/// Comment author response; comments embed only id and name.
#[derive(Serialize, Clone)]
pub struct CommentUserResponse {
    pub id: i64,
    pub name: String,
}

/// Comment response.
#[derive(Serialize, Clone)]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub created_at: String,
    pub restaurant_id: i64,
    pub user: CommentUserResponse,
}

impl From<CommentWithAuthor> for CommentResponse {
    fn from(entry: CommentWithAuthor) -> Self {
        Self {
            id: entry.comment.id,
            content: entry.comment.content,
            created_at: format_timestamp(&entry.comment.created_at),
            restaurant_id: entry.comment.restaurant_id,
            user: CommentUserResponse {
                id: entry.user.id,
                name: entry.user.name,
            },
        }
    }
}

/// Restaurant response.
///
/// Field names and default policies are a client contract: missing cuisine
/// serializes as null, missing price range as `"Not Specified"`, missing
/// creator as `user: null` with an empty `created_by_user_name`.
#[derive(Serialize, Clone)]
pub struct RestaurantResponse {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub offers_english_menu: bool,
    pub walk_ins_ok: bool,
    pub accepts_credit_cards: bool,
    pub notes: String,
    pub created_at: String,
    pub user: Option<UserResponse>,
    pub created_by_user_name: String,
    pub photo_urls: Vec<PhotoUrlResponse>,
    pub cuisine: Option<CuisineResponse>,
    pub price_range: String,
    pub num_likes: i64,
    pub liked: bool,
    pub comments: Vec<CommentResponse>,
}

impl From<RestaurantView> for RestaurantResponse {
    fn from(view: RestaurantView) -> Self {
        let created_by_user_name = view
            .created_by_user
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_default();

        Self {
            id: view.restaurant.id,
            name: view.restaurant.name,
            address: view.restaurant.address,
            offers_english_menu: view.restaurant.offers_english_menu,
            walk_ins_ok: view.restaurant.walk_ins_ok,
            accepts_credit_cards: view.restaurant.accepts_credit_cards,
            notes: view.restaurant.notes,
            created_at: format_timestamp(&view.restaurant.created_at),
            user: view.created_by_user.map(Into::into),
            created_by_user_name,
            photo_urls: view.photo_urls.into_iter().map(Into::into).collect(),
            cuisine: view.cuisine.map(Into::into),
            price_range: view
                .price_range
                .map_or_else(|| PRICE_RANGE_NOT_SPECIFIED.to_string(), |p| p.label),
            num_likes: view.num_likes,
            liked: view.liked,
            comments: view.comments.into_iter().map(Into::into).collect(),
        }
    }
}

/// Format a timestamp as ISO-8601 UTC with milliseconds and a trailing `Z`.
pub(crate) fn format_timestamp(ts: &DateTime<FixedOffset>) -> String {
    ts.with_timezone(&Utc)
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}

/// Get all restaurants as a feed.
async fn list(
    MaybeAuthUser(viewer): MaybeAuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<RestaurantResponse>>> {
    let views = state
        .restaurant_service
        .list_all(viewer.map(|u| u.id))
        .await?;

    Ok(Json(views.into_iter().map(Into::into).collect()))
}

/// Get a single restaurant with comments.
async fn get_one(
    MaybeAuthUser(viewer): MaybeAuthUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<RestaurantResponse>> {
    let view = state
        .restaurant_service
        .get_one(id, viewer.map(|u| u.id))
        .await?
        .ok_or(AppError::RestaurantNotFound(id))?;

    Ok(Json(view.into()))
}

/// Create a restaurant.
async fn create(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(input): Json<NewRestaurantInput>,
) -> AppResult<(StatusCode, Json<RestaurantResponse>)> {
    let view = state.restaurant_service.create(user.id, input).await?;

    Ok((StatusCode::CREATED, Json(view.into())))
}

/// Update a restaurant.
async fn update(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateRestaurantInput>,
) -> AppResult<Json<RestaurantResponse>> {
    let view = state.restaurant_service.update(id, user.id, input).await?;

    Ok(Json(view.into()))
}

/// Delete a restaurant.
async fn delete_restaurant(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.restaurant_service.delete(id, user.id).await?;

    Ok(StatusCode::OK)
}

/// Delete a photo from a restaurant.
async fn delete_photo(
    AuthUser(_user): AuthUser,
    State(state): State<AppState>,
    Path((restaurant_id, photo_url_id)): Path<(i64, i64)>,
) -> AppResult<StatusCode> {
    state.photo_service.delete(restaurant_id, photo_url_id).await?;

    Ok(StatusCode::OK)
}

/// Create the restaurants router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route(
            "/{id}",
            get(get_one).patch(update).delete(delete_restaurant),
        )
        .route(
            "/{restaurant_id}/photo-urls/{photo_url_id}",
            delete(delete_photo),
        )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use kuchikomi_db::entities::{comment, price_range, restaurant};

    fn fixed_timestamp() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2016-04-13T16:01:21.094Z").unwrap()
    }

    fn create_test_restaurant(id: i64, name: &str) -> restaurant::Model {
        restaurant::Model {
            id,
            name: name.to_string(),
            address: "Roppongi".to_string(),
            offers_english_menu: false,
            walk_ins_ok: true,
            accepts_credit_cards: false,
            notes: "とても美味しい".to_string(),
            created_by_user_id: 1,
            cuisine_id: 1,
            price_range_id: 1,
            created_at: fixed_timestamp(),
        }
    }

    fn create_test_user(id: i64, name: &str) -> user::Model {
        user::Model {
            id,
            email: format!("{name}@example.com"),
            name: name.to_string(),
            password_hash: "$argon2id$test".to_string(),
            token: None,
            created_at: fixed_timestamp(),
        }
    }

    fn full_view() -> RestaurantView {
        RestaurantView {
            restaurant: create_test_restaurant(1, "Afuri"),
            photo_urls: vec![photo_url::Model {
                id: 999,
                url: "http://www.cats.com/my-cat.jpg".to_string(),
                restaurant_id: 1,
            }],
            cuisine: Some(cuisine::Model {
                id: 1,
                name: "Ramen".to_string(),
            }),
            price_range: Some(price_range::Model {
                id: 1,
                label: "~900".to_string(),
            }),
            created_by_user: Some(create_test_user(1, "taro")),
            comments: vec![CommentWithAuthor {
                comment: comment::Model {
                    id: 10,
                    content: "Best ramen in town".to_string(),
                    restaurant_id: 1,
                    created_by_user_id: 4,
                    created_at: fixed_timestamp(),
                },
                user: create_test_user(4, "hanako"),
            }],
            liked: true,
            num_likes: 2,
        }
    }

    fn bare_view() -> RestaurantView {
        RestaurantView {
            restaurant: create_test_restaurant(2, "Unknown Izakaya"),
            photo_urls: vec![],
            cuisine: None,
            price_range: None,
            created_by_user: None,
            comments: vec![],
            liked: false,
            num_likes: 0,
        }
    }

    #[test]
    fn test_serializes_contract_field_names() {
        let response: RestaurantResponse = full_view().into();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Afuri");
        assert_eq!(json["address"], "Roppongi");
        assert_eq!(json["offers_english_menu"], false);
        assert_eq!(json["walk_ins_ok"], true);
        assert_eq!(json["accepts_credit_cards"], false);
        assert_eq!(json["notes"], "とても美味しい");
        assert_eq!(json["photo_urls"][0]["url"], "http://www.cats.com/my-cat.jpg");
        assert_eq!(json["cuisine"]["id"], 1);
        assert_eq!(json["cuisine"]["name"], "Ramen");
        assert_eq!(json["price_range"], "~900");
        assert_eq!(json["user"]["name"], "taro");
        assert_eq!(json["created_by_user_name"], "taro");
        assert_eq!(json["num_likes"], 2);
        assert_eq!(json["liked"], true);
    }

    #[test]
    fn test_created_at_keeps_trailing_z() {
        let response: RestaurantResponse = full_view().into();

        assert_eq!(response.created_at, "2016-04-13T16:01:21.094Z");
    }

    #[test]
    fn test_missing_cuisine_serializes_as_null() {
        let response: RestaurantResponse = bare_view().into();
        let json = serde_json::to_value(&response).unwrap();

        assert!(json["cuisine"].is_null());
    }

    #[test]
    fn test_missing_price_range_serializes_as_sentinel() {
        let response: RestaurantResponse = bare_view().into();
        let json = serde_json::to_value(&response).unwrap();

        // Not unified with the cuisine policy
        assert_eq!(json["price_range"], "Not Specified");
    }

    #[test]
    fn test_missing_creator_serializes_as_null_user_and_empty_name() {
        let response: RestaurantResponse = bare_view().into();
        let json = serde_json::to_value(&response).unwrap();

        assert!(json["user"].is_null());
        assert_eq!(json["created_by_user_name"], "");
    }

    #[test]
    fn test_comment_embeds_author_id_and_name() {
        let response: RestaurantResponse = full_view().into();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["comments"][0]["content"], "Best ramen in town");
        assert_eq!(json["comments"][0]["user"]["id"], 4);
        assert_eq!(json["comments"][0]["user"]["name"], "hanako");
        assert_eq!(json["comments"][0]["restaurant_id"], 1);
    }
}
