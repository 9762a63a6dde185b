//! Restaurant service.
//!
//! The feed aggregation engine: loads a restaurant list plus its five
//! associated collections (photos, likes, creator users, cuisines, price
//! ranges — and comments on the detail path) with one batched fetch per
//! entity type, then projects each restaurant into a [`RestaurantView`] in
//! the order the restaurant source returned rows.

use crate::services::comment::{CommentService, CommentWithAuthor};
use crate::services::projection::{ChildIndex, EntityMap};
use kuchikomi_common::{AppError, AppResult};
use kuchikomi_db::{
    entities::{cuisine, like, photo_url, price_range, restaurant, user},
    repositories::{
        CuisineRepository, LikeRepository, PhotoUrlRepository, PriceRangeRepository,
        RestaurantRepository, UserRepository,
    },
};
use sea_orm::Set;
use serde::Deserialize;
use validator::Validate;

/// Restaurant service for feed aggregation and restaurant mutations.
#[derive(Clone)]
pub struct RestaurantService {
    restaurant_repo: RestaurantRepository,
    photo_repo: PhotoUrlRepository,
    user_repo: UserRepository,
    cuisine_repo: CuisineRepository,
    price_range_repo: PriceRangeRepository,
    like_repo: LikeRepository,
    comment_service: CommentService,
}

/// A restaurant joined with its associations and viewer-specific fields.
///
/// Built fresh per request and handed to the serialization layer; optional
/// associations stay `Option` here — the wire defaults (null vs sentinel
/// string) are applied only when serializing.
#[derive(Debug, Clone)]
pub struct RestaurantView {
    pub restaurant: restaurant::Model,
    pub photo_urls: Vec<photo_url::Model>,
    pub cuisine: Option<cuisine::Model>,
    pub price_range: Option<price_range::Model>,
    pub created_by_user: Option<user::Model>,
    pub comments: Vec<CommentWithAuthor>,
    pub liked: bool,
    pub num_likes: i64,
}

/// Input for creating a restaurant.
#[derive(Debug, Deserialize, Validate)]
pub struct NewRestaurantInput {
    #[validate(length(min = 1, max = 256))]
    pub name: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub offers_english_menu: bool,

    #[serde(default)]
    pub walk_ins_ok: bool,

    #[serde(default)]
    pub accepts_credit_cards: bool,

    #[serde(default)]
    pub notes: String,

    /// 0 = no cuisine picked
    #[serde(default)]
    pub cuisine_id: i64,

    /// 0 = no price range picked
    #[serde(default)]
    pub price_range_id: i64,

    #[serde(default)]
    pub photo_urls: Vec<String>,
}

/// Input for updating a restaurant; photos in the list are added to the
/// existing ones.
pub type UpdateRestaurantInput = NewRestaurantInput;

impl RestaurantService {
    /// Create a new restaurant service.
    #[must_use]
    pub const fn new(
        restaurant_repo: RestaurantRepository,
        photo_repo: PhotoUrlRepository,
        user_repo: UserRepository,
        cuisine_repo: CuisineRepository,
        price_range_repo: PriceRangeRepository,
        like_repo: LikeRepository,
        comment_service: CommentService,
    ) -> Self {
        Self {
            restaurant_repo,
            photo_repo,
            user_repo,
            cuisine_repo,
            price_range_repo,
            like_repo,
            comment_service,
        }
    }

    /// Get every restaurant as a composite view, in insertion order.
    ///
    /// Comments are not resolved on the list path; each view carries an
    /// empty comment list.
    pub async fn list_all(&self, viewer_id: Option<i64>) -> AppResult<Vec<RestaurantView>> {
        let restaurants = self.restaurant_repo.get_all().await?;
        self.project_list(restaurants, viewer_id).await
    }

    /// Get the restaurants a user posted, as composite views.
    pub async fn list_posted_by(
        &self,
        user_id: i64,
        viewer_id: Option<i64>,
    ) -> AppResult<Vec<RestaurantView>> {
        let restaurants = self.restaurant_repo.find_posted_by_user(user_id).await?;
        self.project_list(restaurants, viewer_id).await
    }

    /// Get the restaurants a user liked, as composite views.
    pub async fn list_liked_by(
        &self,
        user_id: i64,
        viewer_id: Option<i64>,
    ) -> AppResult<Vec<RestaurantView>> {
        let likes = self.like_repo.find_for_user(user_id).await?;
        let restaurant_ids: Vec<i64> = likes.iter().map(|l| l.restaurant_id).collect();
        let restaurants = self.restaurant_repo.find_by_ids(&restaurant_ids).await?;
        self.project_list(restaurants, viewer_id).await
    }

    /// Get one restaurant as a composite view, with comments resolved.
    ///
    /// Returns `Ok(None)` when the id matches nothing; association misses
    /// are normal outcomes, never errors.
    pub async fn get_one(
        &self,
        id: i64,
        viewer_id: Option<i64>,
    ) -> AppResult<Option<RestaurantView>> {
        let Some(restaurant) = self.restaurant_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let photo_urls = self.photo_repo.find_for_restaurant(id).await?;
        let likes = self.like_repo.find_for_restaurant(id).await?;
        let cuisine = self.cuisine_repo.find_by_id(restaurant.cuisine_id).await?;
        let price_range = self
            .price_range_repo
            .find_by_id(restaurant.price_range_id)
            .await?;
        let created_by_user = self
            .user_repo
            .find_by_id(restaurant.created_by_user_id)
            .await?;
        let comments = self.comment_service.find_for_restaurant(id).await?;

        Ok(Some(assemble(
            restaurant,
            photo_urls,
            cuisine,
            price_range,
            created_by_user,
            comments,
            &likes,
            viewer_id,
        )))
    }

    /// Create a restaurant with its photos, returning the composite view.
    pub async fn create(
        &self,
        user_id: i64,
        input: NewRestaurantInput,
    ) -> AppResult<RestaurantView> {
        input.validate()?;

        let creator = self.user_repo.get_by_id(user_id).await?;

        let model = restaurant::ActiveModel {
            name: Set(input.name),
            address: Set(input.address),
            offers_english_menu: Set(input.offers_english_menu),
            walk_ins_ok: Set(input.walk_ins_ok),
            accepts_credit_cards: Set(input.accepts_credit_cards),
            notes: Set(input.notes),
            created_by_user_id: Set(user_id),
            cuisine_id: Set(input.cuisine_id),
            price_range_id: Set(input.price_range_id),
            ..Default::default()
        };
        let restaurant = self.restaurant_repo.create(model).await?;

        let photo_urls = self
            .photo_repo
            .create_many(restaurant.id, &input.photo_urls)
            .await?;
        let cuisine = self.cuisine_repo.find_by_id(restaurant.cuisine_id).await?;
        let price_range = self
            .price_range_repo
            .find_by_id(restaurant.price_range_id)
            .await?;

        tracing::debug!(restaurant_id = restaurant.id, "Created restaurant");

        // A fresh restaurant has no likes or comments yet
        Ok(assemble(
            restaurant,
            photo_urls,
            cuisine,
            price_range,
            Some(creator),
            Vec::new(),
            &[],
            Some(user_id),
        ))
    }

    /// Update a restaurant's fields and add any new photos, returning the
    /// composite view.
    pub async fn update(
        &self,
        id: i64,
        acting_user_id: i64,
        input: UpdateRestaurantInput,
    ) -> AppResult<RestaurantView> {
        input.validate()?;

        let existing = self.restaurant_repo.get_by_id(id).await?;

        let mut model: restaurant::ActiveModel = existing.into();
        model.name = Set(input.name);
        model.address = Set(input.address);
        model.offers_english_menu = Set(input.offers_english_menu);
        model.walk_ins_ok = Set(input.walk_ins_ok);
        model.accepts_credit_cards = Set(input.accepts_credit_cards);
        model.notes = Set(input.notes);
        model.cuisine_id = Set(input.cuisine_id);
        model.price_range_id = Set(input.price_range_id);
        let updated = self.restaurant_repo.update(model).await?;

        if !input.photo_urls.is_empty() {
            self.photo_repo
                .create_many(updated.id, &input.photo_urls)
                .await?;
        }

        self.get_one(updated.id, Some(acting_user_id))
            .await?
            .ok_or(AppError::RestaurantNotFound(id))
    }

    /// Delete a restaurant. Only the creator may delete it.
    pub async fn delete(&self, id: i64, acting_user_id: i64) -> AppResult<()> {
        let restaurant = self.restaurant_repo.get_by_id(id).await?;

        if restaurant.created_by_user_id != acting_user_id {
            return Err(AppError::Forbidden(
                "Only the creator can delete a restaurant".to_string(),
            ));
        }

        self.restaurant_repo.delete(id).await
    }

    /// Project a restaurant list into composite views.
    ///
    /// Exactly one fetch per entity type regardless of list size; the
    /// output order equals the order of `restaurants`.
    async fn project_list(
        &self,
        restaurants: Vec<restaurant::Model>,
        viewer_id: Option<i64>,
    ) -> AppResult<Vec<RestaurantView>> {
        let restaurant_ids: Vec<i64> = restaurants.iter().map(|r| r.id).collect();
        let creator_ids: Vec<i64> = restaurants.iter().map(|r| r.created_by_user_id).collect();

        let mut photos = ChildIndex::build(
            self.photo_repo.find_for_restaurants(&restaurant_ids).await?,
            |p| p.restaurant_id,
        );
        let creators = EntityMap::build(self.user_repo.find_by_ids(&creator_ids).await?, |u| u.id);
        let price_ranges = EntityMap::build(self.price_range_repo.get_all().await?, |p| p.id);
        let cuisines = EntityMap::build(self.cuisine_repo.get_all().await?, |c| c.id);
        let mut likes = ChildIndex::build(
            self.like_repo.find_for_restaurants(&restaurant_ids).await?,
            |l| l.restaurant_id,
        );

        Ok(restaurants
            .into_iter()
            .map(|restaurant| {
                let photo_urls = photos.take(restaurant.id);
                let restaurant_likes = likes.take(restaurant.id);
                let cuisine = cuisines.get(restaurant.cuisine_id).cloned();
                let price_range = price_ranges.get(restaurant.price_range_id).cloned();
                let created_by_user = creators.get(restaurant.created_by_user_id).cloned();

                assemble(
                    restaurant,
                    photo_urls,
                    cuisine,
                    price_range,
                    created_by_user,
                    Vec::new(),
                    &restaurant_likes,
                    viewer_id,
                )
            })
            .collect())
    }
}

/// Assemble one composite view from a restaurant and its resolved
/// associations. Pure; never fails.
fn assemble(
    restaurant: restaurant::Model,
    photo_urls: Vec<photo_url::Model>,
    cuisine: Option<cuisine::Model>,
    price_range: Option<price_range::Model>,
    created_by_user: Option<user::Model>,
    comments: Vec<CommentWithAuthor>,
    likes: &[like::Model],
    viewer_id: Option<i64>,
) -> RestaurantView {
    let num_likes = likes.len() as i64;
    let liked = viewer_id.is_some_and(|viewer| likes.iter().any(|l| l.user_id == viewer));

    RestaurantView {
        restaurant,
        photo_urls,
        cuisine,
        price_range,
        created_by_user,
        comments,
        liked,
        num_likes,
    }
}
