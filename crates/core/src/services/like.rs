//! Like service.

use kuchikomi_common::{AppError, AppResult};
use kuchikomi_db::{
    entities::like,
    repositories::{LikeRepository, RestaurantRepository},
};

/// Like service for toggling restaurant likes.
#[derive(Clone)]
pub struct LikeService {
    like_repo: LikeRepository,
    restaurant_repo: RestaurantRepository,
}

impl LikeService {
    /// Create a new like service.
    #[must_use]
    pub const fn new(like_repo: LikeRepository, restaurant_repo: RestaurantRepository) -> Self {
        Self {
            like_repo,
            restaurant_repo,
        }
    }

    /// Like a restaurant.
    pub async fn create(&self, user_id: i64, restaurant_id: i64) -> AppResult<like::Model> {
        // Liking a missing restaurant is a 404, not an FK violation
        self.restaurant_repo.get_by_id(restaurant_id).await?;

        if self
            .like_repo
            .find_by_user_and_restaurant(user_id, restaurant_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("Restaurant already liked".to_string()));
        }

        self.like_repo.create(user_id, restaurant_id).await
    }

    /// Remove a like from a restaurant.
    pub async fn delete(&self, user_id: i64, restaurant_id: i64) -> AppResult<()> {
        if self
            .like_repo
            .find_by_user_and_restaurant(user_id, restaurant_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Like: user {user_id} on restaurant {restaurant_id}"
            )));
        }

        self.like_repo.delete(user_id, restaurant_id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use kuchikomi_db::entities::restaurant;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn create_test_restaurant(id: i64) -> restaurant::Model {
        restaurant::Model {
            id,
            name: "Afuri".to_string(),
            address: "Roppongi".to_string(),
            offers_english_menu: false,
            walk_ins_ok: true,
            accepts_credit_cards: false,
            notes: String::new(),
            created_by_user_id: 1,
            cuisine_id: 0,
            price_range_id: 0,
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_create_on_missing_restaurant_is_not_found() {
        let restaurant_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<restaurant::Model>::new()])
                .into_connection(),
        );
        let like_db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let service = LikeService::new(
            LikeRepository::new(like_db),
            RestaurantRepository::new(restaurant_db),
        );
        let result = service.create(11, 99).await;

        assert!(matches!(result, Err(AppError::RestaurantNotFound(99))));
    }

    #[tokio::test]
    async fn test_create_twice_is_conflict() {
        let restaurant_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[create_test_restaurant(99)]])
                .into_connection(),
        );
        let like_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[like::Model {
                    user_id: 11,
                    restaurant_id: 99,
                }]])
                .into_connection(),
        );

        let service = LikeService::new(
            LikeRepository::new(like_db),
            RestaurantRepository::new(restaurant_db),
        );
        let result = service.create(11, 99).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_like_is_not_found() {
        let restaurant_db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let like_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<like::Model>::new()])
                .into_connection(),
        );

        let service = LikeService::new(
            LikeRepository::new(like_db),
            RestaurantRepository::new(restaurant_db),
        );
        let result = service.delete(11, 99).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
