//! Like repository.

use std::sync::Arc;

use crate::entities::{Like, like};
use kuchikomi_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};

/// Like repository for database operations.
#[derive(Clone)]
pub struct LikeRepository {
    db: Arc<DatabaseConnection>,
}

impl LikeRepository {
    /// Create a new like repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a like by its `(user, restaurant)` pair.
    pub async fn find_by_user_and_restaurant(
        &self,
        user_id: i64,
        restaurant_id: i64,
    ) -> AppResult<Option<like::Model>> {
        Like::find()
            .filter(like::Column::UserId.eq(user_id))
            .filter(like::Column::RestaurantId.eq(restaurant_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find likes for a set of restaurants in one query.
    pub async fn find_for_restaurants(
        &self,
        restaurant_ids: &[i64],
    ) -> AppResult<Vec<like::Model>> {
        if restaurant_ids.is_empty() {
            return Ok(vec![]);
        }

        Like::find()
            .filter(like::Column::RestaurantId.is_in(restaurant_ids.to_vec()))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find likes for a single restaurant.
    pub async fn find_for_restaurant(&self, restaurant_id: i64) -> AppResult<Vec<like::Model>> {
        Like::find()
            .filter(like::Column::RestaurantId.eq(restaurant_id))
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find likes placed by a user, in insertion order of the liked restaurants.
    pub async fn find_for_user(&self, user_id: i64) -> AppResult<Vec<like::Model>> {
        Like::find()
            .filter(like::Column::UserId.eq(user_id))
            .order_by_asc(like::Column::RestaurantId)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a like.
    pub async fn create(&self, user_id: i64, restaurant_id: i64) -> AppResult<like::Model> {
        let model = like::ActiveModel {
            user_id: Set(user_id),
            restaurant_id: Set(restaurant_id),
        };
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a like by its `(user, restaurant)` pair.
    pub async fn delete(&self, user_id: i64, restaurant_id: i64) -> AppResult<()> {
        let like = self
            .find_by_user_and_restaurant(user_id, restaurant_id)
            .await?;
        if let Some(l) = like {
            l.delete(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_find_for_restaurants() {
        let l1 = like::Model {
            user_id: 2,
            restaurant_id: 1,
        };
        let l2 = like::Model {
            user_id: 3,
            restaurant_id: 1,
        };

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[l1, l2]])
                .into_connection(),
        );

        let repo = LikeRepository::new(db);
        let result = repo.find_for_restaurants(&[1]).await.unwrap();

        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn test_find_for_restaurants_empty_input_skips_query() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let repo = LikeRepository::new(db);
        let result = repo.find_for_restaurants(&[]).await.unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_user_and_restaurant_none() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<like::Model>::new()])
                .into_connection(),
        );

        let repo = LikeRepository::new(db);
        let result = repo.find_by_user_and_restaurant(11, 99).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_for_user() {
        let l1 = like::Model {
            user_id: 11,
            restaurant_id: 3,
        };
        let l2 = like::Model {
            user_id: 11,
            restaurant_id: 8,
        };

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[l1, l2]])
                .into_connection(),
        );

        let repo = LikeRepository::new(db);
        let result = repo.find_for_user(11).await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].restaurant_id, 3);
    }
}
