//! Restaurant repository.

use std::sync::Arc;

use crate::entities::{Restaurant, restaurant};
use kuchikomi_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder,
};

/// Restaurant repository for database operations.
#[derive(Clone)]
pub struct RestaurantRepository {
    db: Arc<DatabaseConnection>,
}

impl RestaurantRepository {
    /// Create a new restaurant repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Get all restaurants in insertion order.
    pub async fn get_all(&self) -> AppResult<Vec<restaurant::Model>> {
        Restaurant::find()
            .order_by_asc(restaurant::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a restaurant by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<restaurant::Model>> {
        Restaurant::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a restaurant by ID, returning an error if not found.
    pub async fn get_by_id(&self, id: i64) -> AppResult<restaurant::Model> {
        self.find_by_id(id)
            .await?
            .ok_or(AppError::RestaurantNotFound(id))
    }

    /// Find restaurants by IDs, in insertion order.
    pub async fn find_by_ids(&self, ids: &[i64]) -> AppResult<Vec<restaurant::Model>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        Restaurant::find()
            .filter(restaurant::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(restaurant::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find restaurants created by a user, in insertion order.
    pub async fn find_posted_by_user(&self, user_id: i64) -> AppResult<Vec<restaurant::Model>> {
        Restaurant::find()
            .filter(restaurant::Column::CreatedByUserId.eq(user_id))
            .order_by_asc(restaurant::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new restaurant.
    pub async fn create(&self, model: restaurant::ActiveModel) -> AppResult<restaurant::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Update a restaurant.
    pub async fn update(&self, model: restaurant::ActiveModel) -> AppResult<restaurant::Model> {
        model
            .update(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a restaurant.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let restaurant = self.find_by_id(id).await?;
        if let Some(r) = restaurant {
            r.delete(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }
        Ok(())
    }
}
