//! Cuisine repository.

use std::sync::Arc;

use crate::entities::{Cuisine, cuisine};
use kuchikomi_common::{AppError, AppResult};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

/// Cuisine repository for database operations.
#[derive(Clone)]
pub struct CuisineRepository {
    db: Arc<DatabaseConnection>,
}

impl CuisineRepository {
    /// Create a new cuisine repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Get all cuisines.
    pub async fn get_all(&self) -> AppResult<Vec<cuisine::Model>> {
        Cuisine::find()
            .order_by_asc(cuisine::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a cuisine by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<cuisine::Model>> {
        Cuisine::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new cuisine.
    pub async fn create(&self, model: cuisine::ActiveModel) -> AppResult<cuisine::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
