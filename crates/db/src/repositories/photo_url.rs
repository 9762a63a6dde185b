//! Photo URL repository.

use std::sync::Arc;

use crate::entities::{PhotoUrl, photo_url};
use kuchikomi_common::{AppError, AppResult};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};

/// Photo URL repository for database operations.
#[derive(Clone)]
pub struct PhotoUrlRepository {
    db: Arc<DatabaseConnection>,
}

impl PhotoUrlRepository {
    /// Create a new photo URL repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a photo by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<photo_url::Model>> {
        PhotoUrl::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find photos for a set of restaurants in one query.
    pub async fn find_for_restaurants(
        &self,
        restaurant_ids: &[i64],
    ) -> AppResult<Vec<photo_url::Model>> {
        if restaurant_ids.is_empty() {
            return Ok(vec![]);
        }

        PhotoUrl::find()
            .filter(photo_url::Column::RestaurantId.is_in(restaurant_ids.to_vec()))
            .order_by_asc(photo_url::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find photos for a single restaurant.
    pub async fn find_for_restaurant(&self, restaurant_id: i64) -> AppResult<Vec<photo_url::Model>> {
        PhotoUrl::find()
            .filter(photo_url::Column::RestaurantId.eq(restaurant_id))
            .order_by_asc(photo_url::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Attach photos to a restaurant.
    pub async fn create_many(
        &self,
        restaurant_id: i64,
        urls: &[String],
    ) -> AppResult<Vec<photo_url::Model>> {
        let mut created = Vec::with_capacity(urls.len());
        for url in urls {
            let model = photo_url::ActiveModel {
                url: Set(url.clone()),
                restaurant_id: Set(restaurant_id),
                ..Default::default()
            };
            let photo = model
                .insert(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            created.push(photo);
        }
        Ok(created)
    }

    /// Delete a photo row.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let photo = self.find_by_id(id).await?;
        if let Some(p) = photo {
            p.delete(self.db.as_ref())
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }
        Ok(())
    }
}
