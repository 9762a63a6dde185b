//! Price range repository.

use std::sync::Arc;

use crate::entities::{PriceRange, price_range};
use kuchikomi_common::{AppError, AppResult};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

/// Price range repository for database operations.
#[derive(Clone)]
pub struct PriceRangeRepository {
    db: Arc<DatabaseConnection>,
}

impl PriceRangeRepository {
    /// Create a new price range repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Get all price ranges.
    pub async fn get_all(&self) -> AppResult<Vec<price_range::Model>> {
        PriceRange::find()
            .order_by_asc(price_range::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a price range by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<price_range::Model>> {
        PriceRange::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
