//! Price range service.

use kuchikomi_common::{AppError, AppResult};
use kuchikomi_db::{entities::price_range, repositories::PriceRangeRepository};

/// Price range service.
#[derive(Clone)]
pub struct PriceRangeService {
    price_range_repo: PriceRangeRepository,
}

impl PriceRangeService {
    /// Create a new price range service.
    #[must_use]
    pub const fn new(price_range_repo: PriceRangeRepository) -> Self {
        Self { price_range_repo }
    }

    /// Get all price ranges.
    pub async fn get_all(&self) -> AppResult<Vec<price_range::Model>> {
        self.price_range_repo.get_all().await
    }

    /// Get a price range by ID.
    pub async fn get(&self, id: i64) -> AppResult<price_range::Model> {
        self.price_range_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("PriceRange: {id}")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get_all() {
        let p1 = price_range::Model {
            id: 1,
            label: "¥0~999".to_string(),
        };

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[p1]])
                .into_connection(),
        );

        let service = PriceRangeService::new(PriceRangeRepository::new(db));
        let result = service.get_all().await.unwrap();

        assert_eq!(result.len(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_price_range_is_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<price_range::Model>::new()])
                .into_connection(),
        );

        let service = PriceRangeService::new(PriceRangeRepository::new(db));
        let result = service.get(999).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
