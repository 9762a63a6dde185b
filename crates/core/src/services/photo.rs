//! Photo service.
//!
//! Photo binaries live in external storage keyed by URL; this service only
//! manages the rows that point at them.

use kuchikomi_common::{AppError, AppResult};
use kuchikomi_db::{
    entities::photo_url,
    repositories::{PhotoUrlRepository, RestaurantRepository},
};

/// Photo service for photo-row management.
#[derive(Clone)]
pub struct PhotoService {
    photo_repo: PhotoUrlRepository,
    restaurant_repo: RestaurantRepository,
}

impl PhotoService {
    /// Create a new photo service.
    #[must_use]
    pub const fn new(photo_repo: PhotoUrlRepository, restaurant_repo: RestaurantRepository) -> Self {
        Self {
            photo_repo,
            restaurant_repo,
        }
    }

    /// Attach photos to a restaurant.
    pub async fn add_photos(
        &self,
        restaurant_id: i64,
        urls: &[String],
    ) -> AppResult<Vec<photo_url::Model>> {
        self.restaurant_repo.get_by_id(restaurant_id).await?;
        self.photo_repo.create_many(restaurant_id, urls).await
    }

    /// Delete a photo row from a restaurant.
    ///
    /// The photo must belong to the restaurant in the request path.
    pub async fn delete(&self, restaurant_id: i64, photo_url_id: i64) -> AppResult<()> {
        let photo = self
            .photo_repo
            .find_by_id(photo_url_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("PhotoUrl: {photo_url_id}")))?;

        if photo.restaurant_id != restaurant_id {
            return Err(AppError::NotFound(format!("PhotoUrl: {photo_url_id}")));
        }

        self.photo_repo.delete(photo_url_id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_delete_missing_photo_is_not_found() {
        let photo_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<photo_url::Model>::new()])
                .into_connection(),
        );
        let restaurant_db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let service = PhotoService::new(
            PhotoUrlRepository::new(photo_db),
            RestaurantRepository::new(restaurant_db),
        );
        let result = service.delete(1, 999).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_photo_of_other_restaurant_is_not_found() {
        let photo = photo_url::Model {
            id: 5,
            url: "http://photos.example.com/5.jpg".to_string(),
            restaurant_id: 2,
        };

        let photo_db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[photo]])
                .into_connection(),
        );
        let restaurant_db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let service = PhotoService::new(
            PhotoUrlRepository::new(photo_db),
            RestaurantRepository::new(restaurant_db),
        );
        let result = service.delete(1, 5).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
