//! Cuisine service.

use kuchikomi_common::{AppError, AppResult};
use kuchikomi_db::{entities::cuisine, repositories::CuisineRepository};
use sea_orm::Set;
use serde::Deserialize;
use validator::Validate;

/// Cuisine service.
#[derive(Clone)]
pub struct CuisineService {
    cuisine_repo: CuisineRepository,
}

/// Input for creating a cuisine.
#[derive(Debug, Deserialize, Validate)]
pub struct NewCuisineInput {
    #[validate(length(min = 1, max = 256))]
    pub name: String,
}

impl CuisineService {
    /// Create a new cuisine service.
    #[must_use]
    pub const fn new(cuisine_repo: CuisineRepository) -> Self {
        Self { cuisine_repo }
    }

    /// Get all cuisines.
    pub async fn get_all(&self) -> AppResult<Vec<cuisine::Model>> {
        self.cuisine_repo.get_all().await
    }

    /// Get a cuisine by ID.
    pub async fn get(&self, id: i64) -> AppResult<cuisine::Model> {
        self.cuisine_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cuisine: {id}")))
    }

    /// Create a new cuisine.
    pub async fn create(&self, input: NewCuisineInput) -> AppResult<cuisine::Model> {
        input.validate()?;

        let model = cuisine::ActiveModel {
            name: Set(input.name),
            ..Default::default()
        };
        self.cuisine_repo.create(model).await
    }
}
