//! Comment service.

use crate::services::projection::EntityMap;
use kuchikomi_common::{AppError, AppResult};
use kuchikomi_db::{
    entities::{comment, user},
    repositories::{CommentRepository, RestaurantRepository, UserRepository},
};
use sea_orm::Set;
use serde::Deserialize;
use validator::Validate;

/// Comment service for business logic.
#[derive(Clone)]
pub struct CommentService {
    comment_repo: CommentRepository,
    restaurant_repo: RestaurantRepository,
    user_repo: UserRepository,
}

/// A comment paired with its author.
#[derive(Debug, Clone)]
pub struct CommentWithAuthor {
    pub comment: comment::Model,
    pub user: user::Model,
}

/// Input for creating a new comment.
#[derive(Debug, Deserialize, Validate)]
pub struct NewCommentInput {
    #[validate(length(min = 1, max = 3000))]
    pub content: String,
}

impl CommentService {
    /// Create a new comment service.
    #[must_use]
    pub const fn new(
        comment_repo: CommentRepository,
        restaurant_repo: RestaurantRepository,
        user_repo: UserRepository,
    ) -> Self {
        Self {
            comment_repo,
            restaurant_repo,
            user_repo,
        }
    }

    /// Get a restaurant's comments, each paired with its author.
    ///
    /// One comment fetch plus one batched author fetch; a comment whose
    /// author row is gone is dropped rather than served half-populated.
    /// Order matches the comment source.
    pub async fn find_for_restaurant(
        &self,
        restaurant_id: i64,
    ) -> AppResult<Vec<CommentWithAuthor>> {
        let comments = self.comment_repo.find_for_restaurant(restaurant_id).await?;

        let author_ids: Vec<i64> = comments.iter().map(|c| c.created_by_user_id).collect();
        let authors = EntityMap::build(self.user_repo.find_by_ids(&author_ids).await?, |u| u.id);

        Ok(comments
            .into_iter()
            .filter_map(|comment| {
                authors
                    .get(comment.created_by_user_id)
                    .cloned()
                    .map(|user| CommentWithAuthor { comment, user })
            })
            .collect())
    }

    /// Create a new comment on a restaurant.
    pub async fn create(
        &self,
        user_id: i64,
        restaurant_id: i64,
        input: NewCommentInput,
    ) -> AppResult<CommentWithAuthor> {
        input.validate()?;

        // Commenting on a missing restaurant is a 404, not an FK violation
        self.restaurant_repo.get_by_id(restaurant_id).await?;

        let user = self.user_repo.get_by_id(user_id).await?;

        let model = comment::ActiveModel {
            content: Set(input.content),
            restaurant_id: Set(restaurant_id),
            created_by_user_id: Set(user_id),
            ..Default::default()
        };
        let comment = self.comment_repo.create(model).await?;

        tracing::debug!(comment_id = comment.id, restaurant_id, "Created comment");

        Ok(CommentWithAuthor { comment, user })
    }

    /// Delete a comment. Only the author may delete it.
    pub async fn delete(&self, comment_id: i64, acting_user_id: i64) -> AppResult<()> {
        let comment = self
            .comment_repo
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Comment: {comment_id}")))?;

        if comment.created_by_user_id != acting_user_id {
            return Err(AppError::Forbidden(
                "Only the author can delete a comment".to_string(),
            ));
        }

        self.comment_repo.delete(comment_id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;

    fn create_test_comment(id: i64, content: &str, restaurant_id: i64, author: i64) -> comment::Model {
        comment::Model {
            id,
            content: content.to_string(),
            restaurant_id,
            created_by_user_id: author,
            created_at: Utc::now().into(),
        }
    }

    fn create_test_user(id: i64, name: &str) -> user::Model {
        user::Model {
            id,
            email: format!("{name}@example.com"),
            name: name.to_string(),
            password_hash: "$argon2id$test".to_string(),
            token: None,
            created_at: Utc::now().into(),
        }
    }

    fn service_with(
        comment_db: sea_orm::DatabaseConnection,
        restaurant_db: sea_orm::DatabaseConnection,
        user_db: sea_orm::DatabaseConnection,
    ) -> CommentService {
        CommentService::new(
            CommentRepository::new(Arc::new(comment_db)),
            RestaurantRepository::new(Arc::new(restaurant_db)),
            UserRepository::new(Arc::new(user_db)),
        )
    }

    #[tokio::test]
    async fn test_find_for_restaurant_pairs_authors_in_source_order() {
        let c1 = create_test_comment(1, "Delicious", 1, 4);
        let c2 = create_test_comment(2, "Too crowded", 1, 5);
        let u4 = create_test_user(4, "hanako");
        let u5 = create_test_user(5, "jiro");

        let comment_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[c1, c2]])
            .into_connection();
        let user_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[u4, u5]])
            .into_connection();
        let restaurant_db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let service = service_with(comment_db, restaurant_db, user_db);
        let result = service.find_for_restaurant(1).await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].comment.content, "Delicious");
        assert_eq!(result[0].user.name, "hanako");
        assert_eq!(result[1].user.name, "jiro");
    }

    #[tokio::test]
    async fn test_find_for_restaurant_drops_comment_with_missing_author() {
        let c1 = create_test_comment(1, "Orphaned", 1, 4);
        let c2 = create_test_comment(2, "Kept", 1, 5);
        let u5 = create_test_user(5, "jiro");

        let comment_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[c1, c2]])
            .into_connection();
        let user_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[u5]])
            .into_connection();
        let restaurant_db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let service = service_with(comment_db, restaurant_db, user_db);
        let result = service.find_for_restaurant(1).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].comment.content, "Kept");
    }

    #[tokio::test]
    async fn test_find_for_restaurant_no_comments() {
        let comment_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<comment::Model>::new()])
            .into_connection();
        let user_db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let restaurant_db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let service = service_with(comment_db, restaurant_db, user_db);
        let result = service.find_for_restaurant(1).await.unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_delete_by_non_author_is_forbidden() {
        let c1 = create_test_comment(1, "Delicious", 1, 4);

        let comment_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[c1]])
            .into_connection();
        let user_db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let restaurant_db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let service = service_with(comment_db, restaurant_db, user_db);
        let result = service.delete(1, 99).await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_comment_is_not_found() {
        let comment_db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<comment::Model>::new()])
            .into_connection();
        let user_db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let restaurant_db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let service = service_with(comment_db, restaurant_db, user_db);
        let result = service.delete(1, 4).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
