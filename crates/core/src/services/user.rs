//! User service.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use kuchikomi_common::{AppError, AppResult};
use kuchikomi_db::{entities::user, repositories::UserRepository};
use sea_orm::Set;
use serde::Deserialize;
use validator::Validate;

/// User service for registration and session handling.
#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
}

/// Input for registering a new user.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUserInput {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 256))]
    pub name: String,

    #[validate(length(min = 8, max = 256))]
    pub password: String,
}

/// Input for logging in.
#[derive(Debug, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// A logged-in session: the minted token and its user.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: user::Model,
}

impl UserService {
    /// Create a new user service.
    #[must_use]
    pub const fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    /// Register a new user.
    pub async fn register(&self, input: RegisterUserInput) -> AppResult<user::Model> {
        input.validate()?;

        if self.user_repo.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let password_hash = hash_password(&input.password)?;

        let model = user::ActiveModel {
            email: Set(input.email),
            name: Set(input.name),
            password_hash: Set(password_hash),
            token: Set(None),
            ..Default::default()
        };

        let user = self.user_repo.create(model).await?;
        tracing::debug!(user_id = user.id, "Registered user");

        Ok(user)
    }

    /// Log a user in, minting a fresh session token.
    ///
    /// Returns `Ok(None)` on unknown email or wrong password; the boundary
    /// maps that to 401.
    pub async fn login(&self, input: LoginInput) -> AppResult<Option<Session>> {
        let Some(user) = self.user_repo.find_by_email(&input.email).await? else {
            return Ok(None);
        };

        if !verify_password(&input.password, &user.password_hash)? {
            return Ok(None);
        }

        let token = generate_token();
        let user = self.user_repo.set_token(user, &token).await?;

        Ok(Some(Session { token, user }))
    }

    /// Log a user out, revoking the current token.
    pub async fn logout(&self, user: user::Model) -> AppResult<()> {
        self.user_repo.clear_token(user).await?;
        Ok(())
    }

    /// Authenticate a user by session token.
    pub async fn authenticate_by_token(&self, token: &str) -> AppResult<user::Model> {
        self.user_repo
            .find_by_token(token)
            .await?
            .ok_or(AppError::Unauthorized)
    }

    /// Get a user by ID.
    pub async fn get(&self, id: i64) -> AppResult<user::Model> {
        self.user_repo.get_by_id(id).await
    }
}

/// Hash a password using Argon2.
fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AppError::Internal(format!("Invalid hash: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Generate an opaque session token.
fn generate_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
