//! User provisioning service
//!
//! Creates and resolves identity rows. Registration, authentication and
//! password handling live outside this service; callers arrive with a
//! session-provided `user_id`.

use crate::error::ApiError;
use crate::repositories::{UserRecord, UserRepository};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

/// User provisioning service
pub struct UserService;

impl UserService {
    /// Create an identity row for a new user
    pub async fn create_user(pool: &PgPool, username: &str) -> Result<UserRecord, ApiError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ApiError::Validation("Username cannot be empty".to_string()));
        }

        let record = UserRepository::create(pool, username)
            .await
            .map_err(ApiError::Internal)?;

        info!(user_id = %record.id, "user created");
        Ok(record)
    }

    /// Resolve a user by id, failing with NotFound when absent
    pub async fn get_user(pool: &PgPool, user_id: Uuid) -> Result<UserRecord, ApiError> {
        UserRepository::get_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }
}
