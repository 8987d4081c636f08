//! MySQL implementation of the UserRepository trait.
//!
//! Reads user records from the `users` table and advances the issued-at
//! cutoff. The cutoff update is guarded in SQL so concurrent writers can
//! never move it backwards.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use st_core::domain::entities::user::User;
use st_core::errors::DomainError;
use st_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        let token_seed: String = row
            .try_get("token_seed")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get token_seed: {}", e),
            })?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid user UUID: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Internal {
                message: format!("Failed to get email: {}", e),
            })?,
            username: row.try_get("username").map_err(|e| DomainError::Internal {
                message: format!("Failed to get username: {}", e),
            })?,
            issued_at_cutoff: row
                .try_get::<DateTime<Utc>, _>("issued_at_cutoff")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get issued_at_cutoff: {}", e),
                })?,
            token_seed: Uuid::parse_str(&token_seed).map_err(|e| DomainError::Internal {
                message: format!("Invalid token seed UUID: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, username, issued_at_cutoff, token_seed, created_at, updated_at
            FROM users
            WHERE id = ?
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find user by id: {}", e),
            })?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, username, issued_at_cutoff, token_seed, created_at, updated_at
            FROM users
            WHERE email = ?
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find user by email: {}", e),
            })?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn set_issued_at_cutoff(
        &self,
        id: Uuid,
        cutoff: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        // The WHERE guard keeps the cutoff monotonic under concurrent
        // writers: a stale or earlier cutoff matches zero rows.
        let query = r#"
            UPDATE users
            SET issued_at_cutoff = ?, updated_at = NOW()
            WHERE id = ? AND issued_at_cutoff < ?
        "#;

        let result = sqlx::query(query)
            .bind(cutoff)
            .bind(id.to_string())
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to set issued-at cutoff: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
