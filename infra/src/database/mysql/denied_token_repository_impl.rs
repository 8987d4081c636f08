//! MySQL implementation of the DeniedTokenRepository trait.
//!
//! Denylist rows live in the `denied_tokens` table with a unique key on
//! `(user_id, token_digest)`. Inserts use `INSERT IGNORE` so a repeated
//! denial of the same token is a no-op that resolves to the existing
//! row. Rows are never deleted here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use st_core::domain::entities::token::DeniedToken;
use st_core::errors::DomainError;
use st_core::repositories::DeniedTokenRepository;

/// MySQL implementation of DeniedTokenRepository
pub struct MySqlDeniedTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlDeniedTokenRepository {
    /// Create a new MySQL denylist repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to DeniedToken entity
    fn row_to_denied_token(row: &sqlx::mysql::MySqlRow) -> Result<DeniedToken, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get user_id: {}", e),
        })?;

        Ok(DeniedToken {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid denylist row UUID: {}", e),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid user UUID: {}", e),
            })?,
            token: row.try_get("token").map_err(|e| DomainError::Internal {
                message: format!("Failed to get token: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl DeniedTokenRepository for MySqlDeniedTokenRepository {
    async fn save_denied_token(&self, entry: DeniedToken) -> Result<DeniedToken, DomainError> {
        // Token strings exceed MySQL's unique index length, so the key
        // is over a SHA-256 digest column computed in SQL.
        let insert = r#"
            INSERT IGNORE INTO denied_tokens (id, user_id, token, token_digest, created_at)
            VALUES (?, ?, ?, UNHEX(SHA2(?, 256)), ?)
        "#;

        sqlx::query(insert)
            .bind(entry.id.to_string())
            .bind(entry.user_id.to_string())
            .bind(&entry.token)
            .bind(&entry.token)
            .bind(entry.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to save denied token: {}", e),
            })?;

        // Resolve to the stored row: the one just inserted, or the
        // pre-existing one the IGNORE kept.
        self.find_denied_token(entry.user_id, &entry.token)
            .await?
            .ok_or_else(|| DomainError::Internal {
                message: "Denied token row missing after insert".to_string(),
            })
    }

    async fn find_denied_token(
        &self,
        user_id: Uuid,
        token: &str,
    ) -> Result<Option<DeniedToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, token, created_at
            FROM denied_tokens
            WHERE user_id = ? AND token_digest = UNHEX(SHA2(?, 256)) AND token = ?
        "#;

        let row = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(token)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find denied token: {}", e),
            })?;

        row.as_ref().map(Self::row_to_denied_token).transpose()
    }
}
