//! Denylist repository trait: the append-only revocation store.
//!
//! Rows record exact token strings revoked against their owning user.
//! They are never mutated or deleted by this subsystem; pruning of rows
//! whose tokens have long expired is an external concern.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::DeniedToken;
use crate::errors::DomainError;

/// Persistence operations for denied token strings
#[async_trait]
pub trait DeniedTokenRepository: Send + Sync {
    /// Record a denied token.
    ///
    /// Idempotent on `(user_id, token)`: recording the same pair again
    /// must not error and must return the already-stored row rather than
    /// creating a duplicate.
    async fn save_denied_token(&self, entry: DeniedToken) -> Result<DeniedToken, DomainError>;

    /// Point lookup for the verifier.
    ///
    /// # Returns
    /// * `Ok(Some(DeniedToken))` - The exact token string is denied
    /// * `Ok(None)` - No matching row
    /// * `Err(DomainError)` - Database error occurred
    async fn find_denied_token(
        &self,
        user_id: Uuid,
        token: &str,
    ) -> Result<Option<DeniedToken>, DomainError>;
}
