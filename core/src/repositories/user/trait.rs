//! User repository trait: the boundary contract with user storage.
//!
//! User records and their CRUD belong to the account-management side of
//! the service. The token subsystem only reads identity fields and key
//! material, and advances the issued-at cutoff.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Read/cutoff access to user records
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by their email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Advance a user's issued-at cutoff.
    ///
    /// Invalidates every token originally issued before `cutoff`. The
    /// stored value is monotonic: a cutoff earlier than the current one
    /// is a no-op.
    ///
    /// # Returns
    /// * `Ok(true)` - The cutoff advanced
    /// * `Ok(false)` - User not found, or the cutoff was not later than
    ///   the stored one
    async fn set_issued_at_cutoff(
        &self,
        id: Uuid,
        cutoff: DateTime<Utc>,
    ) -> Result<bool, DomainError>;
}
