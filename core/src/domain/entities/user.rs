//! User entity as seen by the token subsystem.
//!
//! User records are owned by the account-management side of the service;
//! the token subsystem reads identity fields, the issued-at cutoff, and
//! the per-user key material through the repository seam.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user, referenced by the token lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, unique across users
    pub email: String,

    /// Display username
    pub username: String,

    /// Tokens originally issued before this instant are invalid. Advanced
    /// to force logout of everything issued so far; never moves backwards.
    pub issued_at_cutoff: DateTime<Utc>,

    /// Stable per-user key material. Only consulted when per-user signing
    /// secrets are enabled; rotating it invalidates this user's tokens.
    pub token_seed: Uuid,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(email: impl Into<String>, username: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            username: username.into(),
            issued_at_cutoff: now,
            token_seed: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Advances the issued-at cutoff so every token issued before `cutoff`
    /// stops verifying. The cutoff is monotonic: an earlier instant is
    /// ignored.
    pub fn invalidate_issued_tokens(&mut self, cutoff: DateTime<Utc>) {
        if cutoff > self.issued_at_cutoff {
            self.issued_at_cutoff = cutoff;
            self.updated_at = Utc::now();
        }
    }

    /// Replaces the per-user key material. When per-user secrets are
    /// enabled this invalidates every outstanding token of this user.
    pub fn rotate_token_seed(&mut self) {
        self.token_seed = Uuid::new_v4();
        self.updated_at = Utc::now();
    }
}
