//! Refresh chain policy.
//!
//! A chain of refreshed tokens shares one `orig_iat`; the policy bounds
//! the chain's total lifetime at `orig_iat + max_refresh_window` no
//! matter how many exchanges happen inside it.

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

/// Decides whether a still-valid token may be exchanged for a new one
pub struct RefreshPolicy {
    enabled: bool,
    max_refresh_window: Duration,
}

impl RefreshPolicy {
    /// Creates a new policy
    pub fn new(enabled: bool, max_refresh_window: Duration) -> Self {
        Self {
            enabled,
            max_refresh_window,
        }
    }

    /// Whether `claims` may be refreshed at `now`
    pub fn can_refresh(&self, claims: &Claims, now: DateTime<Utc>) -> bool {
        self.enabled
            && claims
                .original_issued_at()
                .is_some_and(|orig| now <= orig + self.max_refresh_window)
    }

    /// Approves a refresh or rejects with `RefreshWindowExpired`.
    ///
    /// Refresh being disabled rejects the same way: either way the
    /// caller's corrective action is to re-authenticate.
    pub fn check(&self, claims: &Claims, now: DateTime<Utc>) -> Result<(), DomainError> {
        if self.can_refresh(claims, now) {
            Ok(())
        } else {
            Err(TokenError::RefreshWindowExpired.into())
        }
    }
}
