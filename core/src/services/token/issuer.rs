//! Claim set construction for logins and refreshes.

use chrono::{Duration, Utc};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;

/// Builds claim sets; signing is the codec's job
pub struct TokenIssuer {
    access_ttl: Duration,
    audience: Option<String>,
    issuer: Option<String>,
}

impl TokenIssuer {
    /// Creates a new issuer
    pub fn new(access_ttl: Duration, audience: Option<String>, issuer: Option<String>) -> Self {
        Self {
            access_ttl,
            audience,
            issuer,
        }
    }

    /// Claims for a freshly authenticated user: `orig_iat` starts a new
    /// refresh chain at now.
    pub fn issue_new(&self, user: &User) -> Claims {
        let now = Utc::now();
        Claims::for_user(
            user,
            now + self.access_ttl,
            now.timestamp(),
            self.audience.as_deref(),
            self.issuer.as_deref(),
        )
    }

    /// Claims for a refresh: fresh expiry, `orig_iat` copied forward
    /// unchanged so the chain's total lifetime stays bounded.
    ///
    /// Only call this after the prior token was accepted by the verifier
    /// and the refresh policy approved the exchange.
    pub fn issue_refreshed(&self, user: &User, prior: &Claims) -> Claims {
        let now = Utc::now();
        Claims::for_user(
            user,
            now + self.access_ttl,
            prior.orig_iat,
            self.audience.as_deref(),
            self.issuer.as_deref(),
        )
    }
}
