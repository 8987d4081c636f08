//! Token entities: signed claims and denylist rows.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// Claim set embedded in a signed token.
///
/// Created at issuance and read-only afterwards. `orig_iat` is the instant
/// the first token of a refresh chain was issued and is copied forward
/// unchanged on every refresh, which is what bounds the chain's total
/// lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Display username
    pub username: String,

    /// Email address, when the user record carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Expiration timestamp (unix seconds)
    pub exp: i64,

    /// Original issuance timestamp of the refresh chain (unix seconds)
    pub orig_iat: i64,

    /// Audience, present when configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,

    /// Issuer, present when configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

impl Claims {
    /// Builds the claim set for a user.
    ///
    /// `orig_iat` is `now` for a brand new token; a refresh passes the
    /// prior token's `orig_iat` through unchanged.
    pub fn for_user(
        user: &User,
        expires_at: DateTime<Utc>,
        orig_iat: i64,
        audience: Option<&str>,
        issuer: Option<&str>,
    ) -> Self {
        debug_assert!(orig_iat <= expires_at.timestamp());
        Self {
            sub: user.id.to_string(),
            username: user.username.clone(),
            email: Some(user.email.clone()),
            exp: expires_at.timestamp(),
            orig_iat,
            aud: audience.map(str::to_owned),
            iss: issuer.map(str::to_owned),
        }
    }

    /// Gets the subject as a user ID
    pub fn subject_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Checks whether the expiry instant has passed
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Original issuance instant of the refresh chain
    pub fn original_issued_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.orig_iat, 0).single()
    }

    /// Expiry instant
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}

/// A revoked token string, recorded against its owner.
///
/// Rows are append-only: once a token string is denied it stays unusable.
/// Expired rows may be pruned externally; this subsystem never deletes
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeniedToken {
    /// Unique identifier for the denylist row
    pub id: Uuid,

    /// User the denied token belongs to
    pub user_id: Uuid,

    /// The exact signed token text
    pub token: String,

    /// Timestamp when the denial was recorded
    pub created_at: DateTime<Utc>,
}

impl DeniedToken {
    /// Creates a new denylist entry
    pub fn new(user_id: Uuid, token: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            token: token.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_claims(user: &User) -> Claims {
        let now = Utc::now();
        Claims::for_user(user, now + Duration::seconds(300), now.timestamp(), None, None)
    }

    #[test]
    fn test_subject_id_parsing() {
        let user = User::new("ana@example.com", "ana");
        let claims = sample_claims(&user);

        assert_eq!(claims.subject_id().unwrap(), user.id);
        assert_eq!(claims.username, "ana");
        assert_eq!(claims.email.as_deref(), Some("ana@example.com"));
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expired_claims() {
        let user = User::new("ana@example.com", "ana");
        let mut claims = sample_claims(&user);
        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
    }

    #[test]
    fn test_instant_accessors() {
        let user = User::new("ana@example.com", "ana");
        let claims = sample_claims(&user);

        let orig = claims.original_issued_at().unwrap();
        let exp = claims.expires_at().unwrap();
        assert_eq!(orig.timestamp(), claims.orig_iat);
        assert_eq!(exp - orig, Duration::seconds(300));
    }

    #[test]
    fn test_optional_claims_off_the_wire() {
        let user = User::new("ana@example.com", "ana");
        let claims = sample_claims(&user);

        let json = serde_json::to_string(&claims).unwrap();
        assert!(!json.contains("aud"));
        assert!(!json.contains("iss"));

        let back: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(back, claims);
    }

    #[test]
    fn test_denied_token_entry() {
        let user_id = Uuid::new_v4();
        let entry = DeniedToken::new(user_id, "signed.token.text");

        assert_eq!(entry.user_id, user_id);
        assert_eq!(entry.token, "signed.token.text");
    }
}
