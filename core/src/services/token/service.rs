//! Facade over the token lifecycle: login, verify, refresh, deny.

use chrono::Utc;
use tracing::{debug, info};

use crate::domain::entities::token::{Claims, DeniedToken};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::{DeniedTokenRepository, UserRepository};

use super::codec::TokenCodec;
use super::config::TokenServiceConfig;
use super::issuer::TokenIssuer;
use super::refresh::RefreshPolicy;
use super::secret::SecretResolver;
use super::verifier::{TokenVerifier, VerifiedToken};

/// Session token service over pluggable user and denylist stores.
pub struct TokenService<U, D> {
    users: U,
    denylist: D,
    config: TokenServiceConfig,
    codec: TokenCodec,
    secrets: SecretResolver,
    issuer: TokenIssuer,
    policy: RefreshPolicy,
}

impl<U: UserRepository, D: DeniedTokenRepository> TokenService<U, D> {
    pub fn new(users: U, denylist: D, config: TokenServiceConfig) -> Self {
        let codec = TokenCodec::new(&config);
        let secrets = SecretResolver::new(config.secret.clone(), config.per_user_secret_enabled);
        let issuer = TokenIssuer::new(
            config.access_ttl,
            config.audience.clone(),
            config.issuer.clone(),
        );
        let policy = RefreshPolicy::new(config.refresh_enabled, config.max_refresh_window);

        Self {
            users,
            denylist,
            config,
            codec,
            secrets,
            issuer,
            policy,
        }
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    fn verifier(&self) -> TokenVerifier<'_, U, D> {
        TokenVerifier::new(&self.users, &self.denylist, &self.secrets, &self.codec)
    }

    /// Issues a fresh token for an authenticated user.
    ///
    /// Authentication itself happens upstream; by the time a `User`
    /// reaches this call the caller has already proven the identity.
    pub async fn login(&self, user: &User) -> DomainResult<String> {
        let claims = self.issuer.issue_new(user);
        let token = self.codec.encode(&claims, &self.secrets.for_signing(user))?;

        debug!(user_id = %user.id, "issued access token");
        Ok(token)
    }

    /// Validates a bearer token and returns its claims.
    pub async fn verify(&self, token: &str) -> DomainResult<Claims> {
        let verified = self.verifier().verify(token).await?;
        Ok(verified.claims)
    }

    /// Exchanges a still-valid token for a fresh one.
    ///
    /// The new token carries the chain's original issuance time forward,
    /// so refreshing never extends a chain past the configured window.
    /// Identity fields in the new claims come from the current user
    /// record, not the old token.
    pub async fn refresh(&self, token: &str) -> DomainResult<String> {
        let VerifiedToken { claims, user } = self.verifier().verify(token).await?;
        self.policy.check(&claims, Utc::now())?;

        let refreshed = self.issuer.issue_refreshed(&user, &claims);
        let token = self
            .codec
            .encode(&refreshed, &self.secrets.for_signing(&user))?;

        debug!(user_id = %user.id, orig_iat = claims.orig_iat, "refreshed access token");
        Ok(token)
    }

    /// Revokes one specific token for the remainder of its lifetime.
    ///
    /// The token must still verify; denying an expired or tampered token
    /// reports that rejection instead. Denying a token that is already
    /// on the denylist succeeds and returns the existing entry.
    pub async fn deny(&self, token: &str) -> DomainResult<DeniedToken> {
        let VerifiedToken { claims, user } = match self.verifier().verify(token).await {
            Ok(verified) => verified,
            Err(DomainError::Token(TokenError::Denied)) => {
                return self.find_existing_denial(token).await;
            }
            Err(err) => return Err(err),
        };

        let entry = self
            .denylist
            .save_denied_token(DeniedToken::new(user.id, token.to_string()))
            .await?;

        info!(user_id = %user.id, expires_at = ?claims.expires_at(), "token denied");
        Ok(entry)
    }

    /// Revokes every outstanding token for a user by advancing the
    /// issued-at cutoff on their record.
    pub async fn deny_all_for_user(&self, user_id: uuid::Uuid) -> DomainResult<()> {
        let cutoff = Utc::now();
        let updated = self.users.set_issued_at_cutoff(user_id, cutoff).await?;
        if !updated {
            // Zero rows covers both a missing user and a stored cutoff
            // already at or past this instant. Only the former is an
            // error; in the latter case the revocation is in effect.
            if self.users.find_by_id(user_id).await?.is_none() {
                return Err(TokenError::UserNotFound.into());
            }
            debug!(user_id = %user_id, "issued-at cutoff already current");
            return Ok(());
        }

        info!(user_id = %user_id, %cutoff, "issued-at cutoff advanced");
        Ok(())
    }

    async fn find_existing_denial(&self, token: &str) -> DomainResult<DeniedToken> {
        // The rejection came from the denylist, so the key-selection peek
        // already resolved a real user for this token.
        let subject = self
            .codec
            .decode_unverified(token)?
            .subject_id()
            .map_err(|_| TokenError::Malformed)?;

        self.denylist
            .find_denied_token(subject, token)
            .await?
            .ok_or_else(|| DomainError::Internal {
                message: "denylist entry disappeared between verify and lookup".to_string(),
            })
    }
}
