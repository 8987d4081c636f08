//! Token verification state machine.
//!
//! A token string passes through fixed stages: structural decode,
//! signature and time/scope validation, the owner's issued-at cutoff,
//! then the denylist. Signature and time checks always run before any
//! revocation lookup; a tampered token reports `SignatureInvalid`,
//! never a revocation state.

use tracing::debug;

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::repositories::{DeniedTokenRepository, UserRepository};

use super::codec::TokenCodec;
use super::secret::SecretResolver;

/// A fully validated token: the claims plus the owning user record,
/// already loaded for the cutoff check.
pub struct VerifiedToken {
    pub claims: Claims,
    pub user: User,
}

/// Runs the verification stages over a token string
pub struct TokenVerifier<'a, U, D> {
    users: &'a U,
    denylist: &'a D,
    secrets: &'a SecretResolver,
    codec: &'a TokenCodec,
}

impl<'a, U: UserRepository, D: DeniedTokenRepository> TokenVerifier<'a, U, D> {
    pub fn new(
        users: &'a U,
        denylist: &'a D,
        secrets: &'a SecretResolver,
        codec: &'a TokenCodec,
    ) -> Self {
        Self {
            users,
            denylist,
            secrets,
            codec,
        }
    }

    /// Validates `token` end to end, or rejects with the specific reason.
    pub async fn verify(&self, token: &str) -> Result<VerifiedToken, DomainError> {
        // Key selection. In per-user mode the subject comes from the
        // unverified payload; a forged subject selects a key the
        // signature cannot match, so the decode below still fails.
        let (secret, peeked_user) = if self.secrets.per_user_enabled() {
            match self.peek_user(token).await? {
                Some(user) => (self.secrets.for_verification(Some(&user)), Some(user)),
                None => (self.secrets.for_verification(None), None),
            }
        } else {
            (self.secrets.for_verification(None), None)
        };

        // Signature, expiry, audience, issuer.
        let claims = self.codec.decode_and_verify(token, &secret)?;

        let user = match peeked_user {
            Some(user) => user,
            None => {
                let subject = claims.subject_id().map_err(|_| TokenError::Malformed)?;
                self.users
                    .find_by_id(subject)
                    .await?
                    .ok_or(TokenError::UserNotFound)?
            }
        };

        // Cutoff revocation: everything issued before the user's cutoff
        // is out, including every token refreshed from such an issue.
        if claims.orig_iat < user.issued_at_cutoff.timestamp() {
            debug!(user_id = %user.id, "token rejected by issued-at cutoff");
            return Err(TokenError::RevokedByCutoff.into());
        }

        // Denylist: exact token string revocation.
        if self
            .denylist
            .find_denied_token(user.id, token)
            .await?
            .is_some()
        {
            debug!(user_id = %user.id, "token found on denylist");
            return Err(TokenError::Denied.into());
        }

        Ok(VerifiedToken { claims, user })
    }

    /// Resolves the claimed subject from the unverified payload.
    ///
    /// A payload that does not parse cannot carry a valid signature
    /// either, so structural failure here is `Ok(None)`: key selection
    /// falls back to the process-wide secret and the signature check
    /// rejects the token. An unresolvable subject is fatal because the
    /// per-user key cannot exist without the record.
    async fn peek_user(&self, token: &str) -> Result<Option<User>, DomainError> {
        let Ok(unverified) = self.codec.decode_unverified(token) else {
            return Ok(None);
        };
        let Ok(subject) = unverified.subject_id() else {
            return Ok(None);
        };

        match self.users.find_by_id(subject).await? {
            Some(user) => Ok(Some(user)),
            None => Err(TokenError::UserNotFound.into()),
        }
    }
}
