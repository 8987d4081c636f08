//! Rejection taxonomy for session token operations.
//!
//! Every kind reaches the caller distinctly so it can choose the right
//! corrective action (silent refresh, full re-login, nothing). Collapsing
//! kinds into a generic "invalid session" message is left to user-facing
//! surfaces.

use thiserror::Error;

/// Token verification and lifecycle rejections.
///
/// All variants are terminal from the caller's perspective; none should
/// trigger an automatic retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The token string is not structurally a signed token
    #[error("Malformed token")]
    Malformed,

    /// The signature does not match the resolved key
    #[error("Token signature verification failed")]
    SignatureInvalid,

    /// The access token's expiry instant has passed
    #[error("Token expired")]
    Expired,

    /// The audience claim does not match the configured audience
    #[error("Token audience mismatch")]
    AudienceMismatch,

    /// The issuer claim does not match the configured issuer
    #[error("Token issuer mismatch")]
    IssuerMismatch,

    /// The token was originally issued before the owner's cutoff
    #[error("Token revoked by issued-at cutoff")]
    RevokedByCutoff,

    /// The exact token string was denylisted
    #[error("Token denied")]
    Denied,

    /// The refresh chain's total lifetime is exhausted; re-authenticate
    #[error("Refresh window expired")]
    RefreshWindowExpired,

    /// The subject does not resolve to a user record
    #[error("User not found")]
    UserNotFound,

    /// Claims could not be signed (malformed input to the codec)
    #[error("Token encoding failed")]
    EncodingFailed,
}
