//! Token lifecycle services
//!
//! This module implements the session token lifecycle:
//! - Claim issuance for logins and refreshes
//! - Signing and verification of token strings
//! - Revocation via the per-user issued-at cutoff and the denylist
//! - Refresh chains with a bounded total lifetime

mod codec;
mod config;
mod issuer;
mod refresh;
mod secret;
mod service;
mod verifier;

#[cfg(test)]
mod tests;

pub use codec::TokenCodec;
pub use config::TokenServiceConfig;
pub use issuer::TokenIssuer;
pub use refresh::RefreshPolicy;
pub use secret::SecretResolver;
pub use service::TokenService;
pub use verifier::{TokenVerifier, VerifiedToken};
