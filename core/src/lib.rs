//! # Session Token Core
//!
//! Domain layer of the session token subsystem: entities, repository
//! interfaces, error taxonomy, and the token lifecycle services (issue,
//! verify, refresh, deny).

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, DeniedToken, User};
pub use errors::{DomainError, DomainResult, TokenError};
pub use repositories::{DeniedTokenRepository, UserRepository};
pub use services::{
    RefreshPolicy, SecretResolver, TokenCodec, TokenIssuer, TokenService, TokenServiceConfig,
    TokenVerifier, VerifiedToken,
};
