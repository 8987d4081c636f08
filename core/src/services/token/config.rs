//! Configuration for the token service

use std::str::FromStr;

use chrono::Duration;
use jsonwebtoken::Algorithm;
use st_shared::TokenConfig;

use crate::errors::DomainError;

/// Parsed configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Signing secret
    pub secret: String,
    /// Signing algorithm
    pub algorithm: Algorithm,
    /// Access token lifetime
    pub access_ttl: Duration,
    /// Whether tokens may be exchanged for fresh ones
    pub refresh_enabled: bool,
    /// Maximum lifetime of a refresh chain, from original issuance
    pub max_refresh_window: Duration,
    /// Audience claim, stamped and checked when set
    pub audience: Option<String>,
    /// Issuer claim, stamped and checked when set
    pub issuer: Option<String>,
    /// Derive per-user signing secrets from the user record
    pub per_user_secret_enabled: bool,
    /// Clock skew allowance in seconds for expiry validation
    pub leeway_seconds: u64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            access_ttl: Duration::minutes(15),
            refresh_enabled: true,
            max_refresh_window: Duration::days(7),
            audience: None,
            issuer: None,
            per_user_secret_enabled: false,
            leeway_seconds: 0,
        }
    }
}

impl TokenServiceConfig {
    /// Parses the shared configuration into service form
    pub fn from_shared(config: &TokenConfig) -> Result<Self, DomainError> {
        let algorithm =
            Algorithm::from_str(&config.algorithm).map_err(|_| DomainError::Validation {
                message: format!("Unsupported signing algorithm: {}", config.algorithm),
            })?;

        Ok(Self {
            secret: config.secret.clone(),
            algorithm,
            access_ttl: Duration::seconds(config.access_ttl_seconds),
            refresh_enabled: config.refresh_enabled,
            max_refresh_window: Duration::seconds(config.max_refresh_window_seconds),
            audience: config.audience.clone(),
            issuer: config.issuer.clone(),
            per_user_secret_enabled: config.per_user_secret_enabled,
            leeway_seconds: config.leeway_seconds,
        })
    }
}
