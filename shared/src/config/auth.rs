//! Token signing and validation configuration

use serde::{Deserialize, Serialize};

/// Session token configuration
///
/// Covers the full configuration surface of the token subsystem: signing
/// secret and algorithm, access token lifetime, the refresh window, and
/// optional audience/issuer scoping.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Secret key for signing tokens
    pub secret: String,

    /// Signing algorithm (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Access token lifetime in seconds
    pub access_ttl_seconds: i64,

    /// Whether issued tokens may be exchanged for fresh ones
    #[serde(default = "default_refresh_enabled")]
    pub refresh_enabled: bool,

    /// Maximum lifetime of a refresh chain in seconds, counted from the
    /// original issuance instant
    pub max_refresh_window_seconds: i64,

    /// Audience claim, checked on verification when set
    #[serde(default)]
    pub audience: Option<String>,

    /// Issuer claim, checked on verification when set
    #[serde(default)]
    pub issuer: Option<String>,

    /// Derive a per-user signing secret from the user record instead of
    /// using the process-wide secret
    #[serde(default)]
    pub per_user_secret_enabled: bool,

    /// Clock skew allowance in seconds when validating expiry
    #[serde(default)]
    pub leeway_seconds: u64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            algorithm: default_algorithm(),
            access_ttl_seconds: 900,              // 15 minutes
            refresh_enabled: default_refresh_enabled(),
            max_refresh_window_seconds: 604_800,  // 7 days
            audience: None,
            issuer: None,
            per_user_secret_enabled: false,
            leeway_seconds: 0,
        }
    }
}

impl TokenConfig {
    /// Create a new token configuration with an explicit secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token lifetime in minutes
    pub fn with_access_ttl_minutes(mut self, minutes: i64) -> Self {
        self.access_ttl_seconds = minutes * 60;
        self
    }

    /// Set the refresh window in days
    pub fn with_refresh_window_days(mut self, days: i64) -> Self {
        self.max_refresh_window_seconds = days * 86_400;
        self
    }

    /// Scope tokens to an audience
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Scope tokens to an issuer
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Enable per-user signing secrets
    pub fn with_per_user_secret(mut self) -> Self {
        self.per_user_secret_enabled = true;
        self
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-please-change-in-production"
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let secret = std::env::var("TOKEN_SECRET").unwrap_or(defaults.secret);
        let algorithm = std::env::var("TOKEN_ALGORITHM").unwrap_or(defaults.algorithm);
        let access_ttl_seconds = std::env::var("TOKEN_ACCESS_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.access_ttl_seconds);
        let refresh_enabled = std::env::var("TOKEN_REFRESH_ENABLED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.refresh_enabled);
        let max_refresh_window_seconds = std::env::var("TOKEN_MAX_REFRESH_WINDOW_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_refresh_window_seconds);
        let per_user_secret_enabled = std::env::var("TOKEN_PER_USER_SECRET")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.per_user_secret_enabled);
        let leeway_seconds = std::env::var("TOKEN_LEEWAY_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.leeway_seconds);

        Self {
            secret,
            algorithm,
            access_ttl_seconds,
            refresh_enabled,
            max_refresh_window_seconds,
            audience: std::env::var("TOKEN_AUDIENCE").ok(),
            issuer: std::env::var("TOKEN_ISSUER").ok(),
            per_user_secret_enabled,
            leeway_seconds,
        }
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}

fn default_refresh_enabled() -> bool {
    true
}
