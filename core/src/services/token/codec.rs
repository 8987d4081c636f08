//! Signing and verification of token strings.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Encodes claim sets into signed token strings and back
pub struct TokenCodec {
    algorithm: Algorithm,
    audience: Option<String>,
    issuer: Option<String>,
    leeway: u64,
}

impl TokenCodec {
    /// Creates a codec from the service configuration
    pub fn new(config: &TokenServiceConfig) -> Self {
        Self {
            algorithm: config.algorithm,
            audience: config.audience.clone(),
            issuer: config.issuer.clone(),
            leeway: config.leeway_seconds,
        }
    }

    /// Signs a claim set into a token string
    pub fn encode(&self, claims: &Claims, secret: &str) -> Result<String, DomainError> {
        let header = Header::new(self.algorithm);
        encode(&header, claims, &EncodingKey::from_secret(secret.as_bytes()))
            .map_err(|_| TokenError::EncodingFailed.into())
    }

    /// Parses the payload without any signature check.
    ///
    /// Used solely to read the claimed subject before the verification
    /// key can be resolved. Nothing returned here may be trusted.
    pub fn decode_unverified(&self, token: &str) -> Result<Claims, DomainError> {
        let mut parts = token.split('.');
        let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(_), Some(payload), Some(_), None) => payload,
            _ => return Err(TokenError::Malformed.into()),
        };

        let payload_bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| TokenError::Malformed)?;
        let claims = serde_json::from_slice(&payload_bytes).map_err(|_| TokenError::Malformed)?;
        Ok(claims)
    }

    /// Verifies the signature and, per configuration, expiry, audience,
    /// and issuer. The algorithm is pinned to the configured one.
    pub fn decode_and_verify(&self, token: &str, secret: &str) -> Result<Claims, DomainError> {
        let key = DecodingKey::from_secret(secret.as_bytes());
        let data = decode::<Claims>(token, &key, &self.validation())
            .map_err(|e| DomainError::Token(rejection_for(e.kind())))?;
        Ok(data.claims)
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = self.leeway;
        validation.validate_exp = true;
        match &self.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }
        if let Some(issuer) = &self.issuer {
            validation.set_issuer(&[issuer]);
        }
        validation
    }
}

/// Maps decode failures onto the rejection taxonomy. Callers rely on
/// expiry being distinguishable from tampering.
fn rejection_for(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm | ErrorKind::Crypto(_) => {
            TokenError::SignatureInvalid
        }
        ErrorKind::InvalidAudience => TokenError::AudienceMismatch,
        ErrorKind::InvalidIssuer => TokenError::IssuerMismatch,
        ErrorKind::MissingRequiredClaim(claim) => match claim.as_str() {
            "aud" => TokenError::AudienceMismatch,
            "iss" => TokenError::IssuerMismatch,
            _ => TokenError::Malformed,
        },
        _ => TokenError::Malformed,
    }
}
