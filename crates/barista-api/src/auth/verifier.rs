// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! Bearer token verification.

use std::sync::Arc;

use jsonwebtoken::{decode, decode_header, errors::ErrorKind, Validation};
use serde::{Deserialize, Serialize};

use super::{AuthError, Claims, JwksKeyProvider, KeyProvider, StaticKeyProvider};
use crate::error::{ApiError, ApiResult};

// =============================================================================
// AuthConfig
// =============================================================================

/// Token verification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Expected token issuer.
    pub issuer: Option<String>,
    /// Expected token audience.
    pub audience: Option<String>,
    /// JWKS endpoint for signing keys (production mode).
    pub jwks_url: Option<String>,
    /// Shared HS256 secret (development mode, used when no JWKS URL is set).
    #[serde(skip_serializing)]
    pub dev_secret: Option<String>,
    /// Key id the development secret is registered under.
    pub dev_kid: String,
    /// Clock skew tolerance in seconds.
    pub leeway_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            issuer: None,
            audience: None,
            jwks_url: None,
            dev_secret: None,
            dev_kid: "dev".to_string(),
            leeway_secs: 60,
        }
    }
}

impl AuthConfig {
    /// Sets the expected issuer.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Sets the expected audience.
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Sets the JWKS endpoint.
    pub fn with_jwks_url(mut self, url: impl Into<String>) -> Self {
        self.jwks_url = Some(url.into());
        self
    }

    /// Sets the development secret.
    pub fn with_dev_secret(mut self, secret: impl Into<String>) -> Self {
        self.dev_secret = Some(secret.into());
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ApiResult<()> {
        if self.jwks_url.is_none() && self.dev_secret.is_none() {
            return Err(ApiError::internal(
                "auth requires either a JWKS URL or a development secret",
            ));
        }
        if let Some(ref secret) = self.dev_secret {
            if secret.len() < 32 {
                tracing::warn!("development secret is shorter than recommended (32 bytes)");
            }
        }
        Ok(())
    }
}

// =============================================================================
// TokenVerifier
// =============================================================================

/// Verifies bearer tokens and yields their claims.
///
/// Key material comes from the configured [`KeyProvider`]; the token's `kid`
/// header selects the key, and the key's algorithm drives validation.
#[derive(Clone)]
pub struct TokenVerifier {
    provider: Arc<dyn KeyProvider>,
    issuer: Option<String>,
    audience: Option<String>,
    leeway_secs: u64,
}

impl TokenVerifier {
    /// Creates a verifier over the given key provider.
    pub fn new(provider: Arc<dyn KeyProvider>) -> Self {
        Self {
            provider,
            issuer: None,
            audience: None,
            leeway_secs: 60,
        }
    }

    /// Builds a verifier from configuration.
    ///
    /// A JWKS URL selects the fetching provider; otherwise the development
    /// secret backs a static HS256 provider.
    pub fn from_config(config: &AuthConfig) -> ApiResult<Self> {
        config.validate()?;

        let provider: Arc<dyn KeyProvider> = match (&config.jwks_url, &config.dev_secret) {
            (Some(url), _) => Arc::new(JwksKeyProvider::new(url.clone())),
            (None, Some(secret)) => {
                Arc::new(StaticKeyProvider::from_secret(config.dev_kid.clone(), secret))
            }
            (None, None) => unreachable!("validate() rejects this"),
        };

        let mut verifier = Self::new(provider);
        verifier.issuer = config.issuer.clone();
        verifier.audience = config.audience.clone();
        verifier.leeway_secs = config.leeway_secs;
        Ok(verifier)
    }

    /// Sets the expected issuer.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Sets the expected audience.
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Sets the clock skew tolerance.
    pub fn with_leeway(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = leeway_secs;
        self
    }

    /// Verifies a token and returns its claims.
    pub async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::MalformedToken)?;
        let kid = header.kid.ok_or(AuthError::MalformedToken)?;

        let key = self.provider.signing_key(&kid).await?;

        let mut validation = Validation::new(key.algorithm);
        validation.leeway = self.leeway_secs;
        if let Some(ref issuer) = self.issuer {
            validation.set_issuer(&[issuer]);
        }
        match self.audience {
            Some(ref audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        let data = decode::<Claims>(token, &key.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Json(_) => {
                    AuthError::MalformedToken
                }
                ErrorKind::InvalidIssuer => AuthError::invalid_claims("issuer mismatch"),
                ErrorKind::InvalidAudience => AuthError::invalid_claims("audience mismatch"),
                ErrorKind::MissingRequiredClaim(claim) => {
                    AuthError::invalid_claims(format!("missing claim: {}", claim))
                }
                _ => AuthError::invalid_claims(e.to_string()),
            })?;

        Ok(data.claims)
    }
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("leeway_secs", &self.leeway_secs)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

    use super::*;

    const SECRET: &str = "test-secret-key-that-is-long-enough-for-testing";

    fn test_verifier() -> TokenVerifier {
        TokenVerifier::new(Arc::new(StaticKeyProvider::from_secret("test-key", SECRET)))
    }

    fn mint(claims: &Claims, kid: &str, secret: &str) -> String {
        let mut header = Header::new(Algorithm::HS256);
        header.kid = Some(kid.to_string());
        encode(&header, claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
    }

    #[tokio::test]
    async fn test_verify_valid_token() {
        let verifier = test_verifier();
        let claims = Claims::new("user-1", 3600)
            .with_permissions(vec!["get:drinks-detail".to_string()]);
        let token = mint(&claims, "test-key", SECRET);

        let verified = verifier.verify(&token).await.unwrap();
        assert_eq!(verified.sub, "user-1");
        assert!(verified.has_permission("get:drinks-detail"));
    }

    #[tokio::test]
    async fn test_verify_expired_token() {
        let verifier = test_verifier().with_leeway(0);
        let token = mint(&Claims::new("user-1", -3600), "test-key", SECRET);

        let err = verifier.verify(&token).await.unwrap_err();
        assert!(matches!(err, AuthError::ExpiredToken));
    }

    #[tokio::test]
    async fn test_verify_wrong_secret() {
        let verifier = test_verifier();
        let token = mint(
            &Claims::new("user-1", 3600),
            "test-key",
            "a-completely-different-secret-value!",
        );

        let err = verifier.verify(&token).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidSignature));
    }

    #[tokio::test]
    async fn test_verify_unknown_kid() {
        let verifier = test_verifier();
        let token = mint(&Claims::new("user-1", 3600), "other-key", SECRET);

        let err = verifier.verify(&token).await.unwrap_err();
        assert!(matches!(err, AuthError::UnknownSigningKey { .. }));
    }

    #[tokio::test]
    async fn test_verify_missing_kid() {
        let verifier = test_verifier();
        let header = Header::new(Algorithm::HS256);
        let token = encode(
            &header,
            &Claims::new("user-1", 3600),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let err = verifier.verify(&token).await.unwrap_err();
        assert!(matches!(err, AuthError::MalformedToken));
    }

    #[tokio::test]
    async fn test_verify_garbage_token() {
        let verifier = test_verifier();

        let err = verifier.verify("not.a.token").await.unwrap_err();
        assert!(matches!(err, AuthError::MalformedToken));
    }

    #[tokio::test]
    async fn test_verify_issuer_mismatch() {
        let verifier = test_verifier().with_issuer("https://auth.example.com/");
        let claims = Claims::new("user-1", 3600).with_issuer("https://other.example.com/");
        let token = mint(&claims, "test-key", SECRET);

        let err = verifier.verify(&token).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidClaims { .. }));
    }

    #[test]
    fn test_from_config_requires_key_source() {
        assert!(TokenVerifier::from_config(&AuthConfig::default()).is_err());

        let config = AuthConfig::default().with_dev_secret(SECRET);
        assert!(TokenVerifier::from_config(&config).is_ok());
    }
}
