// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! Verification-key lookup for token validation.
//!
//! Production deployments resolve keys from the issuer's JWKS endpoint
//! ([`JwksKeyProvider`]); development and tests use an in-memory map
//! ([`StaticKeyProvider`]).

use std::collections::HashMap;

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey};
use serde::Deserialize;

use super::AuthError;

// =============================================================================
// KeyProvider
// =============================================================================

/// A key usable for verifying token signatures.
#[derive(Clone)]
pub struct VerificationKey {
    /// Decoding key material.
    pub decoding_key: DecodingKey,
    /// Algorithm the key verifies.
    pub algorithm: Algorithm,
}

impl std::fmt::Debug for VerificationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationKey")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

/// Resolves a token's `kid` header to a verification key.
#[async_trait]
pub trait KeyProvider: Send + Sync {
    /// Returns the key published under the given key id.
    async fn signing_key(&self, kid: &str) -> Result<VerificationKey, AuthError>;
}

// =============================================================================
// JwksKeyProvider
// =============================================================================

/// Resolves keys from the issuer's JWKS endpoint.
///
/// The key set is fetched on every lookup; no caching. Acceptable at this
/// service's request volume, and it means key rotation at the issuer takes
/// effect immediately.
pub struct JwksKeyProvider {
    client: reqwest::Client,
    jwks_url: String,
}

impl JwksKeyProvider {
    /// Creates a provider fetching from the given JWKS URL.
    pub fn new(jwks_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            jwks_url: jwks_url.into(),
        }
    }

    /// Returns the JWKS URL.
    pub fn jwks_url(&self) -> &str {
        &self.jwks_url
    }

    async fn fetch(&self) -> Result<JwkSet, AuthError> {
        let response = self
            .client
            .get(&self.jwks_url)
            .send()
            .await
            .map_err(|e| AuthError::key_fetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| AuthError::key_fetch(e.to_string()))?;

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| AuthError::key_fetch(e.to_string()))
    }
}

#[async_trait]
impl KeyProvider for JwksKeyProvider {
    async fn signing_key(&self, kid: &str) -> Result<VerificationKey, AuthError> {
        let set = self.fetch().await?;
        key_from_set(&set, kid)
    }
}

impl std::fmt::Debug for JwksKeyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwksKeyProvider")
            .field("jwks_url", &self.jwks_url)
            .finish()
    }
}

// =============================================================================
// JWK set
// =============================================================================

/// A JSON Web Key set as published by the issuer.
#[derive(Debug, Deserialize)]
struct JwkSet {
    keys: Vec<Jwk>,
}

/// A single published key. Only RSA signing keys are used.
#[derive(Debug, Deserialize)]
struct Jwk {
    kty: String,
    #[serde(default)]
    kid: Option<String>,
    #[serde(default)]
    alg: Option<String>,
    #[serde(default, rename = "use")]
    use_: Option<String>,
    #[serde(default)]
    n: Option<String>,
    #[serde(default)]
    e: Option<String>,
}

fn key_from_set(set: &JwkSet, kid: &str) -> Result<VerificationKey, AuthError> {
    let jwk = set
        .keys
        .iter()
        .filter(|k| k.kty == "RSA" && k.use_.as_deref() != Some("enc"))
        .find(|k| k.kid.as_deref() == Some(kid))
        .ok_or_else(|| AuthError::UnknownSigningKey {
            kid: kid.to_string(),
        })?;

    let (n, e) = match (&jwk.n, &jwk.e) {
        (Some(n), Some(e)) => (n, e),
        _ => return Err(AuthError::key_fetch("RSA key missing modulus or exponent")),
    };

    let decoding_key = DecodingKey::from_rsa_components(n, e)
        .map_err(|e| AuthError::key_fetch(e.to_string()))?;

    let algorithm = match jwk.alg.as_deref() {
        Some("RS384") => Algorithm::RS384,
        Some("RS512") => Algorithm::RS512,
        _ => Algorithm::RS256,
    };

    Ok(VerificationKey {
        decoding_key,
        algorithm,
    })
}

// =============================================================================
// StaticKeyProvider
// =============================================================================

/// An in-memory key map for development and tests.
#[derive(Default)]
pub struct StaticKeyProvider {
    keys: HashMap<String, VerificationKey>,
}

impl StaticKeyProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider holding a single HS256 secret under the given kid.
    pub fn from_secret(kid: impl Into<String>, secret: &str) -> Self {
        let mut provider = Self::new();
        provider.insert(
            kid,
            VerificationKey {
                decoding_key: DecodingKey::from_secret(secret.as_bytes()),
                algorithm: Algorithm::HS256,
            },
        );
        provider
    }

    /// Registers a key under a kid.
    pub fn insert(&mut self, kid: impl Into<String>, key: VerificationKey) {
        self.keys.insert(kid.into(), key);
    }
}

#[async_trait]
impl KeyProvider for StaticKeyProvider {
    async fn signing_key(&self, kid: &str) -> Result<VerificationKey, AuthError> {
        self.keys
            .get(kid)
            .cloned()
            .ok_or_else(|| AuthError::UnknownSigningKey {
                kid: kid.to_string(),
            })
    }
}

impl std::fmt::Debug for StaticKeyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticKeyProvider")
            .field("kids", &self.keys.keys().collect::<Vec<_>>())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_lookup() {
        let provider = StaticKeyProvider::from_secret("dev", "a-long-enough-dev-secret");

        let key = provider.signing_key("dev").await.unwrap();
        assert_eq!(key.algorithm, Algorithm::HS256);

        let err = provider.signing_key("other").await.unwrap_err();
        assert!(matches!(err, AuthError::UnknownSigningKey { .. }));
    }

    #[test]
    fn test_key_from_set_unknown_kid() {
        let set: JwkSet = serde_json::from_value(serde_json::json!({
            "keys": [{
                "kty": "RSA",
                "kid": "key-1",
                "alg": "RS256",
                "use": "sig",
                "n": "sXchDaQebHnPiGvyDOAT4saGEUetSyo9MKLOoWFsueri23bOdgWp4Dy1Wl\
UzewbgBHod5pcM9H95GQRV3JDXboIRROSBigeC5yjU1hGzHHyXss8UDprecbAYxknTcQkhslANGRUZ\
mdTOQ5qTRsLAt6BTYuyvVRdhS8exSZEy_c4gs_7svlJJQ4H9_NxsiIoLwAEk7-Q3UXERGYw_75IDrG\
A84-lA_-Ct4eTlXHBIY2EaV7t7LjJaynVJCpkv4LKjTTAumiGUIuQhrNhZLuF_RJLqHpM2kgWFLU7-\
VTdL1VbC2tejvcI2BlMkEpk1BzBZI0KQB0GaDWFLN-aEAw3vRw",
                "e": "AQAB"
            }]
        }))
        .unwrap();

        assert!(key_from_set(&set, "key-1").is_ok());

        let err = key_from_set(&set, "key-2").unwrap_err();
        assert!(matches!(err, AuthError::UnknownSigningKey { .. }));
    }

    #[test]
    fn test_key_from_set_skips_non_rsa() {
        let set: JwkSet = serde_json::from_value(serde_json::json!({
            "keys": [{"kty": "EC", "kid": "ec-1", "crv": "P-256"}]
        }))
        .unwrap();

        let err = key_from_set(&set, "ec-1").unwrap_err();
        assert!(matches!(err, AuthError::UnknownSigningKey { .. }));
    }
}
