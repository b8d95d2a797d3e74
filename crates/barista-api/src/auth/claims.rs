// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! JWT claims structure.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Claims carried by a bearer token.
///
/// Registered claims (RFC 7519) plus the issuer's `permissions` claim. The
/// verifier validates `exp`/`iss`/`aud` during decode; the enforcer reads
/// `permissions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the caller's identity at the issuer.
    pub sub: String,

    /// Expiration time (Unix timestamp).
    pub exp: i64,

    /// Issued at time (Unix timestamp).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Issuer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// Audience. May be a single string or an array of strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<serde_json::Value>,

    /// Scope strings granted to the caller. Absence of the claim itself is
    /// meaningful (400 at enforcement), so this is not defaulted to empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl Claims {
    /// Creates new claims for a subject, expiring after the given seconds.
    pub fn new(sub: impl Into<String>, expires_in_secs: i64) -> Self {
        let now = Utc::now().timestamp();

        Self {
            sub: sub.into(),
            exp: now + expires_in_secs,
            iat: Some(now),
            iss: None,
            aud: None,
            permissions: None,
        }
    }

    /// Sets the issuer.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.iss = Some(issuer.into());
        self
    }

    /// Sets the audience.
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.aud = Some(serde_json::Value::String(audience.into()));
        self
    }

    /// Sets the permissions claim.
    pub fn with_permissions(mut self, permissions: Vec<String>) -> Self {
        self.permissions = Some(permissions);
        self
    }

    /// Returns `true` if the permissions claim contains the given scope.
    pub fn has_permission(&self, scope: &str) -> bool {
        self.permissions
            .as_ref()
            .is_some_and(|granted| granted.iter().any(|p| p == scope))
    }

    /// Returns `true` if the token is past its expiry.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_creation() {
        let claims = Claims::new("auth0|barista", 3600)
            .with_issuer("https://issuer.test/")
            .with_permissions(vec!["post:drinks".to_string()]);

        assert_eq!(claims.sub, "auth0|barista");
        assert!(claims.has_permission("post:drinks"));
        assert!(!claims.has_permission("delete:drinks"));
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_missing_permissions_claim() {
        let claims = Claims::new("user", 3600);
        assert!(claims.permissions.is_none());
        assert!(!claims.has_permission("post:drinks"));
    }

    #[test]
    fn test_expired() {
        let claims = Claims::new("user", -100);
        assert!(claims.is_expired());
    }

    #[test]
    fn test_audience_accepts_string_or_array() {
        let single: Claims =
            serde_json::from_value(serde_json::json!({"sub": "u", "exp": 0, "aud": "drinks"}))
                .unwrap();
        assert!(single.aud.is_some());

        let many: Claims = serde_json::from_value(
            serde_json::json!({"sub": "u", "exp": 0, "aud": ["drinks", "menu"]}),
        )
        .unwrap();
        assert!(many.aud.unwrap().is_array());
    }
}
