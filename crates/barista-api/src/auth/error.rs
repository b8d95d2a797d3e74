// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! Authorization failure types.

use axum::http::StatusCode;
use thiserror::Error;

use super::Permission;

/// A typed authorization failure.
///
/// Each variant carries its own HTTP status: header and token problems are
/// 401, a token without a permissions claim is 400, and a token lacking the
/// required permission is 403.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The Authorization header is absent or not `Bearer <token>`.
    #[error("authorization header is missing or malformed")]
    MissingOrMalformedHeader,

    /// The token could not be parsed as a JWT.
    #[error("token is malformed")]
    MalformedToken,

    /// The token names a signing key the issuer does not publish.
    #[error("unknown signing key '{kid}'")]
    UnknownSigningKey {
        /// Key id named by the token header.
        kid: String,
    },

    /// The issuer's key set could not be fetched or parsed.
    #[error("unable to obtain signing keys: {message}")]
    KeyFetch {
        /// What went wrong.
        message: String,
    },

    /// The signature does not verify against the issuer key.
    #[error("token signature is invalid")]
    InvalidSignature,

    /// The token is past its expiry.
    #[error("token has expired")]
    ExpiredToken,

    /// Issuer, audience, or another registered claim failed validation.
    #[error("invalid token claims: {message}")]
    InvalidClaims {
        /// What failed validation.
        message: String,
    },

    /// The token has no permissions claim at all.
    #[error("permissions claim missing from token")]
    PermissionsClaimMissing,

    /// The token's permissions do not include the required one.
    #[error("permission '{permission}' not granted")]
    PermissionNotFound {
        /// The permission the route requires.
        permission: Permission,
    },
}

impl AuthError {
    /// Creates an invalid-claims error.
    pub fn invalid_claims(message: impl Into<String>) -> Self {
        Self::InvalidClaims {
            message: message.into(),
        }
    }

    /// Creates a key-fetch error.
    pub fn key_fetch(message: impl Into<String>) -> Self {
        Self::KeyFetch {
            message: message.into(),
        }
    }

    /// Returns the HTTP status code for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::PermissionsClaimMissing => StatusCode::BAD_REQUEST,
            AuthError::PermissionNotFound { .. } => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::MissingOrMalformedHeader.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::ExpiredToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::PermissionsClaimMissing.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::PermissionNotFound {
                permission: Permission::PostDrinks
            }
            .status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_display() {
        let err = AuthError::UnknownSigningKey {
            kid: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "unknown signing key 'abc'");
    }
}
