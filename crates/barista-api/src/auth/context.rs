// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! Authenticated request context.

use uuid::Uuid;

use super::{Claims, Permission};

/// Identity attached to a request after its token has been verified.
///
/// Stored in request extensions by the authorization middleware and read
/// back by handlers through the [`Auth`](crate::extractors::Auth) extractor.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Subject claim of the verified token.
    pub sub: String,
    /// Permissions granted to the subject.
    pub permissions: Vec<String>,
    /// Correlation id for this request.
    pub request_id: Uuid,
}

impl AuthContext {
    /// Builds a context from verified claims.
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            sub: claims.sub.clone(),
            permissions: claims.permissions.clone().unwrap_or_default(),
            request_id: Uuid::now_v7(),
        }
    }

    /// Returns `true` if the subject holds the given permission.
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.iter().any(|p| p == permission.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_claims() {
        let claims = Claims::new("auth0|barista", 3600)
            .with_permissions(vec!["post:drinks".to_string()]);
        let context = AuthContext::from_claims(&claims);

        assert_eq!(context.sub, "auth0|barista");
        assert!(context.has_permission(Permission::PostDrinks));
        assert!(!context.has_permission(Permission::DeleteDrinks));
    }

    #[test]
    fn test_from_claims_without_permissions() {
        let context = AuthContext::from_claims(&Claims::new("auth0|barista", 3600));
        assert!(context.permissions.is_empty());
    }
}
