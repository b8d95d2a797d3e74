// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! Permission definitions and enforcement.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AuthError, Claims};

/// Permissions for accessing drinks endpoints.
///
/// Each protected route requires exactly one permission; tokens carry the
/// granted set in their `permissions` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Read the detailed (long-view) drinks list.
    GetDrinksDetail,
    /// Create a drink.
    PostDrinks,
    /// Update a drink.
    PatchDrinks,
    /// Delete a drink.
    DeleteDrinks,
}

impl Permission {
    /// Returns the permission scope string as carried in tokens.
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::GetDrinksDetail => "get:drinks-detail",
            Permission::PostDrinks => "post:drinks",
            Permission::PatchDrinks => "patch:drinks",
            Permission::DeleteDrinks => "delete:drinks",
        }
    }

    /// Parses a permission from its scope string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "get:drinks-detail" => Some(Permission::GetDrinksDetail),
            "post:drinks" => Some(Permission::PostDrinks),
            "patch:drinks" => Some(Permission::PatchDrinks),
            "delete:drinks" => Some(Permission::DeleteDrinks),
            _ => None,
        }
    }

    /// Returns all defined permissions.
    pub fn all() -> &'static [Permission] {
        &[
            Permission::GetDrinksDetail,
            Permission::PostDrinks,
            Permission::PatchDrinks,
            Permission::DeleteDrinks,
        ]
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Enforcement
// =============================================================================

/// Checks that validated claims grant the required permission.
///
/// A token without a permissions claim fails with
/// [`AuthError::PermissionsClaimMissing`] (400); a token whose claim lacks the
/// required scope fails with [`AuthError::PermissionNotFound`] (403). A pure
/// set-membership test; no state.
pub fn check_permission(claims: &Claims, required: Permission) -> Result<(), AuthError> {
    let granted = claims
        .permissions
        .as_ref()
        .ok_or(AuthError::PermissionsClaimMissing)?;

    if granted.iter().any(|p| p == required.as_str()) {
        Ok(())
    } else {
        Err(AuthError::PermissionNotFound {
            permission: required,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_as_str() {
        assert_eq!(Permission::GetDrinksDetail.as_str(), "get:drinks-detail");
        assert_eq!(Permission::DeleteDrinks.as_str(), "delete:drinks");
    }

    #[test]
    fn test_permission_parse() {
        assert_eq!(Permission::parse("post:drinks"), Some(Permission::PostDrinks));
        assert_eq!(Permission::parse("post:pizzas"), None);
    }

    #[test]
    fn test_parse_round_trip() {
        for permission in Permission::all() {
            assert_eq!(Permission::parse(permission.as_str()), Some(*permission));
        }
    }

    #[test]
    fn test_check_permission_granted() {
        let claims =
            Claims::new("user", 3600).with_permissions(vec!["post:drinks".to_string()]);
        assert!(check_permission(&claims, Permission::PostDrinks).is_ok());
    }

    #[test]
    fn test_check_permission_denied() {
        let claims =
            Claims::new("user", 3600).with_permissions(vec!["get:drinks-detail".to_string()]);
        let err = check_permission(&claims, Permission::DeleteDrinks).unwrap_err();
        assert!(matches!(err, AuthError::PermissionNotFound { .. }));
    }

    #[test]
    fn test_check_permission_claim_missing() {
        let claims = Claims::new("user", 3600);
        let err = check_permission(&claims, Permission::PostDrinks).unwrap_err();
        assert!(matches!(err, AuthError::PermissionsClaimMissing));
    }
}
