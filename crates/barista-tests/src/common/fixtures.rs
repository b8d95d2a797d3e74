// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! # Test Fixtures
//!
//! Pre-built tokens and drink payloads for consistent and reproducible
//! testing. Tokens are signed with the shared development secret so the
//! harness verifier accepts them.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use barista_api::Claims;
use barista_core::{Ingredient, NewDrink};

/// HS256 secret the harness verifier is configured with.
pub const TEST_SECRET: &str = "barista-test-secret-key-that-is-long-enough";

/// Key id the test secret is registered under.
pub const TEST_KID: &str = "dev";

// =============================================================================
// Token Fixtures
// =============================================================================

/// Fixture providing signed bearer tokens.
pub struct TokenFixtures;

impl TokenFixtures {
    /// A valid token carrying the given permissions.
    pub fn with_permissions(permissions: &[&str]) -> String {
        let claims = Claims::new("auth0|test-user", 3600)
            .with_permissions(permissions.iter().map(|p| p.to_string()).collect());
        sign(&claims, TEST_KID, TEST_SECRET)
    }

    /// A valid token carrying every drinks permission.
    pub fn manager() -> String {
        Self::with_permissions(&[
            "get:drinks-detail",
            "post:drinks",
            "patch:drinks",
            "delete:drinks",
        ])
    }

    /// A valid token carrying only the detail-listing permission.
    pub fn barista() -> String {
        Self::with_permissions(&["get:drinks-detail"])
    }

    /// A token without a permissions claim at all.
    pub fn without_permissions_claim() -> String {
        sign(&Claims::new("auth0|test-user", 3600), TEST_KID, TEST_SECRET)
    }

    /// A token that expired an hour ago.
    pub fn expired(permissions: &[&str]) -> String {
        let claims = Claims::new("auth0|test-user", -3600)
            .with_permissions(permissions.iter().map(|p| p.to_string()).collect());
        sign(&claims, TEST_KID, TEST_SECRET)
    }

    /// A token signed with the wrong secret.
    pub fn wrong_secret(permissions: &[&str]) -> String {
        let claims = Claims::new("auth0|test-user", 3600)
            .with_permissions(permissions.iter().map(|p| p.to_string()).collect());
        sign(&claims, TEST_KID, "a-completely-different-signing-secret!!")
    }

    /// A token signed under a key id the verifier does not know.
    pub fn unknown_kid(permissions: &[&str]) -> String {
        let claims = Claims::new("auth0|test-user", 3600)
            .with_permissions(permissions.iter().map(|p| p.to_string()).collect());
        sign(&claims, "rotated-away", TEST_SECRET)
    }

    /// Not a JWT at all.
    pub fn malformed() -> String {
        "not.a.token".to_string()
    }
}

fn sign(claims: &Claims, kid: &str, secret: &str) -> String {
    let mut header = Header::new(Algorithm::HS256);
    header.kid = Some(kid.to_string());
    encode(&header, claims, &EncodingKey::from_secret(secret.as_bytes()))
        .expect("token signing failed")
}

// =============================================================================
// Drink Fixtures
// =============================================================================

/// Fixture providing drink payloads.
pub struct DrinkFixtures;

impl DrinkFixtures {
    /// A single-ingredient drink.
    pub fn water() -> NewDrink {
        NewDrink::new("water", vec![Ingredient::new("water", "blue", 1)])
    }

    /// A two-ingredient drink.
    pub fn matcha_latte() -> NewDrink {
        NewDrink::new(
            "matcha latte",
            vec![
                Ingredient::new("matcha", "green", 1),
                Ingredient::new("steamed milk", "white", 3),
            ],
        )
    }

    /// A three-ingredient drink.
    pub fn mocha() -> NewDrink {
        NewDrink::new(
            "mocha",
            vec![
                Ingredient::new("espresso", "#4b2e1e", 1),
                Ingredient::new("chocolate", "#3c1414", 1),
                Ingredient::new("steamed milk", "#fdfdfd", 2),
            ],
        )
    }

    /// JSON body for creating the given drink.
    pub fn create_body(drink: &NewDrink) -> serde_json::Value {
        serde_json::json!({
            "title": drink.title,
            "recipe": drink.recipe,
        })
    }
}
