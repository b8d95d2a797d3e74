// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! Response envelopes.
//!
//! Every successful body carries `success: true`; error bodies are built by
//! [`ApiError`](crate::error::ApiError) and carry `success: false` with the
//! numeric status under `error`.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// Success Envelopes
// =============================================================================

/// Body for drink listing endpoints.
///
/// Generic over the drink representation so the public listing can return
/// summaries while the detail listing returns full drinks.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrinkListBody<T> {
    /// Always `true` for success responses.
    pub success: bool,
    /// Echoed HTTP status code.
    pub status_code: u16,
    /// The drinks.
    pub drinks: Vec<T>,
}

impl<T> DrinkListBody<T> {
    /// Creates a successful listing body.
    pub fn ok(drinks: Vec<T>) -> Self {
        Self {
            success: true,
            status_code: 200,
            drinks,
        }
    }
}

impl<T: Serialize> IntoResponse for DrinkListBody<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Body for create and update endpoints.
///
/// Carries the affected drink as a one-element array.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrinkBody<T> {
    /// Always `true` for success responses.
    pub success: bool,
    /// The affected drink, as a one-element array.
    pub drinks: Vec<T>,
}

impl<T> DrinkBody<T> {
    /// Creates a body wrapping a single drink.
    pub fn one(drink: T) -> Self {
        Self {
            success: true,
            drinks: vec![drink],
        }
    }
}

impl<T: Serialize> IntoResponse for DrinkBody<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Body for the delete endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteBody {
    /// Always `true` for success responses.
    pub success: bool,
    /// Id of the deleted drink.
    pub delete: i64,
}

impl DeleteBody {
    /// Creates a body recording the deleted id.
    pub fn deleted(id: i64) -> Self {
        Self {
            success: true,
            delete: id,
        }
    }
}

impl IntoResponse for DeleteBody {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

// =============================================================================
// Error Envelope
// =============================================================================

/// Body for error responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `false` for error responses.
    pub success: bool,
    /// Numeric HTTP status code.
    pub error: u16,
    /// Human-readable error message.
    pub message: String,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_body_shape() {
        let body = DrinkListBody::ok(vec!["matcha"]);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["status_code"], 200);
        assert_eq!(json["drinks"], serde_json::json!(["matcha"]));
    }

    #[test]
    fn test_drink_body_wraps_single_element() {
        let body = DrinkBody::one("flat white");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["drinks"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_body_shape() {
        let json = serde_json::to_value(DeleteBody::deleted(42)).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["delete"], 42);
    }
}
