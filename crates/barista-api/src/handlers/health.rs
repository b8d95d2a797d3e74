// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! Health check handler.

use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status, `"ok"` when serving.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Number of drinks on the menu, when the store is reachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drinks: Option<i64>,
}

/// GET /health
///
/// Liveness check. Reports the menu size as a cheap store probe; a store
/// failure does not fail the check.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let drinks = state.store.count().await.ok();

    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        drinks,
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use barista_core::DrinkStore;

    use super::*;
    use crate::auth::AuthConfig;
    use crate::config::ApiConfig;

    #[tokio::test]
    async fn test_health_endpoint() {
        let config = ApiConfig::default().with_auth(
            AuthConfig::default().with_dev_secret("test-secret-key-that-is-long-enough"),
        );
        let store = DrinkStore::in_memory().await.unwrap();
        let state = AppState::builder().config(config).store(store).build().unwrap();

        let response = health(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
