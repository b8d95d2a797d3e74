// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! # Test Harness
//!
//! In-process router harness. Requests are driven through the full axum
//! router with `tower::ServiceExt::oneshot`, so middleware, extractors,
//! and handlers are all exercised without binding a socket.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use barista_api::{ApiConfig, ApiServer, AppState, AuthConfig};
use barista_core::{DrinkStore, NewDrink};

use super::fixtures::TEST_SECRET;

// =============================================================================
// TestApp
// =============================================================================

/// A fully wired application over an in-memory store.
pub struct TestApp {
    router: Router,
    /// Direct handle to the store backing the router, for seeding and
    /// asserting on persisted state.
    pub store: DrinkStore,
}

impl TestApp {
    /// Builds an app with an empty in-memory store and the test secret.
    pub async fn new() -> Self {
        let store = DrinkStore::in_memory()
            .await
            .expect("failed to open in-memory store");

        let config = ApiConfig::default()
            .with_database_url("sqlite::memory:")
            .with_auth(AuthConfig::default().with_dev_secret(TEST_SECRET));

        let state = AppState::builder()
            .config(config)
            .store(store.clone())
            .build()
            .expect("failed to build app state");

        Self {
            router: ApiServer::new(state).router(),
            store,
        }
    }

    /// Builds an app seeded with the given drinks.
    pub async fn seeded(drinks: &[NewDrink]) -> Self {
        let app = Self::new().await;
        for drink in drinks {
            app.store
                .insert(drink.clone())
                .await
                .expect("failed to seed drink");
        }
        app
    }

    // =========================================================================
    // Request Helpers
    // =========================================================================

    /// Sends a request and returns the status and parsed JSON body.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("failed to build request"),
            None => builder.body(Body::empty()).expect("failed to build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("failed to read body")
            .to_bytes();

        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body is not JSON")
        };

        (status, json)
    }

    /// GET without credentials.
    pub async fn get(&self, path: &str) -> (StatusCode, serde_json::Value) {
        self.request(Method::GET, path, None, None).await
    }

    /// GET with a bearer token.
    pub async fn get_with_token(
        &self,
        path: &str,
        token: &str,
    ) -> (StatusCode, serde_json::Value) {
        self.request(Method::GET, path, Some(token), None).await
    }

    /// POST with a bearer token and JSON body.
    pub async fn post(
        &self,
        path: &str,
        token: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.request(Method::POST, path, Some(token), Some(body)).await
    }

    /// PATCH with a bearer token and JSON body.
    pub async fn patch(
        &self,
        path: &str,
        token: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.request(Method::PATCH, path, Some(token), Some(body)).await
    }

    /// DELETE with a bearer token.
    pub async fn delete(&self, path: &str, token: &str) -> (StatusCode, serde_json::Value) {
        self.request(Method::DELETE, path, Some(token), None).await
    }
}

// =============================================================================
// Assertions
// =============================================================================

/// Asserts a response body is the standard error envelope for a status.
pub fn assert_error_body(body: &serde_json::Value, status: StatusCode) {
    assert_eq!(body["success"], false, "expected success=false: {}", body);
    assert_eq!(
        body["error"],
        status.as_u16(),
        "expected error={}: {}",
        status.as_u16(),
        body
    );
    assert!(body["message"].is_string(), "expected message: {}", body);
}
