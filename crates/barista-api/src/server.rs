// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! API server implementation.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    handler::Handler,
    http::{header, Method},
    routing::{delete, get, patch, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use crate::auth::Permission;
use crate::config::ApiConfig;
use crate::error::ApiResult;
use crate::handlers;
use crate::middleware::ScopeLayer;
use crate::state::AppState;

// =============================================================================
// ApiServer
// =============================================================================

/// The API server.
///
/// Main entry point for creating and running the HTTP server.
pub struct ApiServer {
    state: AppState,
    config: Arc<ApiConfig>,
}

impl ApiServer {
    /// Creates a new API server with the given state.
    pub fn new(state: AppState) -> Self {
        let config = state.config.clone();
        Self { state, config }
    }

    /// Creates the router with all routes and middleware.
    ///
    /// Every protected route carries its own [`ScopeLayer`] naming the
    /// permission it requires; `GET /drinks` and `/health` stay public.
    pub fn router(&self) -> Router {
        let guard = |required: Permission| ScopeLayer::require(self.state.verifier.clone(), required);

        let middleware_stack = ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(self.config.request_timeout))
            .layer(create_cors_layer(&self.config));

        Router::new()
            .route("/health", get(handlers::health))
            .route("/drinks", get(handlers::list_drinks))
            .route(
                "/drinks-detail",
                get(handlers::list_drinks_detail.layer(guard(Permission::GetDrinksDetail))),
            )
            .route(
                "/drinks",
                post(handlers::create_drink.layer(guard(Permission::PostDrinks))),
            )
            .route(
                "/drinks/{drink_id}",
                patch(handlers::update_drink.layer(guard(Permission::PatchDrinks))),
            )
            .route(
                "/drinks/{drink_id}",
                delete(handlers::delete_drink.layer(guard(Permission::DeleteDrinks))),
            )
            .layer(middleware_stack)
            .with_state(self.state.clone())
    }

    /// Runs the server.
    pub async fn run(self) -> ApiResult<()> {
        let addr = self.config.socket_addr();
        let router = self.router();

        info!("starting API server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| crate::error::ApiError::internal(format!("failed to bind: {}", e)))?;

        axum::serve(listener, router)
            .await
            .map_err(|e| crate::error::ApiError::internal(format!("server error: {}", e)))?;

        Ok(())
    }

    /// Runs the server with graceful shutdown.
    pub async fn run_with_shutdown(
        self,
        shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> ApiResult<()> {
        let addr = self.config.socket_addr();
        let router = self.router();

        info!("starting API server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| crate::error::ApiError::internal(format!("failed to bind: {}", e)))?;

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| crate::error::ApiError::internal(format!("server error: {}", e)))?;

        info!("API server shutdown complete");

        Ok(())
    }

    /// Returns the server address.
    pub fn addr(&self) -> SocketAddr {
        self.config.socket_addr()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Creates the CORS layer from configuration.
fn create_cors_layer(config: &ApiConfig) -> CorsLayer {
    let cors = &config.cors;

    let mut layer = CorsLayer::new().max_age(Duration::from_secs(cors.max_age));

    if cors.allowed_origins.contains(&"*".to_string()) {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<_> = cors
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    let methods: Vec<Method> = cors
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    layer = layer.allow_methods(methods);

    if cors.allowed_headers.contains(&"*".to_string()) {
        layer = layer.allow_headers(Any);
    } else {
        layer = layer.allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]);
    }

    layer
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use barista_core::DrinkStore;

    use super::*;
    use crate::auth::AuthConfig;

    fn test_config() -> ApiConfig {
        ApiConfig::default().with_auth(
            AuthConfig::default().with_dev_secret("test-secret-key-that-is-long-enough"),
        )
    }

    #[tokio::test]
    async fn test_router_creation() {
        let state = AppState::builder()
            .config(test_config())
            .store(DrinkStore::in_memory().await.unwrap())
            .build()
            .unwrap();

        let server = ApiServer::new(state);
        assert_eq!(server.addr().port(), 8080);
        let _router = server.router();
    }

    #[test]
    fn test_cors_layer() {
        let _layer = create_cors_layer(&test_config());
    }
}
