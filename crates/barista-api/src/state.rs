// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! Application state shared across handlers.

use std::sync::Arc;

use barista_core::DrinkStore;

use crate::auth::TokenVerifier;
use crate::config::ApiConfig;

// =============================================================================
// AppState
// =============================================================================

/// Application state shared across all handlers.
///
/// Passed to handlers via Axum's state extraction mechanism.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: Arc<ApiConfig>,
    /// Token verifier backing the authorization middleware.
    pub verifier: Arc<TokenVerifier>,
    /// Drink storage.
    pub store: DrinkStore,
}

impl AppState {
    /// Creates a new app state builder.
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::new()
    }

    /// Returns the token verifier.
    pub fn verifier(&self) -> &Arc<TokenVerifier> {
        &self.verifier
    }

    /// Returns the drink store.
    pub fn store(&self) -> &DrinkStore {
        &self.store
    }
}

// =============================================================================
// AppStateBuilder
// =============================================================================

/// Builder for constructing AppState.
pub struct AppStateBuilder {
    config: Option<ApiConfig>,
    verifier: Option<Arc<TokenVerifier>>,
    store: Option<DrinkStore>,
}

impl AppStateBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            config: None,
            verifier: None,
            store: None,
        }
    }

    /// Sets the configuration.
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the token verifier.
    pub fn verifier(mut self, verifier: Arc<TokenVerifier>) -> Self {
        self.verifier = Some(verifier);
        self
    }

    /// Sets the drink store.
    pub fn store(mut self, store: DrinkStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds the AppState.
    ///
    /// A missing verifier is built from the configuration; a missing store
    /// is an error since opening a database is async and belongs to the
    /// caller.
    pub fn build(self) -> crate::error::ApiResult<AppState> {
        let config = self.config.unwrap_or_default();

        let verifier = match self.verifier {
            Some(verifier) => verifier,
            None => Arc::new(TokenVerifier::from_config(&config.auth)?),
        };

        let store = self
            .store
            .ok_or_else(|| crate::error::ApiError::internal("drink store is not set"))?;

        Ok(AppState {
            config: Arc::new(config),
            verifier,
            store,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// FromRef implementations for extracting parts of state
// =============================================================================

impl axum::extract::FromRef<AppState> for Arc<TokenVerifier> {
    fn from_ref(state: &AppState) -> Self {
        state.verifier.clone()
    }
}

impl axum::extract::FromRef<AppState> for DrinkStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl axum::extract::FromRef<AppState> for Arc<ApiConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthConfig;

    #[tokio::test]
    async fn test_app_state_builder() {
        let config = ApiConfig::default().with_auth(
            AuthConfig::default().with_dev_secret("test-secret-key-that-is-long-enough"),
        );
        let store = DrinkStore::in_memory().await.unwrap();

        let state = AppState::builder().config(config).store(store).build().unwrap();
        assert_eq!(state.config.port, 8080);
    }

    #[tokio::test]
    async fn test_app_state_requires_store() {
        let result = AppState::builder().config(ApiConfig::default()).build();
        assert!(result.is_err());
    }
}
