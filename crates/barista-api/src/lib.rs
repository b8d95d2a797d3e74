// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! # barista-api
//!
//! HTTP API server for the Barista drinks menu service.
//!
//! This crate provides the axum router with bearer-token verification,
//! scoped-permission enforcement, and the drinks CRUD handlers.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod server;
pub mod state;

pub use auth::{AuthConfig, AuthContext, AuthError, Claims, Permission, TokenVerifier};
pub use config::{ApiConfig, CorsConfig};
pub use error::{ApiError, ApiResult};
pub use response::{DeleteBody, DrinkBody, DrinkListBody, ErrorBody};
pub use server::ApiServer;
pub use state::AppState;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
