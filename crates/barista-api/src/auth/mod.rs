// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! Authentication and authorization module.
//!
//! This module provides:
//! - Bearer-token extraction and JWT validation against issuer keys
//! - Scoped-permission definitions and enforcement
//! - The per-request authentication context

mod claims;
mod context;
mod error;
pub mod keys;
pub mod permission;
mod verifier;

pub use claims::Claims;
pub use context::AuthContext;
pub use error::AuthError;
pub use keys::{JwksKeyProvider, KeyProvider, StaticKeyProvider, VerificationKey};
pub use permission::{check_permission, Permission};
pub use verifier::{AuthConfig, TokenVerifier};
