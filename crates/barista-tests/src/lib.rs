// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! # Barista Integration Tests
//!
//! This crate provides integration tests for the Barista drinks menu
//! service. It includes test utilities, fixtures, and a router harness.
//!
//! ## Module Structure
//!
//! - [`common`]: Shared test utilities
//!   - `fixtures`: Pre-built tokens and drink payloads
//!   - `harness`: In-process router harness for end-to-end requests
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all integration tests
//! cargo test -p barista-tests
//!
//! # Run a specific test suite
//! cargo test -p barista-tests --test integration_api
//! cargo test -p barista-tests --test integration_store
//! ```
//!
//! ## Writing New Tests
//!
//! ```rust,ignore
//! use barista_tests::prelude::*;
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let app = TestApp::new().await;
//!     let token = TokenFixtures::with_permissions(&["get:drinks-detail"]);
//!     let (status, body) = app.get_with_token("/drinks-detail", &token).await;
//!     // ... assertions
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod common;

/// Re-export commonly used items for convenience.
pub mod prelude {
    pub use crate::common::fixtures::*;
    pub use crate::common::harness::*;
    pub use crate::common::init_test_logging;
}
