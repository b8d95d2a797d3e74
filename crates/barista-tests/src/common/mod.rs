// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! # Common Test Utilities
//!
//! Shared test utilities, fixtures, and the router harness for integration
//! tests.
//!
//! ## Module Structure
//!
//! - `fixtures`: Pre-built tokens and drink payloads
//! - `harness`: In-process router harness for end-to-end requests

pub mod fixtures;
pub mod harness;

// Re-exports for convenience
pub use fixtures::*;
pub use harness::*;

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize test logging. Call this at the start of each test module.
pub fn init_test_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("warn,barista=debug")),
            )
            .with_test_writer()
            .init();
    });
}
