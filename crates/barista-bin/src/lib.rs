// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! # barista-bin
//!
//! CLI binary for the Barista drinks menu service.
//!
//! This crate provides the main binary entry point, including:
//!
//! - CLI argument parsing with clap
//! - Graceful shutdown handling
//! - Logging initialization
//! - Command implementations (run, validate, gen-token, version)
//!
//! ## Usage
//!
//! ```bash
//! # Start the server (default command)
//! barista
//!
//! # Start with custom config
//! barista -c /etc/barista/config.yaml
//!
//! # Validate configuration
//! barista validate
//!
//! # Mint a development token
//! barista gen-token --permission post:drinks --permission patch:drinks
//!
//! # Show version
//! barista version
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// =============================================================================
// Modules
// =============================================================================

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod shutdown;

// =============================================================================
// Re-exports
// =============================================================================

pub use cli::{Cli, Commands};
pub use error::{BinError, BinResult};
pub use logging::init_logging;
pub use shutdown::{ShutdownCoordinator, ShutdownSignal};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
