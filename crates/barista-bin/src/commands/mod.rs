// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! CLI command implementations.
//!
//! This module contains the implementation of all CLI commands:
//!
//! - `run`: Start the API server
//! - `validate`: Validate configuration file
//! - `gen-token`: Mint a development bearer token
//! - `version`: Show version information

mod gen_token;
mod run;
mod validate;
mod version;

pub use gen_token::gen_token;
pub use run::run;
pub use validate::validate;
pub use version::version;

use std::path::Path;

use barista_api::ApiConfig;

use crate::cli::{Cli, Commands};
use crate::error::{BinError, BinResult};

/// Executes the appropriate command based on CLI arguments.
pub async fn execute(cli: Cli) -> BinResult<()> {
    match cli.effective_command() {
        Commands::Run(args) => run::run(&cli, args).await,
        Commands::Validate(args) => validate::validate(&cli, args),
        Commands::GenToken(args) => gen_token::gen_token(&cli, args),
        Commands::Version => version::version(&cli),
    }
}

/// Loads configuration from the given path, falling back to defaults when
/// the file does not exist.
pub(crate) fn load_config(path: &Path) -> BinResult<ApiConfig> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "config file not found, using defaults");
        return Ok(ApiConfig::default());
    }

    ApiConfig::from_file(path)
        .map_err(|e| BinError::config(format!("failed to load {}: {}", path.display(), e)))
}
