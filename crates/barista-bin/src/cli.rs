// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! CLI argument parsing and command definitions.
//!
//! This module provides the command-line interface for Barista using clap.
//! It supports multiple subcommands for different operations:
//!
//! - `run`: Start the API server (default)
//! - `validate`: Validate configuration file
//! - `gen-token`: Mint a development bearer token
//! - `version`: Show version information

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// =============================================================================
// Main CLI Structure
// =============================================================================

/// Barista - drinks menu API service
///
/// HTTP API serving a cafe drinks menu with scoped-permission authorization
/// for baristas and managers.
#[derive(Parser, Debug)]
#[command(
    name = "barista",
    version = barista_core::VERSION,
    about = "Drinks menu API service",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    /// Configuration file path
    #[arg(
        short,
        long,
        default_value = "barista.yaml",
        env = "BARISTA_CONFIG",
        global = true
    )]
    pub config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        default_value = "info",
        env = "BARISTA_LOG_LEVEL",
        global = true
    )]
    pub log_level: String,

    /// Log format (text, json, compact)
    #[arg(long, default_value = "text", env = "BARISTA_LOG_FORMAT", global = true)]
    pub log_format: LogFormat,

    /// Enable quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// =============================================================================
// Subcommands
// =============================================================================

/// Available subcommands for the Barista CLI.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the API server
    ///
    /// This is the default command when no subcommand is specified.
    Run(RunArgs),

    /// Validate the configuration file
    ///
    /// Parses and validates the configuration file without starting the
    /// server. Useful for checking configuration before deployment.
    Validate(ValidateArgs),

    /// Mint a development bearer token
    ///
    /// Signs a token with the development secret so protected endpoints can
    /// be exercised without an external issuer.
    #[command(name = "gen-token")]
    GenToken(GenTokenArgs),

    /// Show detailed version information
    Version,
}

// =============================================================================
// Command Arguments
// =============================================================================

/// Arguments for the `run` command.
#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Override the listen port from the configuration
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the database URL from the configuration
    #[arg(long, env = "BARISTA_DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Arguments for the `validate` command.
#[derive(Args, Debug, Default, Clone)]
pub struct ValidateArgs {
    /// Show parsed configuration after validation
    #[arg(short, long)]
    pub show_config: bool,
}

/// Arguments for the `gen-token` command.
#[derive(Args, Debug, Clone)]
pub struct GenTokenArgs {
    /// Subject claim for the token
    #[arg(short, long, default_value = "barista-dev")]
    pub sub: String,

    /// Permission to grant (repeatable)
    #[arg(short = 'p', long = "permission")]
    pub permissions: Vec<String>,

    /// Token lifetime in seconds
    #[arg(long, default_value = "86400")]
    pub expires_in: i64,

    /// Signing secret (defaults to the configured development secret)
    #[arg(long, env = "BARISTA_DEV_SECRET")]
    pub secret: Option<String>,
}

// =============================================================================
// Enums
// =============================================================================

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format for structured logging
    Json,
    /// Compact format for minimal output
    Compact,
}

// =============================================================================
// Helper Methods
// =============================================================================

impl Cli {
    /// Parse CLI arguments from the command line.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective command, defaulting to `Run` if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Run(RunArgs::default()))
    }

    /// Get the effective log level based on flags.
    pub fn effective_log_level(&self) -> &str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            &self.log_level
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command() {
        let cli = Cli::parse_from(["barista"]);
        assert!(cli.command.is_none());
        assert!(matches!(cli.effective_command(), Commands::Run(_)));
    }

    #[test]
    fn test_run_command_overrides() {
        let cli = Cli::parse_from(["barista", "run", "-p", "9000"]);
        if let Some(Commands::Run(args)) = cli.command {
            assert_eq!(args.port, Some(9000));
        } else {
            panic!("expected Run command");
        }
    }

    #[test]
    fn test_validate_command() {
        let cli = Cli::parse_from(["barista", "validate", "--show-config"]);
        if let Some(Commands::Validate(args)) = cli.command {
            assert!(args.show_config);
        } else {
            panic!("expected Validate command");
        }
    }

    #[test]
    fn test_gen_token_command() {
        let cli = Cli::parse_from([
            "barista",
            "gen-token",
            "-s",
            "auth0|manager",
            "-p",
            "post:drinks",
            "-p",
            "delete:drinks",
        ]);
        if let Some(Commands::GenToken(args)) = cli.command {
            assert_eq!(args.sub, "auth0|manager");
            assert_eq!(args.permissions, vec!["post:drinks", "delete:drinks"]);
            assert_eq!(args.expires_in, 86400);
        } else {
            panic!("expected GenToken command");
        }
    }

    #[test]
    fn test_config_path() {
        let cli = Cli::parse_from(["barista", "-c", "/etc/barista/config.yaml"]);
        assert_eq!(cli.config, PathBuf::from("/etc/barista/config.yaml"));
    }

    #[test]
    fn test_quiet_mode() {
        let cli = Cli::parse_from(["barista", "-q"]);
        assert!(cli.quiet);
        assert_eq!(cli.effective_log_level(), "warn");
    }

    #[test]
    fn test_verbose_mode() {
        let cli = Cli::parse_from(["barista", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.effective_log_level(), "debug");
    }
}
