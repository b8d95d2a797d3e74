// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! Implementation of the `validate` command.

use crate::cli::{Cli, ValidateArgs};
use crate::error::{BinError, BinResult};

/// Executes the `validate` command to validate configuration.
pub fn validate(cli: &Cli, args: ValidateArgs) -> BinResult<()> {
    let config_path = &cli.config;

    if !config_path.exists() {
        return Err(BinError::Configuration(format!(
            "configuration file not found: {}",
            config_path.display()
        )));
    }

    let config = barista_api::ApiConfig::from_file(config_path)
        .map_err(|e| BinError::Configuration(format!("configuration load failed: {}", e)))?;
    config
        .validate()
        .map_err(|e| BinError::Configuration(format!("configuration validation failed: {}", e)))?;

    println!("configuration is valid: {}", config_path.display());
    println!();
    println!("Summary:");
    println!("  Listen:   {}", config.socket_addr());
    println!("  Database: {}", config.database_url);
    println!(
        "  Auth:     {}",
        match (&config.auth.jwks_url, &config.auth.dev_secret) {
            (Some(url), _) => format!("JWKS ({})", url),
            (None, Some(_)) => format!("development secret (kid: {})", config.auth.dev_kid),
            (None, None) => "unconfigured".to_string(),
        }
    );
    if let Some(ref issuer) = config.auth.issuer {
        println!("  Issuer:   {}", issuer);
    }
    if let Some(ref audience) = config.auth.audience {
        println!("  Audience: {}", audience);
    }

    if args.show_config {
        println!();
        println!("Parsed configuration:");
        println!(
            "{}",
            serde_json::to_string_pretty(&config)
                .unwrap_or_else(|_| "(serialization error)".to_string())
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    #[test]
    fn test_validate_missing_file() {
        let cli = Cli::parse_from(["barista", "-c", "/nonexistent/barista.yaml"]);
        let result = validate(&cli, ValidateArgs::default());
        assert!(matches!(result, Err(BinError::Configuration(_))));
    }

    #[test]
    fn test_validate_good_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "port: 9090\nauth:\n  dev_secret: test-secret-key-that-is-long-enough"
        )
        .unwrap();

        let cli = Cli::parse_from(["barista", "-c", file.path().to_str().unwrap()]);
        assert!(validate(&cli, ValidateArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_rejects_keyless_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port: 9090").unwrap();

        let cli = Cli::parse_from(["barista", "-c", file.path().to_str().unwrap()]);
        let result = validate(&cli, ValidateArgs::default());
        assert!(matches!(result, Err(BinError::Configuration(_))));
    }
}
