// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! Implementation of the `gen-token` command.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use barista_api::Claims;

use crate::cli::{Cli, GenTokenArgs};
use crate::error::{BinError, BinResult};

/// Executes the `gen-token` command to mint a development bearer token.
///
/// Signs with HS256 under the configured development kid, so a server
/// running with the same `dev_secret` accepts the token.
pub fn gen_token(cli: &Cli, args: GenTokenArgs) -> BinResult<()> {
    let config = super::load_config(&cli.config)?;

    let secret = args
        .secret
        .or_else(|| config.auth.dev_secret.clone())
        .ok_or_else(|| {
            BinError::config("no signing secret: pass --secret or configure auth.dev_secret")
        })?;

    let mut claims = Claims::new(&args.sub, args.expires_in)
        .with_permissions(args.permissions.clone());
    if let Some(ref issuer) = config.auth.issuer {
        claims = claims.with_issuer(issuer.clone());
    }
    if let Some(ref audience) = config.auth.audience {
        claims = claims.with_audience(audience.clone());
    }

    let mut header = Header::new(Algorithm::HS256);
    header.kid = Some(config.auth.dev_kid.clone());

    let token = encode(&header, &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|e| BinError::runtime(format!("token signing failed: {}", e)))?;

    println!("{}", token);

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, Commands};

    #[test]
    fn test_gen_token_requires_secret() {
        let cli = Cli::parse_from([
            "barista",
            "-c",
            "/nonexistent/barista.yaml",
            "gen-token",
        ]);
        let Some(Commands::GenToken(args)) = cli.command.clone() else {
            panic!("expected GenToken command");
        };

        let result = gen_token(&cli, args);
        assert!(matches!(result, Err(BinError::Configuration(_))));
    }

    #[test]
    fn test_gen_token_with_explicit_secret() {
        let cli = Cli::parse_from([
            "barista",
            "-c",
            "/nonexistent/barista.yaml",
            "gen-token",
            "--secret",
            "test-secret-key-that-is-long-enough",
            "-p",
            "post:drinks",
        ]);
        let Some(Commands::GenToken(args)) = cli.command.clone() else {
            panic!("expected GenToken command");
        };

        assert!(gen_token(&cli, args).is_ok());
    }
}
