// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! Implementation of the `run` command.

use tracing::info;

use barista_api::{ApiServer, AppState};
use barista_core::DrinkStore;

use crate::cli::{Cli, RunArgs};
use crate::error::{BinError, BinResult};
use crate::shutdown::ShutdownCoordinator;

/// Executes the `run` command to start the API server.
pub async fn run(cli: &Cli, args: RunArgs) -> BinResult<()> {
    let mut config = super::load_config(&cli.config)?;

    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    config.validate()?;

    info!(database_url = %config.database_url, "opening drink store");
    let store = DrinkStore::connect(&config.database_url).await?;

    let state = AppState::builder().config(config).store(store).build()?;
    let server = ApiServer::new(state);

    let coordinator = ShutdownCoordinator::new();
    let waiter = coordinator.clone();

    server
        .run_with_shutdown(async move { waiter.wait_for_shutdown().await })
        .await
        .map_err(BinError::from)
}
