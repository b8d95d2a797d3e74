// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! Implementation of the `version` command.

use crate::cli::Cli;
use crate::error::BinResult;

/// Executes the `version` command to display version information.
pub fn version(_cli: &Cli) -> BinResult<()> {
    println!("Barista - drinks menu API service");
    println!();
    println!("Version Information:");
    println!("  barista-bin:  {}", env!("CARGO_PKG_VERSION"));
    println!("  barista-core: {}", barista_core::VERSION);
    println!("  barista-api:  {}", barista_api::VERSION);
    println!();
    println!("Build Information:");
    println!("  Target: {}", std::env::consts::ARCH);
    println!("  OS:     {}", std::env::consts::OS);
    println!();
    println!("License: PolyForm Noncommercial License 1.0.0");
    println!("Copyright (c) 2025 Barista Team. All rights reserved.");

    Ok(())
}
