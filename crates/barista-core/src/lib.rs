// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! # barista-core
//!
//! Domain model and persistence for the Barista drinks menu service.
//!
//! This crate provides the `Drink` model with its short/long projections
//! and the SQLite-backed [`DrinkStore`].

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod model;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use model::{Drink, DrinkPatch, DrinkSummary, Ingredient, IngredientSummary, NewDrink};
pub use store::DrinkStore;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
