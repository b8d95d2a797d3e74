// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! API request handlers.

pub mod drinks;
pub mod health;

pub use drinks::{
    create_drink, delete_drink, list_drinks, list_drinks_detail, update_drink,
    CreateDrinkRequest, UpdateDrinkRequest,
};
pub use health::health;
