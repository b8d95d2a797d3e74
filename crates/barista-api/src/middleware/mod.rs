// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! Middleware for the API server.

mod scope;

pub use scope::{ScopeLayer, ScopeMiddleware};
