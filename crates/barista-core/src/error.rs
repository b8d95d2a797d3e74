// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! Persistence error types.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors produced by the drink store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No drink exists with the requested id.
    #[error("drink {id} not found")]
    NotFound {
        /// The id that was requested.
        id: i64,
    },

    /// The underlying database operation failed.
    ///
    /// Covers constraint violations (e.g. duplicate titles) as well as
    /// connection problems; the API layer maps all of these to 422.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored recipe column did not contain valid JSON.
    #[error("invalid recipe data: {0}")]
    Recipe(#[from] serde_json::Error),
}

impl StoreError {
    /// Creates a not-found error for the given id.
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }

    /// Returns `true` if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
