// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! Drink CRUD handlers.

use axum::extract::State;
use serde::Deserialize;

use barista_core::{Drink, DrinkPatch, DrinkSummary, Ingredient, NewDrink};

use crate::error::{ApiError, ApiResult};
use crate::extractors::{Auth, DrinkId, ValidatedJson};
use crate::response::{DeleteBody, DrinkBody, DrinkListBody};
use crate::state::AppState;

// =============================================================================
// Request Bodies
// =============================================================================

/// Body for `POST /drinks`.
#[derive(Debug, Deserialize)]
pub struct CreateDrinkRequest {
    /// Drink title. Required and non-empty.
    pub title: Option<String>,
    /// Drink recipe. Required and non-empty.
    pub recipe: Option<Vec<Ingredient>>,
}

impl CreateDrinkRequest {
    /// Validates the body into a new drink.
    pub fn into_new_drink(self) -> ApiResult<NewDrink> {
        let title = match self.title {
            Some(title) if !title.trim().is_empty() => title,
            _ => return Err(ApiError::bad_request("title is required")),
        };
        let recipe = match self.recipe {
            Some(recipe) if !recipe.is_empty() => recipe,
            _ => return Err(ApiError::bad_request("recipe is required")),
        };
        Ok(NewDrink::new(title, recipe))
    }
}

/// Body for `PATCH /drinks/{drink_id}`.
///
/// Both fields are optional; omitted (or empty) fields keep their stored
/// values.
#[derive(Debug, Deserialize)]
pub struct UpdateDrinkRequest {
    /// New title, if changing.
    pub title: Option<String>,
    /// New recipe, if changing.
    pub recipe: Option<Vec<Ingredient>>,
}

impl UpdateDrinkRequest {
    /// Converts the body into a patch, dropping empty values.
    pub fn into_patch(self) -> DrinkPatch {
        let mut patch = DrinkPatch::empty();
        if let Some(title) = self.title.filter(|t| !t.trim().is_empty()) {
            patch = patch.with_title(title);
        }
        if let Some(recipe) = self.recipe.filter(|r| !r.is_empty()) {
            patch = patch.with_recipe(recipe);
        }
        patch
    }
}

// =============================================================================
// Public Listing
// =============================================================================

/// GET /drinks
///
/// Public listing of the menu in the short representation.
pub async fn list_drinks(
    State(state): State<AppState>,
) -> ApiResult<DrinkListBody<DrinkSummary>> {
    let drinks = state.store.list().await?;
    Ok(DrinkListBody::ok(drinks.iter().map(Drink::summary).collect()))
}

// =============================================================================
// Detail Listing
// =============================================================================

/// GET /drinks-detail
///
/// Full-recipe listing. Requires `get:drinks-detail`.
pub async fn list_drinks_detail(
    State(state): State<AppState>,
    Auth(ctx): Auth,
) -> ApiResult<DrinkListBody<Drink>> {
    tracing::debug!(sub = %ctx.sub, "listing drink details");
    let drinks = state.store.list().await?;
    Ok(DrinkListBody::ok(drinks))
}

// =============================================================================
// Create
// =============================================================================

/// POST /drinks
///
/// Creates a drink. Requires `post:drinks`.
pub async fn create_drink(
    State(state): State<AppState>,
    Auth(ctx): Auth,
    ValidatedJson(body): ValidatedJson<CreateDrinkRequest>,
) -> ApiResult<DrinkBody<Drink>> {
    let new_drink = body.into_new_drink()?;
    let drink = state.store.insert(new_drink).await?;
    tracing::info!(sub = %ctx.sub, id = drink.id, title = %drink.title, "drink created");
    Ok(DrinkBody::one(drink))
}

// =============================================================================
// Update
// =============================================================================

/// PATCH /drinks/{drink_id}
///
/// Partially updates a drink. Requires `patch:drinks`.
pub async fn update_drink(
    State(state): State<AppState>,
    Auth(ctx): Auth,
    DrinkId(drink_id): DrinkId,
    ValidatedJson(body): ValidatedJson<UpdateDrinkRequest>,
) -> ApiResult<DrinkBody<Drink>> {
    let drink = state.store.update(drink_id, body.into_patch()).await?;
    tracing::info!(sub = %ctx.sub, id = drink.id, "drink updated");
    Ok(DrinkBody::one(drink))
}

// =============================================================================
// Delete
// =============================================================================

/// DELETE /drinks/{drink_id}
///
/// Deletes a drink. Requires `delete:drinks`.
pub async fn delete_drink(
    State(state): State<AppState>,
    Auth(ctx): Auth,
    DrinkId(drink_id): DrinkId,
) -> ApiResult<DeleteBody> {
    state.store.delete(drink_id).await?;
    tracing::info!(sub = %ctx.sub, id = drink_id, "drink deleted");
    Ok(DeleteBody::deleted(drink_id))
}

// =============================================================================
// Tests
// =============================================================================
