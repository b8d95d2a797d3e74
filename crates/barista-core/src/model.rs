// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! The drink model and its response projections.

use serde::{Deserialize, Serialize};

// =============================================================================
// Ingredient
// =============================================================================

/// A single recipe ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name (e.g. "milk").
    pub name: String,
    /// Display color for the menu graphic (e.g. "white").
    pub color: String,
    /// Number of parts of this ingredient in the drink.
    pub parts: u32,
}

impl Ingredient {
    /// Creates a new ingredient.
    pub fn new(name: impl Into<String>, color: impl Into<String>, parts: u32) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            parts,
        }
    }

    /// Returns the summary projection (name omitted).
    pub fn summary(&self) -> IngredientSummary {
        IngredientSummary {
            color: self.color.clone(),
            parts: self.parts,
        }
    }
}

/// The short projection of an ingredient: color and parts only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientSummary {
    /// Display color.
    pub color: String,
    /// Number of parts.
    pub parts: u32,
}

// =============================================================================
// Drink
// =============================================================================

/// A persisted drink.
///
/// Serializing a `Drink` directly yields the long view: id, title, and the
/// full recipe including ingredient names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    /// Store-assigned identifier.
    pub id: i64,
    /// Drink title. Unique and never empty for a persisted drink.
    pub title: String,
    /// Full recipe.
    pub recipe: Vec<Ingredient>,
}

impl Drink {
    /// Returns the short projection: ingredient names are omitted.
    pub fn summary(&self) -> DrinkSummary {
        DrinkSummary {
            id: self.id,
            title: self.title.clone(),
            recipe: self.recipe.iter().map(Ingredient::summary).collect(),
        }
    }
}

/// The short projection of a drink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkSummary {
    /// Store-assigned identifier.
    pub id: i64,
    /// Drink title.
    pub title: String,
    /// Recipe with ingredient names omitted.
    pub recipe: Vec<IngredientSummary>,
}

// =============================================================================
// Write models
// =============================================================================

/// Data required to create a drink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDrink {
    /// Drink title. Must be non-empty.
    pub title: String,
    /// Full recipe. Must be non-empty.
    pub recipe: Vec<Ingredient>,
}

impl NewDrink {
    /// Creates a new drink payload.
    pub fn new(title: impl Into<String>, recipe: Vec<Ingredient>) -> Self {
        Self {
            title: title.into(),
            recipe,
        }
    }
}

/// A partial update to a drink. Fields left as `None` are retained unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrinkPatch {
    /// New title, if changing.
    pub title: Option<String>,
    /// New recipe, if changing.
    pub recipe: Option<Vec<Ingredient>>,
}

impl DrinkPatch {
    /// A patch that changes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the recipe.
    pub fn with_recipe(mut self, recipe: Vec<Ingredient>) -> Self {
        self.recipe = Some(recipe);
        self
    }
}

// =============================================================================
// Tests
// =============================================================================
