// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! # Store Integration Tests
//!
//! Tests for the drink store against file-backed SQLite databases,
//! covering persistence across reopens and transactional behavior.

use barista_core::{DrinkPatch, DrinkStore, Ingredient};
use barista_tests::prelude::*;

fn db_url(dir: &tempfile::TempDir) -> String {
    format!("sqlite://{}/drinks.db", dir.path().display())
}

#[tokio::test]
async fn test_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let url = db_url(&dir);

    {
        let store = DrinkStore::connect(&url).await.unwrap();
        store.insert(DrinkFixtures::mocha()).await.unwrap();
    }

    let store = DrinkStore::connect(&url).await.unwrap();
    let drinks = store.list().await.unwrap();
    assert_eq!(drinks.len(), 1);
    assert_eq!(drinks[0].title, "mocha");
    assert_eq!(drinks[0].recipe.len(), 3);
}

#[tokio::test]
async fn test_store_ids_are_monotonic() {
    let dir = tempfile::tempdir().unwrap();
    let store = DrinkStore::connect(&db_url(&dir)).await.unwrap();

    let water = store.insert(DrinkFixtures::water()).await.unwrap();
    let matcha = store.insert(DrinkFixtures::matcha_latte()).await.unwrap();
    let mocha = store.insert(DrinkFixtures::mocha()).await.unwrap();

    assert!(water.id < matcha.id);
    assert!(matcha.id < mocha.id);

    // Listing preserves id order.
    let titles: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.title)
        .collect();
    assert_eq!(titles, vec!["water", "matcha latte", "mocha"]);
}

#[tokio::test]
async fn test_store_duplicate_title_leaves_state_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let store = DrinkStore::connect(&db_url(&dir)).await.unwrap();

    store.insert(DrinkFixtures::water()).await.unwrap();
    let result = store.insert(DrinkFixtures::water()).await;

    assert!(result.is_err());
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_store_patch_merges_against_stored_row() {
    let dir = tempfile::tempdir().unwrap();
    let store = DrinkStore::connect(&db_url(&dir)).await.unwrap();

    let drink = store.insert(DrinkFixtures::matcha_latte()).await.unwrap();

    let renamed = store
        .update(drink.id, DrinkPatch::empty().with_title("hot matcha"))
        .await
        .unwrap();
    assert_eq!(renamed.title, "hot matcha");
    assert_eq!(renamed.recipe, drink.recipe);

    let new_recipe = vec![Ingredient::new("matcha", "green", 2)];
    let reworked = store
        .update(drink.id, DrinkPatch::empty().with_recipe(new_recipe.clone()))
        .await
        .unwrap();
    assert_eq!(reworked.title, "hot matcha");
    assert_eq!(reworked.recipe, new_recipe);
}

#[tokio::test]
async fn test_store_delete_then_get_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = DrinkStore::connect(&db_url(&dir)).await.unwrap();

    let drink = store.insert(DrinkFixtures::water()).await.unwrap();
    store.delete(drink.id).await.unwrap();

    let err = store.get(drink.id).await.unwrap_err();
    assert!(err.is_not_found());
}
