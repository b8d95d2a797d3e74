// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Barista Team. All rights reserved.

//! SQLite-backed drink store.
//!
//! Connections are scoped per operation: reads borrow a pool connection for
//! the duration of a query, writes run inside an explicit transaction that is
//! committed on success and rolled back on drop for every early-exit path.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};

use crate::error::{StoreError, StoreResult};
use crate::model::{Drink, DrinkPatch, Ingredient, NewDrink};

const SCHEMA: &str = r#"CREATE TABLE IF NOT EXISTS drinks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL UNIQUE,
    recipe TEXT NOT NULL
);"#;

// =============================================================================
// DrinkStore
// =============================================================================

/// Persistent store for drinks.
#[derive(Clone)]
pub struct DrinkStore {
    pool: SqlitePool,
}

impl DrinkStore {
    /// Opens (creating if missing) the database at the given URL.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init().await?;
        Ok(store)
    }

    /// Opens an in-memory database.
    ///
    /// Pinned to a single connection; each SQLite in-memory connection is its
    /// own database.
    pub async fn in_memory() -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        let store = Self { pool };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> StoreResult<()> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// Returns all drinks ordered by id.
    pub async fn list(&self) -> StoreResult<Vec<Drink>> {
        let rows = sqlx::query("SELECT id, title, recipe FROM drinks ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_drink).collect()
    }

    /// Returns the drink with the given id.
    pub async fn get(&self, id: i64) -> StoreResult<Drink> {
        let row = sqlx::query("SELECT id, title, recipe FROM drinks WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => row_to_drink(&row),
            None => Err(StoreError::not_found(id)),
        }
    }

    /// Inserts a new drink and returns it with its assigned id.
    ///
    /// Duplicate titles violate the UNIQUE constraint and surface as
    /// [`StoreError::Database`].
    pub async fn insert(&self, new: NewDrink) -> StoreResult<Drink> {
        let recipe_json = serde_json::to_string(&new.recipe)?;

        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("INSERT INTO drinks (title, recipe) VALUES (?1, ?2)")
            .bind(&new.title)
            .bind(&recipe_json)
            .execute(&mut *tx)
            .await?;
        let id = result.last_insert_rowid();
        tx.commit().await?;

        tracing::debug!(id, title = %new.title, "drink inserted");

        Ok(Drink {
            id,
            title: new.title,
            recipe: new.recipe,
        })
    }

    /// Applies a partial update to the drink with the given id.
    ///
    /// Fields not present in the patch keep their stored values.
    pub async fn update(&self, id: i64, patch: DrinkPatch) -> StoreResult<Drink> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query("SELECT id, title, recipe FROM drinks WHERE id = ?1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let current = match row {
            Some(row) => row_to_drink(&row)?,
            None => return Err(StoreError::not_found(id)),
        };

        let title = patch.title.unwrap_or(current.title);
        let recipe = patch.recipe.unwrap_or(current.recipe);
        let recipe_json = serde_json::to_string(&recipe)?;

        sqlx::query("UPDATE drinks SET title = ?1, recipe = ?2 WHERE id = ?3")
            .bind(&title)
            .bind(&recipe_json)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::debug!(id, title = %title, "drink updated");

        Ok(Drink { id, title, recipe })
    }

    /// Deletes the drink with the given id.
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;

        let affected = sqlx::query("DELETE FROM drinks WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if affected == 0 {
            return Err(StoreError::not_found(id));
        }
        tx.commit().await?;

        tracing::debug!(id, "drink deleted");

        Ok(())
    }

    /// Returns the number of persisted drinks.
    pub async fn count(&self) -> StoreResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM drinks")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("n")?)
    }
}

impl std::fmt::Debug for DrinkStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrinkStore").finish_non_exhaustive()
    }
}

fn row_to_drink(row: &SqliteRow) -> StoreResult<Drink> {
    let recipe_json: String = row.try_get("recipe")?;
    let recipe: Vec<Ingredient> = serde_json::from_str(&recipe_json)?;

    Ok(Drink {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        recipe,
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn latte() -> NewDrink {
        NewDrink::new("Latte", vec![Ingredient::new("milk", "white", 1)])
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = DrinkStore::in_memory().await.unwrap();

        let created = store.insert(latte()).await.unwrap();
        assert!(created.id > 0);

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_list_ordered_by_id() {
        let store = DrinkStore::in_memory().await.unwrap();

        store.insert(latte()).await.unwrap();
        store
            .insert(NewDrink::new(
                "Mocha",
                vec![Ingredient::new("chocolate", "brown", 2)],
            ))
            .await
            .unwrap();

        let drinks = store.list().await.unwrap();
        assert_eq!(drinks.len(), 2);
        assert!(drinks[0].id < drinks[1].id);
    }

    #[tokio::test]
    async fn test_duplicate_title_rejected() {
        let store = DrinkStore::in_memory().await.unwrap();

        store.insert(latte()).await.unwrap();
        let err = store.insert(latte()).await.unwrap_err();
        assert!(matches!(err, StoreError::Database(_)));
    }

    #[tokio::test]
    async fn test_partial_update_retains_recipe() {
        let store = DrinkStore::in_memory().await.unwrap();
        let created = store.insert(latte()).await.unwrap();

        let updated = store
            .update(created.id, DrinkPatch::empty().with_title("Flat White"))
            .await
            .unwrap();

        assert_eq!(updated.title, "Flat White");
        assert_eq!(updated.recipe, created.recipe);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = DrinkStore::in_memory().await.unwrap();

        let err = store.update(999, DrinkPatch::empty()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete() {
        let store = DrinkStore::in_memory().await.unwrap();
        let created = store.insert(latte()).await.unwrap();

        store.delete(created.id).await.unwrap();
        assert!(store.get(created.id).await.unwrap_err().is_not_found());

        let err = store.delete(created.id).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
