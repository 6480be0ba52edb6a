use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::category::Category;
use crate::domain::repositories::{CategoryRepository, StoreError, StoreResult};

/// PostgreSQL implementation of CategoryRepository
///
/// Deleting a category also clears the matching rows from `expenses`
/// inside the same transaction.
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    /// Creates a new PostgresCategoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CategoryRow {
    id: Uuid,
    name: String,
}

fn backend(context: &str, e: sqlx::Error) -> StoreError {
    StoreError::Backend(format!("{}: {}", context, e))
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn create(&self, category: &Category) -> StoreResult<()> {
        sqlx::query("INSERT INTO categories (id, name) VALUES ($1, $2)")
            .bind(category.id())
            .bind(category.name())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                let unique = e
                    .as_database_error()
                    .map(|db| db.is_unique_violation())
                    .unwrap_or(false);
                if unique {
                    StoreError::Duplicate(format!("category {}", category.name()))
                } else {
                    backend("Failed to create category", e)
                }
            })?;

        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>("SELECT id, name FROM categories ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| backend("Failed to list categories", e))?;

        Ok(rows
            .into_iter()
            .map(|r| Category::from_persistence(r.id, r.name))
            .collect())
    }

    async fn exists(&self, name: &str) -> StoreResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM categories WHERE name = $1)")
                .bind(name)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| backend("Failed to look up category", e))?;

        Ok(exists)
    }

    async fn delete_cascade(&self, name: &str) -> StoreResult<Option<u64>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| backend("Failed to begin transaction", e))?;

        let removed = sqlx::query("DELETE FROM categories WHERE name = $1")
            .bind(name)
            .execute(&mut *tx)
            .await
            .map_err(|e| backend("Failed to delete category", e))?;

        if removed.rows_affected() == 0 {
            tx.rollback()
                .await
                .map_err(|e| backend("Failed to roll back transaction", e))?;
            return Ok(None);
        }

        let expenses = sqlx::query("DELETE FROM expenses WHERE category = $1")
            .bind(name)
            .execute(&mut *tx)
            .await
            .map_err(|e| backend("Failed to delete category expenses", e))?;

        tx.commit()
            .await
            .map_err(|e| backend("Failed to commit category deletion", e))?;

        Ok(Some(expenses.rows_affected()))
    }
}
