use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::expense::{Expense, ExpenseChanges};
use crate::domain::repositories::{ExpenseRepository, StoreError, StoreResult};

/// PostgreSQL implementation of ExpenseRepository
pub struct PostgresExpenseRepository {
    pool: PgPool,
}

impl PostgresExpenseRepository {
    /// Creates a new PostgresExpenseRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ExpenseRow {
    id: Uuid,
    amount: f64,
    category: String,
    note: String,
    created_at: DateTime<Utc>,
}

impl From<ExpenseRow> for Expense {
    fn from(r: ExpenseRow) -> Self {
        Expense::from_persistence(r.id, r.amount, r.category, r.note, r.created_at)
    }
}

#[async_trait]
impl ExpenseRepository for PostgresExpenseRepository {
    async fn create(&self, expense: &Expense) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO expenses (id, amount, category, note, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(expense.id())
        .bind(expense.amount())
        .bind(expense.category())
        .bind(expense.note())
        .bind(expense.timestamp())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(format!("Failed to create expense: {}", e)))?;

        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<Expense>> {
        let rows = sqlx::query_as::<_, ExpenseRow>(
            r#"
            SELECT id, amount, category, note, created_at
            FROM expenses
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(format!("Failed to list expenses: {}", e)))?;

        Ok(rows.into_iter().map(Expense::from).collect())
    }

    async fn update(&self, id: Uuid, changes: &ExpenseChanges) -> StoreResult<Option<Expense>> {
        let row = sqlx::query_as::<_, ExpenseRow>(
            r#"
            UPDATE expenses
            SET amount = COALESCE($2, amount),
                category = COALESCE($3, category),
                note = COALESCE($4, note)
            WHERE id = $1
            RETURNING id, amount, category, note, created_at
            "#,
        )
        .bind(id)
        .bind(changes.amount)
        .bind(changes.category.as_deref())
        .bind(changes.note.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(format!("Failed to update expense: {}", e)))?;

        Ok(row.map(Expense::from))
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to delete expense: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
