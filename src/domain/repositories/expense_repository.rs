use async_trait::async_trait;
use uuid::Uuid;

use super::errors::StoreResult;
use crate::domain::expense::{Expense, ExpenseChanges};

/// Repository trait for expense records
///
/// Implementations own the `expenses` collection of the backing store.
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// Insert a newly created expense
    async fn create(&self, expense: &Expense) -> StoreResult<()>;

    /// Return every stored expense
    async fn list(&self) -> StoreResult<Vec<Expense>>;

    /// Merge `changes` into the expense with the given id and return its
    /// new state, or `None` when no expense has that id
    async fn update(&self, id: Uuid, changes: &ExpenseChanges) -> StoreResult<Option<Expense>>;

    /// Delete the expense with the given id; returns false if nothing was removed
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
}
