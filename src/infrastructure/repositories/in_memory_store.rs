//! In-process store implementing both repository ports
//!
//! Used by the test suites and for running the API without a database.
//! Both collections sit behind a single lock so a cascading category
//! delete is never observed half-done.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::category::Category;
use crate::domain::expense::{Expense, ExpenseChanges};
use crate::domain::repositories::{
    CategoryRepository, ExpenseRepository, StoreError, StoreResult,
};

#[derive(Default)]
struct Collections {
    categories: Vec<Category>,
    expenses: Vec<Expense>,
}

/// Memory-backed store holding the `categories` and `expenses` collections
#[derive(Default)]
pub struct InMemoryStore {
    collections: RwLock<Collections>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExpenseRepository for InMemoryStore {
    async fn create(&self, expense: &Expense) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        if collections.expenses.iter().any(|e| e.id() == expense.id()) {
            return Err(StoreError::Duplicate(format!("expense {}", expense.id())));
        }
        collections.expenses.push(expense.clone());
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<Expense>> {
        Ok(self.collections.read().await.expenses.clone())
    }

    async fn update(&self, id: Uuid, changes: &ExpenseChanges) -> StoreResult<Option<Expense>> {
        let mut collections = self.collections.write().await;
        Ok(collections
            .expenses
            .iter_mut()
            .find(|e| e.id() == id)
            .map(|expense| {
                expense.apply(changes);
                expense.clone()
            }))
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let mut collections = self.collections.write().await;
        let before = collections.expenses.len();
        collections.expenses.retain(|e| e.id() != id);
        Ok(collections.expenses.len() < before)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn create(&self, category: &Category) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        if collections
            .categories
            .iter()
            .any(|c| c.name() == category.name())
        {
            return Err(StoreError::Duplicate(format!("category {}", category.name())));
        }
        collections.categories.push(category.clone());
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<Category>> {
        Ok(self.collections.read().await.categories.clone())
    }

    async fn exists(&self, name: &str) -> StoreResult<bool> {
        Ok(self
            .collections
            .read()
            .await
            .categories
            .iter()
            .any(|c| c.name() == name))
    }

    async fn delete_cascade(&self, name: &str) -> StoreResult<Option<u64>> {
        let mut collections = self.collections.write().await;

        let before = collections.categories.len();
        collections.categories.retain(|c| c.name() != name);
        if collections.categories.len() == before {
            return Ok(None);
        }

        let before = collections.expenses.len();
        collections.expenses.retain(|e| e.category() != name);
        Ok(Some((before - collections.expenses.len()) as u64))
    }
}
