use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::repositories::{CategoryRepository, ExpenseRepository};
use crate::infrastructure::repositories::{
    InMemoryStore, PostgresCategoryRepository, PostgresExpenseRepository,
};

/// Store handles shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub expenses: Arc<dyn ExpenseRepository>,
    pub categories: Arc<dyn CategoryRepository>,
}

impl AppState {
    pub fn new(
        expenses: Arc<dyn ExpenseRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            expenses,
            categories,
        }
    }

    /// State backed by a PostgreSQL pool
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PostgresExpenseRepository::new(pool.clone())),
            Arc::new(PostgresCategoryRepository::new(pool)),
        )
    }

    /// State backed by a fresh, empty in-memory store
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::new(store.clone(), store)
    }
}
