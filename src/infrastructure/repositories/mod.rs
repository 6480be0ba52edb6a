// Repository implementations (data access layer)
// Adapters that implement the domain store ports

pub mod in_memory_store;
pub mod postgres_category_repository;
pub mod postgres_expense_repository;

pub use in_memory_store::InMemoryStore;
pub use postgres_category_repository::PostgresCategoryRepository;
pub use postgres_expense_repository::PostgresExpenseRepository;
