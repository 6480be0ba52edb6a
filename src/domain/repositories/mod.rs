// Store ports
// Implemented by adapters in the infrastructure layer

pub mod category_repository;
pub mod errors;
pub mod expense_repository;

pub use category_repository::CategoryRepository;
pub use errors::{StoreError, StoreResult};
pub use expense_repository::ExpenseRepository;
