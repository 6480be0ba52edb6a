use async_trait::async_trait;

use super::errors::StoreResult;
use crate::domain::category::Category;

/// Repository trait for categories
///
/// Category deletion cascades into the expense collection, so
/// implementations need access to both collections of the store.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert a new category
    ///
    /// Fails with `StoreError::Duplicate` if the name is already taken.
    async fn create(&self, category: &Category) -> StoreResult<()>;

    /// Return every stored category
    async fn list(&self) -> StoreResult<Vec<Category>>;

    /// Check whether a category with this exact name exists
    async fn exists(&self, name: &str) -> StoreResult<bool>;

    /// Delete the named category together with every expense filed under it
    ///
    /// Both removals happen as one unit. Returns the number of expenses
    /// removed, or `None` when no category has that name (in which case
    /// nothing is touched).
    async fn delete_cascade(&self, name: &str) -> StoreResult<Option<u64>>;
}
