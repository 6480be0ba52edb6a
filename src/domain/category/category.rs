use uuid::Uuid;

/// A named bucket that expenses are filed under
///
/// # Invariants
/// - `name` is unique among stored categories (enforced by the store)
/// - Expenses refer to a category by `name`, not by `id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: Uuid,
    name: String,
}

impl Category {
    /// Creates a new category with a fresh identifier
    ///
    /// # Example
    /// ```
    /// use expense_tracker_api::domain::category::Category;
    ///
    /// let category = Category::new("Food".to_string());
    /// assert_eq!(category.name(), "Food");
    /// ```
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }

    /// Reconstitutes a category from stored fields
    pub fn from_persistence(id: Uuid, name: String) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
