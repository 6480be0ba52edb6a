use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

use super::value_objects::ExpenseChanges;

/// A single recorded expense
///
/// # Invariants
/// - `id` and `timestamp` are assigned once at creation and never change
/// - `category` names a category that existed when it was last written
/// - `note` is never absent; an omitted note is stored as an empty string
///
/// # Example
/// ```
/// use expense_tracker_api::domain::expense::Expense;
///
/// let expense = Expense::new(12.5, "Food".to_string(), None);
///
/// assert_eq!(expense.amount(), 12.5);
/// assert_eq!(expense.category(), "Food");
/// assert_eq!(expense.note(), "");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    id: Uuid,
    amount: f64,
    category: String,
    note: String,
    timestamp: DateTime<Utc>,
}

impl Expense {
    /// Creates a new expense stamped with the current time
    ///
    /// The timestamp is truncated to microseconds, the precision the store
    /// keeps, so the created record matches what is later read back.
    ///
    /// # Arguments
    /// * `amount` - Amount spent; any number is accepted
    /// * `category` - Name of the category the expense belongs to
    /// * `note` - Optional free text, stored as `""` when absent
    pub fn new(amount: f64, category: String, note: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            category,
            note: note.unwrap_or_default(),
            timestamp: Utc::now().trunc_subsecs(6),
        }
    }

    /// Reconstitutes an expense from stored fields
    pub fn from_persistence(
        id: Uuid,
        amount: f64,
        category: String,
        note: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            amount,
            category,
            note,
            timestamp,
        }
    }

    /// Merges the given changes into this expense
    ///
    /// Fields absent from `changes` keep their current value. Identity
    /// and creation time are never touched.
    pub fn apply(&mut self, changes: &ExpenseChanges) {
        if let Some(amount) = changes.amount {
            self.amount = amount;
        }
        if let Some(category) = &changes.category {
            self.category = category.clone();
        }
        if let Some(note) = &changes.note {
            self.note = note.clone();
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
