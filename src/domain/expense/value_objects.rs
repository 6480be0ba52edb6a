use uuid::Uuid;

/// Partial set of fields to merge into an existing expense
///
/// Each `None` field is left unchanged by the update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseChanges {
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub note: Option<String>,
}

impl ExpenseChanges {
    /// Returns true when the update would not touch any field
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.category.is_none() && self.note.is_none()
    }
}

/// Parses a client-supplied expense identifier
///
/// Identifiers that are not valid UUIDs cannot match any stored expense,
/// so callers treat `None` as a miss rather than as malformed input.
///
/// # Example
/// ```
/// use expense_tracker_api::domain::expense::parse_expense_id;
///
/// assert!(parse_expense_id("not-an-id").is_none());
/// assert!(parse_expense_id("67e55044-10b1-426f-9247-bb680e5fe0c8").is_some());
/// ```
pub fn parse_expense_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}
