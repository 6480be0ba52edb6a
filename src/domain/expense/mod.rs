// Expense domain module
// Contains the expense entity and the value objects used to change it

#![allow(clippy::module_inception)]

pub mod expense;
pub mod value_objects;

pub use expense::Expense;
pub use value_objects::{parse_expense_id, ExpenseChanges};
