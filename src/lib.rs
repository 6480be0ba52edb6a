//! Expense Tracker API Library
//!
//! HTTP API for recording expenses against a managed list of categories.
//! Provides the domain types, store ports with PostgreSQL and in-memory
//! adapters, and the axum router.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
