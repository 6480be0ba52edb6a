//! Integration tests for the PostgreSQL repositories
//!
//! These tests need a reachable PostgreSQL instance in `DATABASE_URL` and
//! are ignored by default. Run them with `cargo test -- --ignored`.
//!
//! Every test works on category names unique to that test, so runs can
//! share a database.

use expense_tracker_api::domain::category::Category;
use expense_tracker_api::domain::expense::{Expense, ExpenseChanges};
use expense_tracker_api::domain::repositories::{
    CategoryRepository, ExpenseRepository, StoreError,
};
use expense_tracker_api::infrastructure::database::run_migrations;
use expense_tracker_api::infrastructure::repositories::{
    PostgresCategoryRepository, PostgresExpenseRepository,
};
use sqlx::PgPool;
use uuid::Uuid;

/// Set up test database connection pool with the schema in place
async fn setup_test_db() -> PgPool {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for integration tests");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    run_migrations(&pool)
        .await
        .expect("Failed to create schema");

    pool
}

/// Category name that no other test run will use
fn unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

/// Clean up a category and its expenses
async fn cleanup(pool: &PgPool, name: &str) {
    PostgresCategoryRepository::new(pool.clone())
        .delete_cascade(name)
        .await
        .expect("Failed to clean up test category");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_category_create_and_exists() {
    let pool = setup_test_db().await;
    let repo = PostgresCategoryRepository::new(pool.clone());
    let name = unique_name("food");

    repo.create(&Category::new(name.clone()))
        .await
        .expect("Failed to create category");

    assert!(repo.exists(&name).await.unwrap());
    assert!(!repo.exists(&unique_name("missing")).await.unwrap());
    assert!(repo
        .list()
        .await
        .unwrap()
        .iter()
        .any(|c| c.name() == name));

    cleanup(&pool, &name).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_duplicate_category_violates_unique_constraint() {
    let pool = setup_test_db().await;
    let repo = PostgresCategoryRepository::new(pool.clone());
    let name = unique_name("dup");

    repo.create(&Category::new(name.clone()))
        .await
        .expect("First category creation should succeed");

    let result = repo.create(&Category::new(name.clone())).await;
    assert!(
        matches!(result, Err(StoreError::Duplicate(_))),
        "Duplicate name should be reported as Duplicate"
    );

    cleanup(&pool, &name).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_expense_create_update_delete() {
    let pool = setup_test_db().await;
    let categories = PostgresCategoryRepository::new(pool.clone());
    let expenses = PostgresExpenseRepository::new(pool.clone());
    let name = unique_name("travel");
    categories.create(&Category::new(name.clone())).await.unwrap();

    let expense = Expense::new(42.0, name.clone(), None);
    expenses.create(&expense).await.expect("Failed to create expense");

    let listed = expenses.list().await.unwrap();
    let found = listed
        .iter()
        .find(|e| e.id() == expense.id())
        .expect("Expense should be listed");
    assert_eq!(found.amount(), 42.0);
    assert_eq!(found.note(), "");
    assert_eq!(found.timestamp(), expense.timestamp());

    let changes = ExpenseChanges {
        note: Some("airport".to_string()),
        ..Default::default()
    };
    let updated = expenses
        .update(expense.id(), &changes)
        .await
        .unwrap()
        .expect("Expense should be updated");
    assert_eq!(updated.note(), "airport");
    assert_eq!(updated.amount(), 42.0);
    assert_eq!(updated.category(), name);

    assert!(expenses
        .update(Uuid::new_v4(), &changes)
        .await
        .unwrap()
        .is_none());

    assert!(expenses.delete(expense.id()).await.unwrap());
    assert!(!expenses.delete(expense.id()).await.unwrap());

    cleanup(&pool, &name).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at PostgreSQL"]
async fn test_delete_cascade_removes_matching_expenses_in_one_transaction() {
    let pool = setup_test_db().await;
    let categories = PostgresCategoryRepository::new(pool.clone());
    let expenses = PostgresExpenseRepository::new(pool.clone());
    let doomed = unique_name("doomed");
    let kept = unique_name("kept");
    categories.create(&Category::new(doomed.clone())).await.unwrap();
    categories.create(&Category::new(kept.clone())).await.unwrap();

    for _ in 0..3 {
        expenses
            .create(&Expense::new(1.0, doomed.clone(), None))
            .await
            .unwrap();
    }
    let survivor = Expense::new(2.0, kept.clone(), None);
    expenses.create(&survivor).await.unwrap();

    let removed = categories.delete_cascade(&doomed).await.unwrap();
    assert_eq!(removed, Some(3));
    assert!(!categories.exists(&doomed).await.unwrap());

    let remaining = expenses.list().await.unwrap();
    assert!(remaining.iter().all(|e| e.category() != doomed));
    assert!(remaining.iter().any(|e| e.id() == survivor.id()));

    assert_eq!(categories.delete_cascade(&doomed).await.unwrap(), None);

    cleanup(&pool, &kept).await;
}
