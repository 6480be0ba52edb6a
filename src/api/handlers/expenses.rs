use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::extract::ApiJson;
use crate::api::handlers::MessageResponse;
use crate::api::state::AppState;
use crate::domain::expense::{parse_expense_id, Expense, ExpenseChanges};

/// Request body for creating an expense
///
/// Required fields are optional here so that their absence can be
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub note: Option<String>,
}

/// Request body for updating an expense; every field is optional
#[derive(Debug, Deserialize)]
pub struct UpdateExpenseRequest {
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub note: Option<String>,
}

impl From<UpdateExpenseRequest> for ExpenseChanges {
    fn from(req: UpdateExpenseRequest) -> Self {
        Self {
            amount: req.amount,
            category: req.category,
            note: req.note,
        }
    }
}

/// Expense as returned to clients
#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    pub id: Uuid,
    pub amount: f64,
    pub category: String,
    pub note: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&Expense> for ExpenseResponse {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id(),
            amount: expense.amount(),
            category: expense.category().to_string(),
            note: expense.note().to_string(),
            timestamp: expense.timestamp(),
        }
    }
}

async fn ensure_category_exists(state: &AppState, name: &str) -> Result<(), ApiError> {
    if state.categories.exists(name).await? {
        Ok(())
    } else {
        Err(ApiError::bad_request("Category does not exist"))
    }
}

/// List all expenses
///
/// GET /expenses
pub async fn list_expenses(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExpenseResponse>>, ApiError> {
    let expenses = state.expenses.list().await?;

    Ok(Json(expenses.iter().map(ExpenseResponse::from).collect()))
}

/// Create a new expense
///
/// POST /expenses
pub async fn create_expense(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateExpenseRequest>,
) -> Result<(StatusCode, Json<ExpenseResponse>), ApiError> {
    let (Some(amount), Some(category)) = (req.amount, req.category) else {
        return Err(ApiError::bad_request("Missing required fields"));
    };

    ensure_category_exists(&state, &category).await?;

    let expense = Expense::new(amount, category, req.note);
    state.expenses.create(&expense).await?;

    tracing::info!(
        expense_id = %expense.id(),
        category = %expense.category(),
        "Expense created"
    );

    Ok((StatusCode::CREATED, Json(ExpenseResponse::from(&expense))))
}

/// Merge the given fields into an existing expense
///
/// A missing, `null` or unreadable body counts as no data, the same as `{}`.
///
/// PUT /expenses/:id
pub async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<ApiJson<Option<UpdateExpenseRequest>>, ApiError>,
) -> Result<Json<ExpenseResponse>, ApiError> {
    let changes = body
        .ok()
        .and_then(|ApiJson(req)| req)
        .map(ExpenseChanges::from)
        .unwrap_or_default();
    if changes.is_empty() {
        return Err(ApiError::bad_request("No data provided"));
    }

    let Some(id) = parse_expense_id(&id) else {
        return Err(ApiError::not_found("Expense not found"));
    };

    if let Some(category) = &changes.category {
        ensure_category_exists(&state, category).await?;
    }

    let expense = state
        .expenses
        .update(id, &changes)
        .await?
        .ok_or_else(|| ApiError::not_found("Expense not found"))?;

    tracing::info!(expense_id = %id, "Expense updated");

    Ok(Json(ExpenseResponse::from(&expense)))
}

/// Delete an expense
///
/// DELETE /expenses/:id
pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = match parse_expense_id(&id) {
        Some(id) => state.expenses.delete(id).await?,
        None => false,
    };

    if !removed {
        return Err(ApiError::not_found("Expense not found"));
    }

    tracing::info!(expense_id = %id, "Expense deleted");

    Ok(Json(MessageResponse::new("Expense deleted")))
}
