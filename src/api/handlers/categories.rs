use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::extract::ApiJson;
use crate::api::state::AppState;
use crate::domain::category::Category;
use crate::domain::repositories::StoreError;

/// Request body for creating a category
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
}

/// Category as returned to clients
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id(),
            name: category.name().to_string(),
        }
    }
}

/// Confirmation of a cascading category delete
#[derive(Debug, Serialize)]
pub struct DeleteCategoryResponse {
    pub message: String,
    pub expenses_deleted: u64,
}

/// List all categories
///
/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let categories = state.categories.list().await?;

    Ok(Json(categories.iter().map(CategoryResponse::from).collect()))
}

/// Create a new category
///
/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), ApiError> {
    let name = req
        .name
        .ok_or_else(|| ApiError::bad_request("Missing required fields"))?;

    if state.categories.exists(&name).await? {
        return Err(ApiError::bad_request("Category already exists"));
    }

    // The store enforces uniqueness too; a concurrent create lands here
    let category = Category::new(name);
    state
        .categories
        .create(&category)
        .await
        .map_err(|e| match e {
            StoreError::Duplicate(_) => ApiError::bad_request("Category already exists"),
            other => ApiError::from(other),
        })?;

    tracing::info!(category_id = %category.id(), name = %category.name(), "Category created");

    Ok((StatusCode::CREATED, Json(CategoryResponse::from(&category))))
}

/// Delete a category and every expense filed under it
///
/// DELETE /categories/:name
pub async fn delete_category(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DeleteCategoryResponse>, ApiError> {
    let expenses_deleted = state
        .categories
        .delete_cascade(&name)
        .await?
        .ok_or_else(|| ApiError::not_found("Category not found"))?;

    tracing::info!(name = %name, expenses_deleted, "Category deleted");

    Ok(Json(DeleteCategoryResponse {
        message: "Category and associated expenses deleted".to_string(),
        expenses_deleted,
    }))
}
