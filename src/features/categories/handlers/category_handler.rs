use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{ApiResult, ResultExt};
use crate::core::extractor::AppPath;
use crate::features::categories::dtos::{CategoriesResponseDto, CategoryQuestionsResponseDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ErrorResponse, ResourceId};

/// List all categories
///
/// Returns a map from category id to its display name.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Category index", body = CategoriesResponseDto),
        (status = 404, description = "Categories could not be loaded", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> ApiResult<Json<CategoriesResponseDto>> {
    let categories = service.list_map().await.or_not_found()?;
    Ok(Json(CategoriesResponseDto { categories }))
}

/// List questions in a category
///
/// An unknown category yields an empty list and an empty category name.
#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Questions in the category", body = CategoryQuestionsResponseDto),
        (status = 404, description = "Invalid id or questions could not be loaded", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_category_questions(
    State(service): State<Arc<CategoryService>>,
    AppPath(category_id): AppPath<ResourceId>,
) -> ApiResult<Json<CategoryQuestionsResponseDto>> {
    let result = service
        .questions_in_category(category_id.get())
        .await
        .or_not_found()?;
    Ok(Json(result))
}
