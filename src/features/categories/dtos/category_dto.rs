use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;
use crate::features::questions::dtos::QuestionDto;

/// Category index keyed by stringified id, valued by display name
pub type CategoryMap = BTreeMap<String, String>;

/// Build the category index from rows ordered by id
pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|c| (c.id.to_string(), c.kind))
        .collect()
}

/// Response DTO for the category listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponseDto {
    pub categories: BTreeMap<String, String>,
}

/// Questions filed under one category
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuestionsResponseDto {
    pub questions: Vec<QuestionDto>,
    pub total_questions: i64,
    /// Display name of the category, empty when the id is unknown
    pub current_category: String,
}
