use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::dtos::{category_map, CategoryMap, CategoryQuestionsResponseDto};
use crate::features::questions::dtos::QuestionDto;
use crate::modules::store::{CategoryRepository, QuestionRepository};

/// Service for category operations
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl CategoryService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            categories,
            questions,
        }
    }

    /// All categories as an id -> type map
    pub async fn list_map(&self) -> Result<CategoryMap> {
        let categories = self.categories.list().await.inspect_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
        })?;

        Ok(category_map(categories))
    }

    /// Questions filed under `category_id`.
    ///
    /// An unknown category is not an error: it has no questions and an
    /// empty display name.
    pub async fn questions_in_category(
        &self,
        category_id: i32,
    ) -> Result<CategoryQuestionsResponseDto> {
        let questions = self.questions.list_by_category(category_id).await?;
        let category = self.categories.find_by_id(category_id).await?;

        let current_category = match category {
            Some(c) => c.kind,
            None => {
                tracing::debug!("Category {} does not exist", category_id);
                String::new()
            }
        };

        let questions: Vec<QuestionDto> = questions.into_iter().map(QuestionDto::from).collect();

        Ok(CategoryQuestionsResponseDto {
            total_questions: questions.len() as i64,
            questions,
            current_category,
        })
    }
}
