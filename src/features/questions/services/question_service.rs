use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::category_map;
use crate::features::questions::dtos::{
    CreateQuestionDto, QuestionDto, QuestionPageResponseDto, SearchQuestionsDto,
    SearchQuestionsResponseDto,
};
use crate::modules::store::{CategoryRepository, QuestionRepository};
use crate::shared::types::Page;

/// Service for question listing, search, creation and deletion
pub struct QuestionService {
    categories: Arc<dyn CategoryRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl QuestionService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            categories,
            questions,
        }
    }

    /// One page of questions ordered by id, with the total count and category index
    pub async fn list_page(
        &self,
        page: Page,
        current_category: Option<&str>,
    ) -> Result<QuestionPageResponseDto> {
        let questions = match page.offset() {
            Some(offset) => self.questions.list_page(page.limit(), offset).await?,
            None => Vec::new(),
        };
        let total_questions = self.questions.count().await?;
        let categories = category_map(self.categories.list().await?);
        let current_category = self.resolve_current_category(current_category).await?;

        Ok(QuestionPageResponseDto {
            questions: questions.into_iter().map(QuestionDto::from).collect(),
            total_questions,
            categories,
            current_category,
        })
    }

    /// Resolve the category a client says it is browsing.
    ///
    /// Absent stays absent; an id that does not name a category becomes 0.
    pub async fn resolve_current_category(&self, raw: Option<&str>) -> Result<Option<i32>> {
        let Some(raw) = raw else {
            return Ok(None);
        };

        let Ok(id) = raw.trim().parse::<i32>() else {
            return Ok(Some(0));
        };

        let category = self.categories.find_by_id(id).await?;
        Ok(Some(category.map(|c| c.id).unwrap_or(0)))
    }

    /// Case-insensitive substring search on question text
    pub async fn search(&self, dto: SearchQuestionsDto) -> Result<SearchQuestionsResponseDto> {
        let questions = self.questions.search(&dto.search_term).await?;

        tracing::debug!(
            "Search {:?} matched {} questions",
            dto.search_term,
            questions.len()
        );

        Ok(SearchQuestionsResponseDto {
            total_questions: questions.len() as i64,
            questions: questions.into_iter().map(QuestionDto::from).collect(),
            current_category: None,
        })
    }

    /// Insert a question as submitted; fields are not validated
    pub async fn create(&self, dto: CreateQuestionDto) -> Result<QuestionDto> {
        let question = self.questions.insert(dto.into()).await?;
        Ok(question.into())
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        if !self.questions.delete(id).await? {
            return Err(AppError::NotFound(format!(
                "Question with id {} not found",
                id
            )));
        }

        tracing::info!("Question deleted: id={}", id);
        Ok(())
    }
}
