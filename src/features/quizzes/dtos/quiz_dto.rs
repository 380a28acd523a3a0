use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::questions::dtos::QuestionDto;

/// Request DTO for the next quiz question
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    /// Ids already asked in this quiz
    #[serde(default)]
    pub previous_questions: Vec<i32>,

    /// Category to draw from; absent or null means all categories
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryDto>,
}

/// Category selection as sent by the quiz frontend
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    /// Display name of the category
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuizResponseDto {
    /// Next question, or null once every candidate has been asked
    pub question: Option<QuestionDto>,
}
