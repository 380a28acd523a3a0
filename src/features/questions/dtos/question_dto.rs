use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::error::AppError;
use crate::features::questions::models::{NewQuestion, Question};

/// A question as the frontend sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: i32,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i32>,
    pub category: Option<i32>,
}

impl From<Question> for QuestionDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            difficulty: q.difficulty,
            category: q.category,
        }
    }
}

/// Query params for the paginated question list
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuestionsQuery {
    /// Page number (1-indexed, default: 1)
    pub page: Option<String>,
    /// Category the client is currently browsing, echoed back once resolved
    pub current_category: Option<String>,
}

/// One page of questions plus the category index
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPageResponseDto {
    pub questions: Vec<QuestionDto>,
    pub total_questions: i64,
    pub categories: BTreeMap<String, String>,
    pub current_category: Option<i32>,
}

/// Search request body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuestionsDto {
    pub search_term: String,
}

/// Search result
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuestionsResponseDto {
    pub questions: Vec<QuestionDto>,
    pub total_questions: i64,
    pub current_category: Option<i32>,
}

/// New question request body. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateQuestionDto {
    #[serde(default)]
    pub question: Option<String>,

    #[serde(default)]
    pub answer: Option<String>,

    /// Integer, or a string holding one
    #[serde(default, deserialize_with = "lenient_i32")]
    pub difficulty: Option<i32>,

    /// Category id, or a string holding one. Not checked against the categories.
    #[serde(default, deserialize_with = "lenient_i32")]
    pub category: Option<i32>,
}

impl From<CreateQuestionDto> for NewQuestion {
    fn from(dto: CreateQuestionDto) -> Self {
        Self {
            question: dto.question,
            answer: dto.answer,
            category: dto.category,
            difficulty: dto.difficulty,
        }
    }
}

/// Accepts `5`, `"5"` or null; form posts send ids as strings.
fn lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i32),
        Str(String),
    }

    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Int(n)) => Ok(Some(n)),
        Some(IntOrString::Str(s)) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected an integer, got {:?}", s))),
    }
}

/// `POST /questions` carries either a search or a new question
#[derive(Debug, Clone)]
pub enum QuestionsRequest {
    Search(SearchQuestionsDto),
    Create(CreateQuestionDto),
}

impl QuestionsRequest {
    /// A non-null `searchTerm` selects search; anything else is a new question.
    pub fn from_value(value: serde_json::Value) -> Result<Self, AppError> {
        let object = value
            .as_object()
            .ok_or_else(|| AppError::Validation("Request body must be a JSON object".to_string()))?;

        let search_term = match object.get("searchTerm") {
            Some(term) if !term.is_null() => Some(
                term.as_str()
                    .ok_or_else(|| AppError::Validation("searchTerm must be a string".to_string()))?
                    .to_string(),
            ),
            _ => None,
        };

        match search_term {
            Some(search_term) => Ok(Self::Search(SearchQuestionsDto { search_term })),
            None => serde_json::from_value::<CreateQuestionDto>(value)
                .map(Self::Create)
                .map_err(|e| AppError::Validation(format!("Invalid question payload: {}", e))),
        }
    }
}
