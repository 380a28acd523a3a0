use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::{ApiResult, ResultExt};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::questions::dtos::{
    CreateQuestionDto, ListQuestionsQuery, QuestionPageResponseDto, QuestionsRequest,
    SearchQuestionsResponseDto,
};
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ErrorResponse, Page, ResourceId, SuccessResponse};

/// List questions, ten per page
#[utoipa::path(
    get,
    path = "/questions",
    params(ListQuestionsQuery),
    responses(
        (status = 200, description = "Page of questions", body = QuestionPageResponseDto),
        (status = 404, description = "Questions could not be loaded", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    AppQuery(query): AppQuery<ListQuestionsQuery>,
) -> ApiResult<Json<QuestionPageResponseDto>> {
    let page = Page::from_param(query.page.as_deref());
    let result = service
        .list_page(page, query.current_category.as_deref())
        .await
        .or_not_found()?;
    Ok(Json(result))
}

/// Delete a question
#[utoipa::path(
    delete,
    path = "/questions/{question_id}",
    params(
        ("question_id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted", body = SuccessResponse),
        (status = 404, description = "Question not found", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(question_id): AppPath<ResourceId>,
) -> ApiResult<Json<SuccessResponse>> {
    service.delete(question_id.get()).await.or_not_found()?;
    Ok(Json(SuccessResponse::ok()))
}

/// Create a question, or search questions
///
/// A body with a non-null `searchTerm` runs a case-insensitive substring
/// search over question text. Any other object is stored as a new question.
#[utoipa::path(
    post,
    path = "/questions",
    request_body(
        content = CreateQuestionDto,
        description = "New question, or `{\"searchTerm\": \"...\"}` to search"
    ),
    responses(
        (status = 200, description = "Question created (`SuccessResponse`) or search result", body = SearchQuestionsResponseDto),
        (status = 422, description = "Malformed body or store failure", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn create_or_search_questions(
    State(service): State<Arc<QuestionService>>,
    AppJson(body): AppJson<serde_json::Value>,
) -> ApiResult<Response> {
    match QuestionsRequest::from_value(body).or_unprocessable()? {
        QuestionsRequest::Search(dto) => {
            let result = service.search(dto).await.or_unprocessable()?;
            Ok(Json(result).into_response())
        }
        QuestionsRequest::Create(dto) => {
            service.create(dto).await.or_unprocessable()?;
            Ok(Json(SuccessResponse::ok()).into_response())
        }
    }
}
