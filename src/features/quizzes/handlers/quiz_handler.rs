use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{ApiResult, ResultExt};
use crate::core::extractor::AppJson;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::ErrorResponse;

/// Draw the next quiz question
///
/// Returns a random question from the selected category that is not in
/// `previous_questions`, or `question: null` when none is left.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Next question, possibly null", body = QuizResponseDto),
        (status = 422, description = "Malformed body or store failure", body = ErrorResponse)
    ),
    tag = "quizzes"
)]
pub async fn next_quiz_question(
    State(service): State<Arc<QuizService>>,
    AppJson(dto): AppJson<QuizRequestDto>,
) -> ApiResult<Json<QuizResponseDto>> {
    let result = service.next_question(dto).await.or_unprocessable()?;
    Ok(Json(result))
}
