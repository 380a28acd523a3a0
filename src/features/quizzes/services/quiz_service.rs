use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::core::error::Result;
use crate::features::questions::dtos::QuestionDto;
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::modules::store::{CategoryRepository, QuestionRepository};

/// Service that draws quiz questions
pub struct QuizService {
    categories: Arc<dyn CategoryRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl QuizService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            categories,
            questions,
        }
    }

    /// Pick a random question not yet asked.
    ///
    /// A category name that matches nothing (the frontend sends `"click"`
    /// for "All") leaves the draw unrestricted.
    pub async fn next_question(&self, dto: QuizRequestDto) -> Result<QuizResponseDto> {
        let category_id = match dto.quiz_category {
            Some(ref selected) => self
                .categories
                .find_by_type(&selected.kind)
                .await?
                .map(|c| c.id),
            None => None,
        };

        let candidates = self
            .questions
            .quiz_candidates(category_id, &dto.previous_questions)
            .await?;

        tracing::debug!(
            category_id = ?category_id,
            asked = dto.previous_questions.len(),
            candidates = candidates.len(),
            "Drawing quiz question"
        );

        let question = candidates
            .choose(&mut rand::thread_rng())
            .cloned()
            .map(QuestionDto::from);

        Ok(QuizResponseDto { question })
    }
}
