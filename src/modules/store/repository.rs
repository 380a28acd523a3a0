use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

/// Read access to the seeded categories.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by id
    async fn list(&self) -> Result<Vec<Category>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>>;

    /// Exact match on the display name
    async fn find_by_type(&self, kind: &str) -> Result<Option<Category>>;
}

/// Questions storage. Listing methods return rows ordered by id.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn count(&self) -> Result<i64>;

    async fn list_page(&self, limit: i64, offset: i64) -> Result<Vec<Question>>;

    /// Case-insensitive substring match on the question text
    async fn search(&self, term: &str) -> Result<Vec<Question>>;

    async fn list_by_category(&self, category_id: i32) -> Result<Vec<Question>>;

    async fn insert(&self, new_question: NewQuestion) -> Result<Question>;

    /// Returns false when no row had that id
    async fn delete(&self, id: i32) -> Result<bool>;

    /// Questions a quiz may ask next: optionally restricted to one category,
    /// never one whose id is in `exclude`.
    async fn quiz_candidates(
        &self,
        category_id: Option<i32>,
        exclude: &[i32],
    ) -> Result<Vec<Question>>;
}

/// Build an `ILIKE ... ESCAPE '\'` pattern that matches `term` literally
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
