use async_trait::async_trait;
use sqlx::PgPool;

use super::repository::{like_pattern, CategoryRepository, QuestionRepository};
use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

/// PostgreSQL-backed trivia store
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgStore {
    async fn list(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, type
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::StoreUnavailable)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, type
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::StoreUnavailable)
    }

    async fn find_by_type(&self, kind: &str) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, type
            FROM categories
            WHERE type = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(kind)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::StoreUnavailable)
    }
}

#[async_trait]
impl QuestionRepository for PgStore {
    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::StoreUnavailable)
    }

    async fn list_page(&self, limit: i64, offset: i64) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::StoreUnavailable)
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::StoreUnavailable)
    }

    async fn list_by_category(&self, category_id: i32) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::StoreUnavailable)
    }

    async fn insert(&self, new_question: NewQuestion) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(new_question.question)
        .bind(new_question.answer)
        .bind(new_question.category)
        .bind(new_question.difficulty)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::StoreUnavailable)?;

        tracing::info!("Question created: id={}", question.id);

        Ok(question)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::StoreUnavailable)?;

        Ok(result.rows_affected() > 0)
    }

    async fn quiz_candidates(
        &self,
        category_id: Option<i32>,
        exclude: &[i32],
    ) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE ($1::INTEGER IS NULL OR category = $1)
              AND NOT (id = ANY($2))
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .bind(exclude.to_vec())
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::StoreUnavailable)
    }
}

// Run with `DATABASE_URL=postgres://... cargo test -- --ignored`; each test
// gets a fresh database with the migrations applied.
#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    fn new_question(text: &str, category: i32) -> NewQuestion {
        NewQuestion {
            question: Some(text.to_string()),
            answer: Some("answer".to_string()),
            category: Some(category),
            difficulty: Some(1),
        }
    }

    fn ids(questions: Vec<Question>) -> Vec<i32> {
        questions.into_iter().map(|q| q.id).collect()
    }

    #[tokio::test]
    async fn test_debug_names_the_store() {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/trivia")
            .unwrap();
        let store = PgStore::new(pool);
        assert!(format!("{:?}", store).starts_with("PgStore"));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a PostgreSQL DATABASE_URL"]
    async fn test_categories_are_seeded(pool: PgPool) {
        let store = PgStore::new(pool);

        let categories = store.list().await.unwrap();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0].kind, "Science");
        assert_eq!(store.find_by_type("Sports").await.unwrap().map(|c| c.id), Some(6));
        assert!(store.find_by_id(42).await.unwrap().is_none());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a PostgreSQL DATABASE_URL"]
    async fn test_quiz_candidates_exclude_previous_questions(pool: PgPool) {
        let store = PgStore::new(pool);
        let a = store.insert(new_question("Who discovered penicillin?", 1)).await.unwrap();
        let b = store.insert(new_question("What is the heaviest organ?", 1)).await.unwrap();
        let c = store.insert(new_question("Which team won in 1930?", 6)).await.unwrap();

        let all = ids(store.quiz_candidates(None, &[]).await.unwrap());
        assert_eq!(all, vec![a.id, b.id, c.id]);

        let science = ids(store.quiz_candidates(Some(1), &[]).await.unwrap());
        assert_eq!(science, vec![a.id, b.id]);

        let remaining = ids(
            store
                .quiz_candidates(Some(1), &[a.id, c.id, 999])
                .await
                .unwrap(),
        );
        assert_eq!(remaining, vec![b.id]);

        let exhausted = store.quiz_candidates(Some(1), &[a.id, b.id]).await.unwrap();
        assert!(exhausted.is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a PostgreSQL DATABASE_URL"]
    async fn test_search_treats_wildcards_literally(pool: PgPool) {
        let store = PgStore::new(pool);
        let percent = store.insert(new_question("Is 100% of the moon lit?", 1)).await.unwrap();
        store.insert(new_question("What is the largest LAKE in Africa?", 3)).await.unwrap();

        let found = ids(store.search("100%").await.unwrap());
        assert_eq!(found, vec![percent.id]);
        assert!(store.search("_").await.unwrap().is_empty());
        assert_eq!(store.search("lake").await.unwrap().len(), 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a PostgreSQL DATABASE_URL"]
    async fn test_paging_count_and_delete(pool: PgPool) {
        let store = PgStore::new(pool);
        for n in 0..12 {
            store.insert(new_question(&format!("Question {}", n), 2)).await.unwrap();
        }

        assert_eq!(store.count().await.unwrap(), 12);
        let second = store.list_page(10, 10).await.unwrap();
        assert_eq!(second.len(), 2);
        assert_eq!(store.list_by_category(2).await.unwrap().len(), 12);

        let id = second[0].id;
        assert!(store.delete(id).await.unwrap());
        assert!(!store.delete(id).await.unwrap());
        assert_eq!(store.count().await.unwrap(), 11);
    }
}
