use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use tokio::sync::RwLock;

use crate::core::app::{self, AppServices};
use crate::core::config::AppConfig;
use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};
use crate::modules::store::{CategoryRepository, QuestionRepository};

const SEED_CATEGORIES: [(i32, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

// (question, answer, category, difficulty)
const SEED_QUESTIONS: [(&str, &str, i32, i32); 14] = [
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
    ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
    ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
];

/// In-memory store with the same ordering and id rules as the PostgreSQL one
pub struct InMemoryStore {
    categories: RwLock<Vec<Category>>,
    questions: RwLock<Vec<Question>>,
    next_id: AtomicI32,
}

impl InMemoryStore {
    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            categories: RwLock::new(Vec::new()),
            questions: RwLock::new(Vec::new()),
            next_id: AtomicI32::new(1),
        })
    }

    /// Six categories and fourteen questions with ids 1..=14
    pub fn seeded() -> Arc<Self> {
        let categories = SEED_CATEGORIES
            .iter()
            .map(|&(id, kind)| Category {
                id,
                kind: kind.to_string(),
            })
            .collect();

        let questions: Vec<Question> = SEED_QUESTIONS
            .iter()
            .zip(1..)
            .map(|(&(question, answer, category, difficulty), id)| Question {
                id,
                question: Some(question.to_string()),
                answer: Some(answer.to_string()),
                category: Some(category),
                difficulty: Some(difficulty),
            })
            .collect();

        let next_id = questions.len() as i32 + 1;

        Arc::new(Self {
            categories: RwLock::new(categories),
            questions: RwLock::new(questions),
            next_id: AtomicI32::new(next_id),
        })
    }

    pub async fn question_count(&self) -> usize {
        self.questions.read().await.len()
    }

    pub async fn contains_question(&self, id: i32) -> bool {
        self.questions.read().await.iter().any(|q| q.id == id)
    }

    pub async fn questions_snapshot(&self) -> Vec<Question> {
        self.questions.read().await.clone()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Category>> {
        let mut categories = self.categories.read().await.clone();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>> {
        Ok(self
            .categories
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_by_type(&self, kind: &str) -> Result<Option<Category>> {
        Ok(self
            .categories
            .read()
            .await
            .iter()
            .find(|c| c.kind == kind)
            .cloned())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryStore {
    async fn count(&self) -> Result<i64> {
        Ok(self.questions.read().await.len() as i64)
    }

    async fn list_page(&self, limit: i64, offset: i64) -> Result<Vec<Question>> {
        Ok(self
            .questions
            .read()
            .await
            .iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>> {
        let needle = term.to_lowercase();
        Ok(self
            .questions
            .read()
            .await
            .iter()
            .filter(|q| {
                q.question
                    .as_deref()
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }

    async fn list_by_category(&self, category_id: i32) -> Result<Vec<Question>> {
        Ok(self
            .questions
            .read()
            .await
            .iter()
            .filter(|q| q.category == Some(category_id))
            .cloned()
            .collect())
    }

    async fn insert(&self, new_question: NewQuestion) -> Result<Question> {
        let question = Question {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            question: new_question.question,
            answer: new_question.answer,
            category: new_question.category,
            difficulty: new_question.difficulty,
        };
        self.questions.write().await.push(question.clone());
        Ok(question)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let mut questions = self.questions.write().await;
        let before = questions.len();
        questions.retain(|q| q.id != id);
        Ok(questions.len() != before)
    }

    async fn quiz_candidates(
        &self,
        category_id: Option<i32>,
        exclude: &[i32],
    ) -> Result<Vec<Question>> {
        Ok(self
            .questions
            .read()
            .await
            .iter()
            .filter(|q| category_id.is_none() || q.category == category_id)
            .filter(|q| !exclude.contains(&q.id))
            .cloned()
            .collect())
    }
}

/// Store whose every call fails as if the database were down
pub struct FailingStore;

fn unavailable<T>() -> Result<T> {
    Err(AppError::StoreUnavailable(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl CategoryRepository for FailingStore {
    async fn list(&self) -> Result<Vec<Category>> {
        unavailable()
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<Category>> {
        unavailable()
    }

    async fn find_by_type(&self, _kind: &str) -> Result<Option<Category>> {
        unavailable()
    }
}

#[async_trait]
impl QuestionRepository for FailingStore {
    async fn count(&self) -> Result<i64> {
        unavailable()
    }

    async fn list_page(&self, _limit: i64, _offset: i64) -> Result<Vec<Question>> {
        unavailable()
    }

    async fn search(&self, _term: &str) -> Result<Vec<Question>> {
        unavailable()
    }

    async fn list_by_category(&self, _category_id: i32) -> Result<Vec<Question>> {
        unavailable()
    }

    async fn insert(&self, _new_question: NewQuestion) -> Result<Question> {
        unavailable()
    }

    async fn delete(&self, _id: i32) -> Result<bool> {
        unavailable()
    }

    async fn quiz_candidates(
        &self,
        _category_id: Option<i32>,
        _exclude: &[i32],
    ) -> Result<Vec<Question>> {
        unavailable()
    }
}

/// Full application router over `store`, with default app config
pub fn test_server<S>(store: Arc<S>) -> TestServer
where
    S: CategoryRepository + QuestionRepository + 'static,
{
    let services = AppServices::new(store.clone(), store);
    let router = app::with_layers(app::routes(services), &AppConfig::default());
    TestServer::new(router).expect("failed to start test server")
}
