//! Trivia store
//!
//! Feature services depend on the repository traits only. The PostgreSQL
//! implementation is used by the server; tests plug in an in-memory one
//! (see `shared::test_helpers`).

mod postgres;
mod repository;

pub use postgres::PgStore;
pub use repository::{CategoryRepository, QuestionRepository};
