//! Trivia questions: paginated listing, search, creation and deletion.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=n` | Ten questions per page, with the category index |
//! | POST | `/questions` | Search (`searchTerm`) or create a question |
//! | DELETE | `/questions/{id}` | Delete a question |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuestionService;
