//! Trivia categories.
//!
//! Categories are seeded by migration and read-only over the API.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/categories` | Map of category id to display name |
//! | GET | `/categories/{id}/questions` | Questions filed under a category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
