use sqlx::FromRow;

/// Database model for question
///
/// Every column except `id` is nullable. `category` is a plain integer and
/// is not checked against the categories table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

/// Column values for a question that has not been inserted yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}
