/// Number of questions in one page of the question list
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// Page returned when the client does not ask for one
pub const DEFAULT_PAGE: i64 = 1;
