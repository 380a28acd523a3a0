mod question_dto;

pub use question_dto::{
    CreateQuestionDto, ListQuestionsQuery, QuestionDto, QuestionPageResponseDto, QuestionsRequest,
    SearchQuestionsDto, SearchQuestionsResponseDto,
};
