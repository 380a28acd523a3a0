pub mod question_handler;

pub use question_handler::{
    __path_create_or_search_questions, __path_delete_question, __path_list_questions,
    create_or_search_questions, delete_question, list_questions,
};
