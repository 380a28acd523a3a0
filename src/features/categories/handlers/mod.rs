pub mod category_handler;

pub use category_handler::{
    __path_list_categories, __path_list_category_questions, list_categories,
    list_category_questions,
};
