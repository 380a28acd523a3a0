mod category_dto;

pub use category_dto::{category_map, CategoriesResponseDto, CategoryMap, CategoryQuestionsResponseDto};
