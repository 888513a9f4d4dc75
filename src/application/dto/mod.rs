pub mod answers;
pub mod categories;
pub mod questions;

pub use answers::AnswerDto;
pub use categories::{CategoryDto, CategorySummaryDto};
pub use questions::{QuestionDto, QuestionSummaryDto};
