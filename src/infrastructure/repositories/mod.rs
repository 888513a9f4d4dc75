// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_answer;
mod postgres_category;
mod postgres_question;

pub use postgres_answer::PostgresAnswerRepository;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_question::PostgresQuestionRepository;

pub(crate) use error::{map_sqlx, map_sqlx_on_delete};
