// src/domain/answer/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Answer, NewAnswer};
pub use repository::AnswerRepository;
pub use value_objects::{AnswerId, AnswerText};
