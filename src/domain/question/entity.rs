// src/domain/question/entity.rs
use crate::domain::category::CategoryId;
use crate::domain::question::value_objects::{QuestionId, QuestionText};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub question: QuestionText,
    pub category_id: CategoryId,
}

#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: QuestionText,
    pub category_id: CategoryId,
}
