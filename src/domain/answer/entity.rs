// src/domain/answer/entity.rs
use crate::domain::answer::value_objects::{AnswerId, AnswerText};
use crate::domain::question::QuestionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub id: AnswerId,
    pub text: AnswerText,
    pub question_id: QuestionId,
}

#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub text: AnswerText,
    pub question_id: QuestionId,
}
