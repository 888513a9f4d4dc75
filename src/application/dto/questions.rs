use crate::application::dto::{AnswerDto, CategorySummaryDto};
use crate::domain::question::Question;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDto {
    pub id: i64,
    pub question: String,
    pub category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategorySummaryDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<AnswerDto>>,
}

impl From<Question> for QuestionDto {
    fn from(question: Question) -> Self {
        Self {
            id: question.id.into(),
            question: question.question.into_inner(),
            category_id: question.category_id.into(),
            category: None,
            answers: None,
        }
    }
}

/// Question attached to an answer listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSummaryDto {
    pub id: i64,
    pub question: String,
    pub category_id: i64,
}

impl From<Question> for QuestionSummaryDto {
    fn from(question: Question) -> Self {
        Self {
            id: question.id.into(),
            question: question.question.into_inner(),
            category_id: question.category_id.into(),
        }
    }
}
