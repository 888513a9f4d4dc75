use crate::application::dto::QuestionSummaryDto;
use crate::domain::answer::Answer;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerDto {
    pub id: i64,
    pub text: String,
    pub question_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionSummaryDto>,
}

impl From<Answer> for AnswerDto {
    fn from(answer: Answer) -> Self {
        Self {
            id: answer.id.into(),
            text: answer.text.into_inner(),
            question_id: answer.question_id.into(),
            question: None,
        }
    }
}
