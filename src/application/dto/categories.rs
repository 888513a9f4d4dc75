use crate::application::dto::QuestionDto;
use crate::domain::category::Category;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    /// Present only when questions were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<QuestionDto>>,
}

impl CategoryDto {
    pub fn with_questions(mut self, questions: Vec<QuestionDto>) -> Self {
        self.questions = Some(questions);
        self
    }
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
            questions: None,
        }
    }
}

/// Category attached to a question listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummaryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<Category> for CategorySummaryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
        }
    }
}
