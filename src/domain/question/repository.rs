use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use crate::domain::question::entity::{NewQuestion, Question};
use crate::domain::question::value_objects::{QuestionId, QuestionText};
use async_trait::async_trait;

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions, or only those of `category` when given.
    async fn list(&self, category: Option<CategoryId>) -> DomainResult<Vec<Question>>;
    async fn find_by_id(&self, id: QuestionId) -> DomainResult<Option<Question>>;
    /// Fails with `NotFound` when the referenced category does not exist.
    async fn insert(&self, question: NewQuestion) -> DomainResult<Question>;
    async fn update_text(&self, id: QuestionId, question: QuestionText) -> DomainResult<Question>;
    /// Fails with `Conflict` while answers still reference the question.
    async fn delete(&self, id: QuestionId) -> DomainResult<()>;
}
