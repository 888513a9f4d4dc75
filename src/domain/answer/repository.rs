use crate::domain::answer::entity::{Answer, NewAnswer};
use crate::domain::answer::value_objects::{AnswerId, AnswerText};
use crate::domain::errors::DomainResult;
use crate::domain::question::QuestionId;
use async_trait::async_trait;

#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// All answers, or only those of `question` when given.
    async fn list(&self, question: Option<QuestionId>) -> DomainResult<Vec<Answer>>;
    /// Fails with `NotFound` when the referenced question does not exist.
    async fn insert(&self, answer: NewAnswer) -> DomainResult<Answer>;
    async fn update_text(&self, id: AnswerId, text: AnswerText) -> DomainResult<Answer>;
    async fn delete(&self, id: AnswerId) -> DomainResult<()>;
}
