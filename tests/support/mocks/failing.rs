// tests/support/mocks/failing.rs
use async_trait::async_trait;
use trivia_api::domain::answer::{Answer, AnswerId, AnswerRepository, AnswerText, NewAnswer};
use trivia_api::domain::category::{
    Category, CategoryId, CategoryName, CategoryRepository, CategorySlug, NewCategory,
};
use trivia_api::domain::errors::{DomainError, DomainResult};
use trivia_api::domain::question::{
    NewQuestion, Question, QuestionId, QuestionRepository, QuestionText,
};

pub const FAILURE_DETAIL: &str = "connection refused (os error 111)";

/// Every call fails the way an unreachable database would.
#[derive(Clone, Default)]
pub struct FailingStore;

fn fail<T>() -> DomainResult<T> {
    Err(DomainError::Persistence(FAILURE_DETAIL.into()))
}

#[async_trait]
impl CategoryRepository for FailingStore {
    async fn list(&self) -> DomainResult<Vec<Category>> {
        fail()
    }

    async fn find_by_id(&self, _id: CategoryId) -> DomainResult<Option<Category>> {
        fail()
    }

    async fn find_by_slug(&self, _slug: &CategorySlug) -> DomainResult<Option<Category>> {
        fail()
    }

    async fn insert(&self, _category: NewCategory) -> DomainResult<Category> {
        fail()
    }

    async fn rename(&self, _slug: &CategorySlug, _name: CategoryName) -> DomainResult<Category> {
        fail()
    }

    async fn delete(&self, _slug: &CategorySlug) -> DomainResult<()> {
        fail()
    }
}

#[async_trait]
impl QuestionRepository for FailingStore {
    async fn list(&self, _category: Option<CategoryId>) -> DomainResult<Vec<Question>> {
        fail()
    }

    async fn find_by_id(&self, _id: QuestionId) -> DomainResult<Option<Question>> {
        fail()
    }

    async fn insert(&self, _question: NewQuestion) -> DomainResult<Question> {
        fail()
    }

    async fn update_text(&self, _id: QuestionId, _question: QuestionText) -> DomainResult<Question> {
        fail()
    }

    async fn delete(&self, _id: QuestionId) -> DomainResult<()> {
        fail()
    }
}

#[async_trait]
impl AnswerRepository for FailingStore {
    async fn list(&self, _question: Option<QuestionId>) -> DomainResult<Vec<Answer>> {
        fail()
    }

    async fn insert(&self, _answer: NewAnswer) -> DomainResult<Answer> {
        fail()
    }

    async fn update_text(&self, _id: AnswerId, _text: AnswerText) -> DomainResult<Answer> {
        fail()
    }

    async fn delete(&self, _id: AnswerId) -> DomainResult<()> {
        fail()
    }
}
