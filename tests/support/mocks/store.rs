// tests/support/mocks/store.rs
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use trivia_api::domain::answer::{Answer, AnswerId, AnswerRepository, AnswerText, NewAnswer};
use trivia_api::domain::category::{
    Category, CategoryId, CategoryName, CategoryRepository, CategorySlug, NewCategory,
};
use trivia_api::domain::errors::{DomainError, DomainResult};
use trivia_api::domain::question::{
    NewQuestion, Question, QuestionId, QuestionRepository, QuestionText,
};

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    answers: Vec<Answer>,
    category_seq: i64,
    question_seq: i64,
    answer_seq: i64,
}

/// Shared in-memory tables that honour the same unique and foreign key rules
/// as the Postgres schema.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category_count(&self) -> usize {
        self.tables.lock().unwrap().categories.len()
    }

    pub fn question_count(&self) -> usize {
        self.tables.lock().unwrap().questions.len()
    }

    pub fn answer_count(&self) -> usize {
        self.tables.lock().unwrap().answers.len()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list(&self) -> DomainResult<Vec<Category>> {
        Ok(self.tables.lock().unwrap().categories.clone())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.categories.iter().find(|c| &c.slug == slug).cloned())
    }

    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut tables = self.tables.lock().unwrap();
        if tables.categories.iter().any(|c| c.slug == category.slug) {
            return Err(DomainError::conflict("Category already exists"));
        }

        tables.category_seq += 1;
        let created = Category {
            id: CategoryId::new(tables.category_seq)?,
            name: category.name,
            slug: category.slug,
        };
        tables.categories.push(created.clone());
        Ok(created)
    }

    async fn rename(&self, slug: &CategorySlug, name: CategoryName) -> DomainResult<Category> {
        let mut tables = self.tables.lock().unwrap();
        let category = tables
            .categories
            .iter_mut()
            .find(|c| &c.slug == slug)
            .ok_or_else(|| DomainError::not_found("Category not found"))?;
        category.name = name;
        Ok(category.clone())
    }

    async fn delete(&self, slug: &CategorySlug) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let position = tables
            .categories
            .iter()
            .position(|c| &c.slug == slug)
            .ok_or_else(|| DomainError::not_found("Category not found"))?;

        let id = tables.categories[position].id;
        if tables.questions.iter().any(|q| q.category_id == id) {
            return Err(DomainError::conflict("Category still has questions"));
        }

        tables.categories.remove(position);
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryStore {
    async fn list(&self, category: Option<CategoryId>) -> DomainResult<Vec<Question>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .questions
            .iter()
            .filter(|q| category.is_none_or(|id| q.category_id == id))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: QuestionId) -> DomainResult<Option<Question>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn insert(&self, question: NewQuestion) -> DomainResult<Question> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.categories.iter().any(|c| c.id == question.category_id) {
            return Err(DomainError::not_found("Category not found"));
        }

        tables.question_seq += 1;
        let created = Question {
            id: QuestionId::new(tables.question_seq)?,
            question: question.question,
            category_id: question.category_id,
        };
        tables.questions.push(created.clone());
        Ok(created)
    }

    async fn update_text(&self, id: QuestionId, question: QuestionText) -> DomainResult<Question> {
        let mut tables = self.tables.lock().unwrap();
        let existing = tables
            .questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| DomainError::not_found("Question not found"))?;
        existing.question = question;
        Ok(existing.clone())
    }

    async fn delete(&self, id: QuestionId) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let position = tables
            .questions
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(|| DomainError::not_found("Question not found"))?;

        if tables.answers.iter().any(|a| a.question_id == id) {
            return Err(DomainError::conflict("Question still has answers"));
        }

        tables.questions.remove(position);
        Ok(())
    }
}

#[async_trait]
impl AnswerRepository for InMemoryStore {
    async fn list(&self, question: Option<QuestionId>) -> DomainResult<Vec<Answer>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .answers
            .iter()
            .filter(|a| question.is_none_or(|id| a.question_id == id))
            .cloned()
            .collect())
    }

    async fn insert(&self, answer: NewAnswer) -> DomainResult<Answer> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.questions.iter().any(|q| q.id == answer.question_id) {
            return Err(DomainError::not_found("Question not found"));
        }

        tables.answer_seq += 1;
        let created = Answer {
            id: AnswerId::new(tables.answer_seq)?,
            text: answer.text,
            question_id: answer.question_id,
        };
        tables.answers.push(created.clone());
        Ok(created)
    }

    async fn update_text(&self, id: AnswerId, text: AnswerText) -> DomainResult<Answer> {
        let mut tables = self.tables.lock().unwrap();
        let existing = tables
            .answers
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| DomainError::not_found("Answer not found"))?;
        existing.text = text;
        Ok(existing.clone())
    }

    async fn delete(&self, id: AnswerId) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let position = tables
            .answers
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| DomainError::not_found("Answer not found"))?;
        tables.answers.remove(position);
        Ok(())
    }
}
