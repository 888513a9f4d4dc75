// src/application/commands/questions.rs
use crate::{
    application::{
        dto::QuestionDto,
        error::{ApplicationResult, resolve_key},
    },
    domain::{
        category::CategoryId,
        question::{NewQuestion, QuestionId, QuestionRepository, QuestionText},
    },
};
use std::sync::Arc;

pub struct CreateQuestionCommand {
    pub question: String,
    pub category_id: i64,
}

pub struct UpdateQuestionCommand {
    pub id: i64,
    pub question: String,
}

pub struct DeleteQuestionCommand {
    pub id: i64,
}

pub struct QuestionCommandService {
    repo: Arc<dyn QuestionRepository>,
}

impl QuestionCommandService {
    pub fn new(repo: Arc<dyn QuestionRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_question(
        &self,
        command: CreateQuestionCommand,
    ) -> ApplicationResult<QuestionDto> {
        let question = QuestionText::new(command.question)?;
        let category_id =
            resolve_key(CategoryId::new(command.category_id), "Category not found")?;
        let new_question = NewQuestion {
            question,
            category_id,
        };

        let created = self.repo.insert(new_question).await?;
        tracing::info!(id = %created.id, category_id = %created.category_id, "question created");
        Ok(created.into())
    }

    pub async fn update_question(
        &self,
        command: UpdateQuestionCommand,
    ) -> ApplicationResult<QuestionDto> {
        let text = QuestionText::new(command.question)?;
        let id = resolve_key(QuestionId::new(command.id), "Question not found")?;

        let updated = self.repo.update_text(id, text).await?;
        Ok(updated.into())
    }

    pub async fn delete_question(&self, command: DeleteQuestionCommand) -> ApplicationResult<()> {
        let id = resolve_key(QuestionId::new(command.id), "Question not found")?;
        self.repo.delete(id).await?;
        tracing::info!(%id, "question deleted");
        Ok(())
    }
}
