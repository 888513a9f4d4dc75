// src/application/commands/answers.rs
use crate::{
    application::{
        dto::AnswerDto,
        error::{ApplicationResult, resolve_key},
    },
    domain::{
        answer::{AnswerId, AnswerRepository, AnswerText, NewAnswer},
        question::QuestionId,
    },
};
use std::sync::Arc;

pub struct CreateAnswerCommand {
    pub question_id: i64,
    pub text: String,
}

pub struct UpdateAnswerCommand {
    pub id: i64,
    pub text: String,
}

pub struct DeleteAnswerCommand {
    pub id: i64,
}

pub struct AnswerCommandService {
    repo: Arc<dyn AnswerRepository>,
}

impl AnswerCommandService {
    pub fn new(repo: Arc<dyn AnswerRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_answer(&self, command: CreateAnswerCommand) -> ApplicationResult<AnswerDto> {
        let text = AnswerText::new(command.text)?;
        let question_id =
            resolve_key(QuestionId::new(command.question_id), "Question not found")?;
        let new_answer = NewAnswer { text, question_id };

        let created = self.repo.insert(new_answer).await?;
        tracing::info!(id = %created.id, question_id = %created.question_id, "answer created");
        Ok(created.into())
    }

    pub async fn update_answer(&self, command: UpdateAnswerCommand) -> ApplicationResult<AnswerDto> {
        let text = AnswerText::new(command.text)?;
        let id = resolve_key(AnswerId::new(command.id), "Answer not found")?;

        let updated = self.repo.update_text(id, text).await?;
        Ok(updated.into())
    }

    pub async fn delete_answer(&self, command: DeleteAnswerCommand) -> ApplicationResult<()> {
        let id = resolve_key(AnswerId::new(command.id), "Answer not found")?;
        self.repo.delete(id).await?;
        tracing::info!(%id, "answer deleted");
        Ok(())
    }
}
