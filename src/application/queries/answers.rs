// src/application/queries/answers.rs
use crate::{
    application::{
        dto::{AnswerDto, QuestionSummaryDto},
        error::{ApplicationError, ApplicationResult, resolve_key},
    },
    domain::{
        answer::AnswerRepository,
        question::{QuestionId, QuestionRepository},
    },
};
use std::{collections::HashMap, sync::Arc};

pub struct ListAnswersQuery {
    pub include_question: bool,
}

pub struct ListQuestionAnswersQuery {
    pub question_id: i64,
}

pub struct AnswerQueryService {
    answers: Arc<dyn AnswerRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl AnswerQueryService {
    pub fn new(answers: Arc<dyn AnswerRepository>, questions: Arc<dyn QuestionRepository>) -> Self {
        Self { answers, questions }
    }

    pub async fn list_answers(&self, query: ListAnswersQuery) -> ApplicationResult<Vec<AnswerDto>> {
        let records = self.answers.list(None).await?;
        let mut items: Vec<AnswerDto> = records.into_iter().map(Into::into).collect();

        if query.include_question && !items.is_empty() {
            let by_id: HashMap<i64, QuestionSummaryDto> = self
                .questions
                .list(None)
                .await?
                .into_iter()
                .map(|question| (i64::from(question.id), question.into()))
                .collect();

            for item in &mut items {
                item.question = by_id.get(&item.question_id).cloned();
            }
        }

        Ok(items)
    }

    /// Answers of one question. A question without answers is reported as
    /// not found rather than as an empty list; existing clients depend on it.
    pub async fn list_question_answers(
        &self,
        query: ListQuestionAnswersQuery,
    ) -> ApplicationResult<Vec<AnswerDto>> {
        let id = resolve_key(QuestionId::new(query.question_id), "Question not found")?;
        if self.questions.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("Question not found"));
        }

        let answers = self.answers.list(Some(id)).await?;
        if answers.is_empty() {
            return Err(ApplicationError::not_found(
                "No answers found for this question",
            ));
        }

        Ok(answers.into_iter().map(Into::into).collect())
    }
}
