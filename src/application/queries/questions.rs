// src/application/queries/questions.rs
use crate::{
    application::{
        dto::{CategorySummaryDto, QuestionDto},
        error::{ApplicationError, ApplicationResult, resolve_key},
    },
    domain::{
        answer::AnswerRepository,
        category::{CategoryId, CategoryRepository},
        question::{QuestionId, QuestionRepository},
    },
};
use std::{collections::HashMap, sync::Arc};

pub struct ListQuestionsQuery {
    pub include_category: bool,
}

pub struct GetQuestionQuery {
    pub id: i64,
    pub include_category: bool,
    pub include_answers: bool,
}

pub struct QuestionQueryService {
    questions: Arc<dyn QuestionRepository>,
    categories: Arc<dyn CategoryRepository>,
    answers: Arc<dyn AnswerRepository>,
}

impl QuestionQueryService {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
        answers: Arc<dyn AnswerRepository>,
    ) -> Self {
        Self {
            questions,
            categories,
            answers,
        }
    }

    pub async fn list_questions(
        &self,
        query: ListQuestionsQuery,
    ) -> ApplicationResult<Vec<QuestionDto>> {
        let records = self.questions.list(None).await?;
        let mut items: Vec<QuestionDto> = records.into_iter().map(Into::into).collect();

        if query.include_category && !items.is_empty() {
            // One listing instead of a lookup per question.
            let by_id: HashMap<i64, CategorySummaryDto> = self
                .categories
                .list()
                .await?
                .into_iter()
                .map(|category| (i64::from(category.id), category.into()))
                .collect();

            for item in &mut items {
                item.category = by_id.get(&item.category_id).cloned();
            }
        }

        Ok(items)
    }

    pub async fn get_question(&self, query: GetQuestionQuery) -> ApplicationResult<QuestionDto> {
        let id = resolve_key(QuestionId::new(query.id), "Question not found")?;
        let question = self
            .questions
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Question not found"))?;

        let category_id: CategoryId = question.category_id;
        let mut dto = QuestionDto::from(question);

        if query.include_category {
            dto.category = self
                .categories
                .find_by_id(category_id)
                .await?
                .map(Into::into);
        }

        if query.include_answers {
            let answers = self.answers.list(Some(id)).await?;
            dto.answers = Some(answers.into_iter().map(Into::into).collect());
        }

        Ok(dto)
    }
}
