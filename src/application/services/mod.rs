// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            answers::AnswerCommandService, categories::CategoryCommandService,
            questions::QuestionCommandService,
        },
        ports::SlugGeneratorPort,
        queries::{
            answers::AnswerQueryService, categories::CategoryQueryService,
            questions::QuestionQueryService,
        },
    },
    domain::{
        answer::AnswerRepository, category::CategoryRepository, question::QuestionRepository,
    },
};

/// Wires the command and query services over one set of repositories.
pub struct ApplicationServices {
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub question_commands: Arc<QuestionCommandService>,
    pub question_queries: Arc<QuestionQueryService>,
    pub answer_commands: Arc<AnswerCommandService>,
    pub answer_queries: Arc<AnswerQueryService>,
}

impl ApplicationServices {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        question_repo: Arc<dyn QuestionRepository>,
        answer_repo: Arc<dyn AnswerRepository>,
        slugger: Arc<SlugGeneratorPort>,
    ) -> Self {
        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_repo),
            Arc::clone(&slugger),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(
            Arc::clone(&category_repo),
            Arc::clone(&question_repo),
        ));

        let question_commands = Arc::new(QuestionCommandService::new(Arc::clone(&question_repo)));
        let question_queries = Arc::new(QuestionQueryService::new(
            Arc::clone(&question_repo),
            Arc::clone(&category_repo),
            Arc::clone(&answer_repo),
        ));

        let answer_commands = Arc::new(AnswerCommandService::new(Arc::clone(&answer_repo)));
        let answer_queries = Arc::new(AnswerQueryService::new(
            Arc::clone(&answer_repo),
            Arc::clone(&question_repo),
        ));

        Self {
            category_commands,
            category_queries,
            question_commands,
            question_queries,
            answer_commands,
            answer_queries,
        }
    }
}
