// src/application/queries/categories.rs
use crate::{
    application::{
        dto::{CategoryDto, QuestionDto},
        error::{ApplicationError, ApplicationResult, resolve_key},
    },
    domain::{
        category::{Category, CategoryRepository, CategorySlug},
        question::QuestionRepository,
    },
};
use std::sync::Arc;

pub struct GetCategoryBySlugQuery {
    pub slug: String,
    pub include_questions: bool,
}

pub struct ListCategoryQuestionsQuery {
    pub slug: String,
}

pub struct CategoryQueryService {
    categories: Arc<dyn CategoryRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl CategoryQueryService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            categories,
            questions,
        }
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let records = self.categories.list().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn get_category_by_slug(
        &self,
        query: GetCategoryBySlugQuery,
    ) -> ApplicationResult<CategoryDto> {
        let category = self.require_category(query.slug).await?;
        let id = category.id;
        let dto = CategoryDto::from(category);

        if !query.include_questions {
            return Ok(dto);
        }

        let questions = self.questions.list(Some(id)).await?;
        Ok(dto.with_questions(questions.into_iter().map(Into::into).collect()))
    }

    /// Questions of one category; an unknown slug is not found, an empty
    /// category yields an empty list.
    pub async fn list_category_questions(
        &self,
        query: ListCategoryQuestionsQuery,
    ) -> ApplicationResult<Vec<QuestionDto>> {
        let category = self.require_category(query.slug).await?;
        let questions = self.questions.list(Some(category.id)).await?;
        Ok(questions.into_iter().map(Into::into).collect())
    }

    async fn require_category(&self, slug: String) -> ApplicationResult<Category> {
        let slug = resolve_key(CategorySlug::new(slug), "Category not found")?;
        self.categories
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Category not found"))
    }
}
