// src/application/commands/categories.rs
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationResult, resolve_key},
        ports::util::SlugGenerator,
    },
    domain::category::{CategoryName, CategoryRepository, CategorySlug, NewCategory},
};
use std::sync::Arc;

pub struct CreateCategoryCommand {
    pub name: String,
}

pub struct RenameCategoryCommand {
    pub slug: String,
    pub name: String,
}

pub struct DeleteCategoryCommand {
    pub slug: String,
}

pub struct CategoryCommandService {
    repo: Arc<dyn CategoryRepository>,
    slugger: Arc<dyn SlugGenerator>,
}

impl CategoryCommandService {
    pub fn new(repo: Arc<dyn CategoryRepository>, slugger: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, slugger }
    }

    /// Creates a category whose slug is derived from its name. A taken slug
    /// surfaces as a conflict from the repository.
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let slug = CategorySlug::new(self.slugger.slugify(name.as_str()))?;

        let created = self.repo.insert(NewCategory { name, slug }).await?;
        tracing::info!(id = %created.id, slug = %created.slug, "category created");
        Ok(created.into())
    }

    pub async fn rename_category(
        &self,
        command: RenameCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let slug = resolve_key(CategorySlug::new(command.slug), "Category not found")?;

        let updated = self.repo.rename(&slug, name).await?;
        Ok(updated.into())
    }

    pub async fn delete_category(&self, command: DeleteCategoryCommand) -> ApplicationResult<()> {
        let slug = resolve_key(CategorySlug::new(command.slug), "Category not found")?;
        self.repo.delete(&slug).await?;
        tracing::info!(%slug, "category deleted");
        Ok(())
    }
}
