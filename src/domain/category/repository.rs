use crate::domain::category::entity::{Category, NewCategory};
use crate::domain::category::value_objects::{CategoryId, CategoryName, CategorySlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Category>>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>>;
    /// Fails with `Conflict` when the slug is already taken.
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    /// Changes the display name only; fails with `NotFound` for an unknown slug.
    async fn rename(&self, slug: &CategorySlug, name: CategoryName) -> DomainResult<Category>;
    /// Fails with `NotFound` for an unknown slug and `Conflict` while questions
    /// still reference the category.
    async fn delete(&self, slug: &CategorySlug) -> DomainResult<()>;
}
