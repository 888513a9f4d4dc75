// src/infrastructure/repositories/postgres_category.rs
use super::{map_sqlx, map_sqlx_on_delete};
use crate::domain::category::{
    Category, CategoryId, CategoryName, CategoryRepository, CategorySlug, NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            slug: CategorySlug::new(row.slug)?,
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug FROM categories ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug FROM categories WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug FROM categories WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let NewCategory { name, slug } = category;

        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (name, slug) VALUES ($1, $2)
             RETURNING id, name, slug",
        )
        .bind(name.as_str())
        .bind(slug.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn rename(&self, slug: &CategorySlug, name: CategoryName) -> DomainResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "UPDATE categories SET name = $1 WHERE slug = $2
             RETURNING id, name, slug",
        )
        .bind(name.as_str())
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = row.ok_or_else(|| DomainError::not_found("Category not found"))?;
        Category::try_from(row)
    }

    async fn delete(&self, slug: &CategorySlug) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE slug = $1")
            .bind(slug.as_str())
            .execute(&self.pool)
            .await
            .map_err(|err| map_sqlx_on_delete(err, "Category still has questions"))?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Category not found"));
        }
        Ok(())
    }
}
