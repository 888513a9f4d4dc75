// src/infrastructure/repositories/postgres_question.rs
use super::{map_sqlx, map_sqlx_on_delete};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::question::{NewQuestion, Question, QuestionId, QuestionRepository, QuestionText};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresQuestionRepository {
    pool: PgPool,
}

impl PostgresQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct QuestionRow {
    id: i64,
    question: String,
    category_id: i64,
}

impl TryFrom<QuestionRow> for Question {
    type Error = DomainError;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        Ok(Question {
            id: QuestionId::new(row.id)?,
            question: QuestionText::new(row.question)?,
            category_id: CategoryId::new(row.category_id)?,
        })
    }
}

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    async fn list(&self, category: Option<CategoryId>) -> DomainResult<Vec<Question>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT id, question, category_id FROM questions");
        if let Some(category) = category {
            builder.push(" WHERE category_id = ");
            builder.push_bind(i64::from(category));
        }
        builder.push(" ORDER BY id ASC");

        let rows = builder
            .build_query_as::<QuestionRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Question::try_from).collect()
    }

    async fn find_by_id(&self, id: QuestionId) -> DomainResult<Option<Question>> {
        let row = sqlx::query_as::<_, QuestionRow>(
            "SELECT id, question, category_id FROM questions WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Question::try_from).transpose()
    }

    async fn insert(&self, question: NewQuestion) -> DomainResult<Question> {
        let row = sqlx::query_as::<_, QuestionRow>(
            "INSERT INTO questions (question, category_id) VALUES ($1, $2)
             RETURNING id, question, category_id",
        )
        .bind(question.question.as_str())
        .bind(i64::from(question.category_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Question::try_from(row)
    }

    async fn update_text(&self, id: QuestionId, question: QuestionText) -> DomainResult<Question> {
        let row = sqlx::query_as::<_, QuestionRow>(
            "UPDATE questions SET question = $1 WHERE id = $2
             RETURNING id, question, category_id",
        )
        .bind(question.as_str())
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = row.ok_or_else(|| DomainError::not_found("Question not found"))?;
        Question::try_from(row)
    }

    async fn delete(&self, id: QuestionId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(|err| map_sqlx_on_delete(err, "Question still has answers"))?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Question not found"));
        }
        Ok(())
    }
}
