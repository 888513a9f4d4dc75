// src/infrastructure/repositories/postgres_answer.rs
use super::map_sqlx;
use crate::domain::answer::{Answer, AnswerId, AnswerRepository, AnswerText, NewAnswer};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::question::QuestionId;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresAnswerRepository {
    pool: PgPool,
}

impl PostgresAnswerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AnswerRow {
    id: i64,
    text: String,
    question_id: i64,
}

impl TryFrom<AnswerRow> for Answer {
    type Error = DomainError;

    fn try_from(row: AnswerRow) -> Result<Self, Self::Error> {
        Ok(Answer {
            id: AnswerId::new(row.id)?,
            text: AnswerText::new(row.text)?,
            question_id: QuestionId::new(row.question_id)?,
        })
    }
}

#[async_trait]
impl AnswerRepository for PostgresAnswerRepository {
    async fn list(&self, question: Option<QuestionId>) -> DomainResult<Vec<Answer>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT id, text, question_id FROM answers");
        if let Some(question) = question {
            builder.push(" WHERE question_id = ");
            builder.push_bind(i64::from(question));
        }
        builder.push(" ORDER BY id ASC");

        let rows = builder
            .build_query_as::<AnswerRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Answer::try_from).collect()
    }

    async fn insert(&self, answer: NewAnswer) -> DomainResult<Answer> {
        let row = sqlx::query_as::<_, AnswerRow>(
            "INSERT INTO answers (text, question_id) VALUES ($1, $2)
             RETURNING id, text, question_id",
        )
        .bind(answer.text.as_str())
        .bind(i64::from(answer.question_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Answer::try_from(row)
    }

    async fn update_text(&self, id: AnswerId, text: AnswerText) -> DomainResult<Answer> {
        let row = sqlx::query_as::<_, AnswerRow>(
            "UPDATE answers SET text = $1 WHERE id = $2
             RETURNING id, text, question_id",
        )
        .bind(text.as_str())
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = row.ok_or_else(|| DomainError::not_found("Answer not found"))?;
        Answer::try_from(row)
    }

    async fn delete(&self, id: AnswerId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM answers WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Answer not found"));
        }
        Ok(())
    }
}
