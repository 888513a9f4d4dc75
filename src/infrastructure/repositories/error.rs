use crate::domain::errors::DomainError;

const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_QUESTION_CATEGORY: &str = "questions_category_id_fkey";
const CNT_ANSWER_QUESTION: &str = "answers_question_id_fkey";

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Classifies a failed insert, update or read.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_CATEGORY_SLUG => DomainError::conflict("Category already exists"),
                    CNT_QUESTION_CATEGORY => DomainError::not_found("Category not found"),
                    CNT_ANSWER_QUESTION => DomainError::not_found("Question not found"),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    UNIQUE_VIOLATION => {
                        return DomainError::conflict("unique constraint violated");
                    }
                    FOREIGN_KEY_VIOLATION => {
                        return DomainError::not_found("referenced record not found");
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Classifies a failed delete. A foreign key violation here means rows still
/// reference the one being removed.
pub fn map_sqlx_on_delete(err: sqlx::Error, still_referenced: &str) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
            return DomainError::conflict(still_referenced);
        }
    }
    map_sqlx(err)
}
