// src/presentation/http/validation.rs
//! Schemas for raw JSON request bodies.
//!
//! Create bodies are checked field by field; update bodies only need the one
//! mutable field, anything else in them is ignored.
use crate::application::error::{ApplicationError, ApplicationResult};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A request body that can be validated from untyped JSON.
pub trait RequestSchema: Sized {
    fn parse(body: &Value) -> ApplicationResult<Self>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RenameCategoryRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    pub question: String,
    pub category_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UpdateQuestionRequest {
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AnswerTextRequest {
    pub text: String,
}

fn object(body: &Value) -> ApplicationResult<&Map<String, Value>> {
    body.as_object()
        .ok_or_else(|| ApplicationError::validation("Invalid data: body must be a JSON object"))
}

fn required_text(fields: &Map<String, Value>, field: &str) -> ApplicationResult<String> {
    match fields.get(field) {
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.clone()),
        Some(Value::String(_)) => Err(ApplicationError::validation(format!(
            "Invalid data: `{field}` cannot be empty"
        ))),
        Some(_) => Err(ApplicationError::validation(format!(
            "Invalid data: `{field}` must be a string"
        ))),
        None => Err(ApplicationError::validation(format!(
            "Invalid data: `{field}` is required"
        ))),
    }
}

fn required_id(fields: &Map<String, Value>, field: &str) -> ApplicationResult<i64> {
    match fields.get(field) {
        Some(Value::Number(number)) => number.as_i64().ok_or_else(|| {
            ApplicationError::validation(format!("Invalid data: `{field}` must be an integer"))
        }),
        Some(_) => Err(ApplicationError::validation(format!(
            "Invalid data: `{field}` must be a number"
        ))),
        None => Err(ApplicationError::validation(format!(
            "Invalid data: `{field}` is required"
        ))),
    }
}

impl RequestSchema for CreateCategoryRequest {
    fn parse(body: &Value) -> ApplicationResult<Self> {
        let fields = object(body)?;
        Ok(Self {
            name: required_text(fields, "name")?,
        })
    }
}

impl RequestSchema for RenameCategoryRequest {
    fn parse(body: &Value) -> ApplicationResult<Self> {
        let fields = object(body)?;
        Ok(Self {
            name: required_text(fields, "name")?,
        })
    }
}

impl RequestSchema for CreateQuestionRequest {
    fn parse(body: &Value) -> ApplicationResult<Self> {
        let fields = object(body)?;
        Ok(Self {
            question: required_text(fields, "question")?,
            category_id: required_id(fields, "categoryId")?,
        })
    }
}

impl RequestSchema for UpdateQuestionRequest {
    fn parse(body: &Value) -> ApplicationResult<Self> {
        let fields = object(body)?;
        Ok(Self {
            question: required_text(fields, "question")?,
        })
    }
}

impl RequestSchema for AnswerTextRequest {
    fn parse(body: &Value) -> ApplicationResult<Self> {
        let fields = object(body)?;
        Ok(Self {
            text: required_text(fields, "text")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(err: ApplicationError) -> String {
        match err {
            ApplicationError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn category_requires_non_empty_name() {
        let ok = CreateCategoryRequest::parse(&json!({ "name": "Test Category" })).unwrap();
        assert_eq!(ok.name, "Test Category");

        let empty = CreateCategoryRequest::parse(&json!({ "name": "" })).unwrap_err();
        assert!(message(empty).contains("cannot be empty"));

        let missing = CreateCategoryRequest::parse(&json!({})).unwrap_err();
        assert!(message(missing).contains("is required"));

        let wrong_type = CreateCategoryRequest::parse(&json!({ "name": 42 })).unwrap_err();
        assert!(message(wrong_type).contains("must be a string"));
    }

    #[test]
    fn question_requires_text_and_numeric_category() {
        let ok = CreateQuestionRequest::parse(&json!({ "question": "Q?", "categoryId": 3 }))
            .unwrap();
        assert_eq!(ok.category_id, 3);

        let as_string =
            CreateQuestionRequest::parse(&json!({ "question": "Q?", "categoryId": "3" }))
                .unwrap_err();
        assert!(message(as_string).contains("must be a number"));

        let fractional =
            CreateQuestionRequest::parse(&json!({ "question": "Q?", "categoryId": 1.5 }))
                .unwrap_err();
        assert!(message(fractional).contains("must be an integer"));

        assert!(CreateQuestionRequest::parse(&json!({ "categoryId": 3 })).is_err());
    }

    #[test]
    fn update_bodies_only_check_their_field() {
        let ok = UpdateQuestionRequest::parse(&json!({ "question": "New?", "categoryId": "x" }))
            .unwrap();
        assert_eq!(ok.question, "New?");
        assert!(RenameCategoryRequest::parse(&json!({ "slug": "x" })).is_err());
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        assert!(AnswerTextRequest::parse(&json!(["text"])).is_err());
        assert!(AnswerTextRequest::parse(&Value::Null).is_err());
    }

    #[test]
    fn whitespace_only_text_counts_as_empty() {
        assert!(AnswerTextRequest::parse(&json!({ "text": "   " })).is_err());
    }
}
