// src/presentation/http/controllers/questions.rs
use crate::application::{
    commands::questions::{CreateQuestionCommand, DeleteQuestionCommand, UpdateQuestionCommand},
    dto::QuestionDto,
    queries::questions::{GetQuestionQuery, ListQuestionsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{QueryParams, ValidatedJson, parse_id};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::validation::{CreateQuestionRequest, UpdateQuestionRequest};
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuestionListParams {
    /// Attach each question's category.
    #[serde(default)]
    pub include_category: bool,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuestionParams {
    /// Attach the question's category.
    #[serde(default)]
    pub include_category: bool,
    /// Attach the question's answers.
    #[serde(default)]
    pub include_answers: bool,
}

#[utoipa::path(
    get,
    path = "/questions",
    params(QuestionListParams),
    responses(
        (status = 200, description = "All questions.", body = Vec<QuestionDto>)
    ),
    tag = "Questions"
)]
pub async fn list_questions(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<QuestionListParams>,
) -> HttpResult<Json<Vec<QuestionDto>>> {
    state
        .services
        .question_queries
        .list_questions(ListQuestionsQuery {
            include_category: params.include_category,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/questions/{id}",
    params(
        ("id" = i64, Path, description = "Question id"),
        QuestionParams
    ),
    responses(
        (status = 200, description = "The question.", body = QuestionDto),
        (status = 400, description = "Id is not numeric.", body = ErrorResponse),
        (status = 404, description = "Unknown question.", body = ErrorResponse)
    ),
    tag = "Questions"
)]
pub async fn get_question(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    QueryParams(params): QueryParams<QuestionParams>,
) -> HttpResult<Json<QuestionDto>> {
    let id = parse_id(&id, "question")?;

    state
        .services
        .question_queries
        .get_question(GetQuestionQuery {
            id,
            include_category: params.include_category,
            include_answers: params.include_answers,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/question",
    request_body = CreateQuestionRequest,
    responses(
        (status = 201, description = "Question created.", body = QuestionDto),
        (status = 400, description = "Invalid body.", body = ErrorResponse),
        (status = 404, description = "Unknown category.", body = ErrorResponse)
    ),
    tag = "Questions"
)]
pub async fn create_question(
    Extension(state): Extension<HttpState>,
    ValidatedJson(payload): ValidatedJson<CreateQuestionRequest>,
) -> HttpResult<(StatusCode, Json<QuestionDto>)> {
    let command = CreateQuestionCommand {
        question: payload.question,
        category_id: payload.category_id,
    };

    let created = state
        .services
        .question_commands
        .create_question(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch,
    path = "/question/{id}",
    params(("id" = i64, Path, description = "Question id")),
    request_body = UpdateQuestionRequest,
    responses(
        (status = 200, description = "Question updated.", body = QuestionDto),
        (status = 400, description = "Invalid id or body.", body = ErrorResponse),
        (status = 404, description = "Unknown question.", body = ErrorResponse)
    ),
    tag = "Questions"
)]
pub async fn update_question(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateQuestionRequest>,
) -> HttpResult<Json<QuestionDto>> {
    let id = parse_id(&id, "question")?;

    state
        .services
        .question_commands
        .update_question(UpdateQuestionCommand {
            id,
            question: payload.question,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/question/{id}",
    params(("id" = i64, Path, description = "Question id")),
    responses(
        (status = 204, description = "Question deleted."),
        (status = 400, description = "Id is not numeric.", body = ErrorResponse),
        (status = 404, description = "Unknown question.", body = ErrorResponse),
        (status = 409, description = "Question still has answers.", body = ErrorResponse)
    ),
    tag = "Questions"
)]
pub async fn delete_question(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    let id = parse_id(&id, "question")?;

    state
        .services
        .question_commands
        .delete_question(DeleteQuestionCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
