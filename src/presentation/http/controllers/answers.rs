// src/presentation/http/controllers/answers.rs
use crate::application::{
    commands::answers::{CreateAnswerCommand, DeleteAnswerCommand, UpdateAnswerCommand},
    dto::AnswerDto,
    queries::answers::{ListAnswersQuery, ListQuestionAnswersQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{QueryParams, ValidatedJson, parse_id};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::validation::AnswerTextRequest;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AnswerListParams {
    /// Attach each answer's question.
    #[serde(default)]
    pub include_question: bool,
}

#[utoipa::path(
    get,
    path = "/answers",
    params(AnswerListParams),
    responses(
        (status = 200, description = "All answers.", body = Vec<AnswerDto>)
    ),
    tag = "Answers"
)]
pub async fn list_answers(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<AnswerListParams>,
) -> HttpResult<Json<Vec<AnswerDto>>> {
    state
        .services
        .answer_queries
        .list_answers(ListAnswersQuery {
            include_question: params.include_question,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/questions/{id}/answers",
    params(("id" = i64, Path, description = "Question id")),
    responses(
        (status = 200, description = "Answers of the question.", body = Vec<AnswerDto>),
        (status = 400, description = "Id is not numeric.", body = ErrorResponse),
        (status = 404, description = "Unknown question, or a question without answers.", body = ErrorResponse)
    ),
    tag = "Answers"
)]
pub async fn list_question_answers(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<Vec<AnswerDto>>> {
    let question_id = parse_id(&id, "question")?;

    state
        .services
        .answer_queries
        .list_question_answers(ListQuestionAnswersQuery { question_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/questions/{id}/answers",
    params(("id" = i64, Path, description = "Question id")),
    request_body = AnswerTextRequest,
    responses(
        (status = 201, description = "Answer created.", body = AnswerDto),
        (status = 400, description = "Invalid id or body.", body = ErrorResponse),
        (status = 404, description = "Unknown question.", body = ErrorResponse)
    ),
    tag = "Answers"
)]
pub async fn create_answer(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<AnswerTextRequest>,
) -> HttpResult<(StatusCode, Json<AnswerDto>)> {
    let question_id = parse_id(&id, "question")?;

    let created = state
        .services
        .answer_commands
        .create_answer(CreateAnswerCommand {
            question_id,
            text: payload.text,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch,
    path = "/answers/{id}",
    params(("id" = i64, Path, description = "Answer id")),
    request_body = AnswerTextRequest,
    responses(
        (status = 200, description = "Answer updated.", body = AnswerDto),
        (status = 400, description = "Invalid id or body.", body = ErrorResponse),
        (status = 404, description = "Unknown answer.", body = ErrorResponse)
    ),
    tag = "Answers"
)]
pub async fn update_answer(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<AnswerTextRequest>,
) -> HttpResult<Json<AnswerDto>> {
    let id = parse_id(&id, "answer")?;

    state
        .services
        .answer_commands
        .update_answer(UpdateAnswerCommand {
            id,
            text: payload.text,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/answers/{id}",
    params(("id" = i64, Path, description = "Answer id")),
    responses(
        (status = 204, description = "Answer deleted."),
        (status = 400, description = "Id is not numeric.", body = ErrorResponse),
        (status = 404, description = "Unknown answer.", body = ErrorResponse)
    ),
    tag = "Answers"
)]
pub async fn delete_answer(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    let id = parse_id(&id, "answer")?;

    state
        .services
        .answer_commands
        .delete_answer(DeleteAnswerCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
