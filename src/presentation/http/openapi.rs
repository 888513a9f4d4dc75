// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::root,
        super::routes::health,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::get_category,
        crate::presentation::http::controllers::categories::list_category_questions,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::rename_category,
        crate::presentation::http::controllers::categories::delete_category,
        crate::presentation::http::controllers::questions::list_questions,
        crate::presentation::http::controllers::questions::get_question,
        crate::presentation::http::controllers::questions::create_question,
        crate::presentation::http::controllers::questions::update_question,
        crate::presentation::http::controllers::questions::delete_question,
        crate::presentation::http::controllers::answers::list_answers,
        crate::presentation::http::controllers::answers::list_question_answers,
        crate::presentation::http::controllers::answers::create_answer,
        crate::presentation::http::controllers::answers::update_answer,
        crate::presentation::http::controllers::answers::delete_answer
    ),
    components(
        schemas(
            StatusResponse,
            MessageResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::validation::CreateCategoryRequest,
            crate::presentation::http::validation::RenameCategoryRequest,
            crate::presentation::http::validation::CreateQuestionRequest,
            crate::presentation::http::validation::UpdateQuestionRequest,
            crate::presentation::http::validation::AnswerTextRequest,
            crate::application::dto::CategoryDto,
            crate::application::dto::CategorySummaryDto,
            crate::application::dto::QuestionDto,
            crate::application::dto::QuestionSummaryDto,
            crate::application::dto::AnswerDto
        )
    ),
    tags(
        (name = "Categories", description = "Category endpoints"),
        (name = "Questions", description = "Question endpoints"),
        (name = "Answers", description = "Answer endpoints"),
        (name = "System", description = "Liveness endpoints")
    ),
    modifiers(&ServerListCustomizer),
    info(
        title = "Trivia API",
        description = "Categories, questions and answers",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ServerListCustomizer;

impl Modify for ServerListCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        if let Ok(url) = env::var("PUBLIC_API_URL") {
            let sanitized = url.trim().trim_end_matches('/').to_string();
            if !sanitized.is_empty() {
                servers.push(Server::new(sanitized));
            }
        }

        servers.push(Server::new("http://localhost:3000"));
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route(OPENAPI_JSON_PATH, get(serve_openapi))
}

pub fn write_openapi_snapshot(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}
