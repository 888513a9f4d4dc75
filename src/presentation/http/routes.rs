// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{answers, categories, questions},
    error::ErrorResponse,
    openapi::{self, MessageResponse, StatusResponse},
};
use axum::{
    Extension, Json, Router,
    http::{Method, StatusCode},
    routing::{get, patch, post},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/", get(root))
        .route("/health", get(health))
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{slug}",
            get(categories::get_category)
                .patch(categories::rename_category)
                .delete(categories::delete_category),
        )
        .route(
            "/categories/{slug}/questions",
            get(categories::list_category_questions),
        )
        .route("/category", post(categories::create_category))
        .route("/questions", get(questions::list_questions))
        .route("/questions/{id}", get(questions::get_question))
        .route(
            "/questions/{id}/answers",
            get(answers::list_question_answers).post(answers::create_answer),
        )
        .route("/question", post(questions::create_question))
        .route(
            "/question/{id}",
            patch(questions::update_question).delete(questions::delete_question),
        )
        .route("/answers", get(answers::list_answers))
        .route(
            "/answers/{id}",
            patch(answers::update_answer).delete(answers::delete_answer),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Liveness message.", body = MessageResponse)
    ),
    tag = "System"
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Server is running!".into(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}

async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".into(),
        }),
    )
}
