// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::{CreateCategoryCommand, DeleteCategoryCommand, RenameCategoryCommand},
    dto::{CategoryDto, QuestionDto},
    queries::categories::{GetCategoryBySlugQuery, ListCategoryQuestionsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{QueryParams, ValidatedJson};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::validation::{CreateCategoryRequest, RenameCategoryRequest};
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryParams {
    /// Attach the category's questions.
    #[serde(default)]
    pub include_questions: bool,
}

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories.", body = Vec<CategoryDto>),
        (status = 500, description = "Store failure.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/categories/{slug}",
    params(
        ("slug" = String, Path, description = "Category slug"),
        CategoryParams
    ),
    responses(
        (status = 200, description = "The category.", body = CategoryDto),
        (status = 404, description = "Unknown slug.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_category(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    QueryParams(params): QueryParams<CategoryParams>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_queries
        .get_category_by_slug(GetCategoryBySlugQuery {
            slug,
            include_questions: params.include_questions,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/categories/{slug}/questions",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Questions of the category.", body = Vec<QuestionDto>),
        (status = 404, description = "Unknown slug.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn list_category_questions(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<Vec<QuestionDto>>> {
    state
        .services
        .category_queries
        .list_category_questions(ListCategoryQuestionsQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/category",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created.", body = CategoryDto),
        (status = 400, description = "Invalid body.", body = ErrorResponse),
        (status = 409, description = "Slug already taken.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    ValidatedJson(payload): ValidatedJson<CreateCategoryRequest>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let created = state
        .services
        .category_commands
        .create_category(CreateCategoryCommand { name: payload.name })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch,
    path = "/categories/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    request_body = RenameCategoryRequest,
    responses(
        (status = 200, description = "Category renamed; the slug is kept.", body = CategoryDto),
        (status = 400, description = "Invalid body.", body = ErrorResponse),
        (status = 404, description = "Unknown slug.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn rename_category(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    ValidatedJson(payload): ValidatedJson<RenameCategoryRequest>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .category_commands
        .rename_category(RenameCategoryCommand {
            slug,
            name: payload.name,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/categories/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 204, description = "Category deleted."),
        (status = 404, description = "Unknown slug.", body = ErrorResponse),
        (status = 409, description = "Category still has questions.", body = ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .category_commands
        .delete_category(DeleteCategoryCommand { slug })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
