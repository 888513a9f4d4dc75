// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError,
    presentation::http::validation::RequestSchema,
};
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::HttpError;

/// JSON body checked against a [`RequestSchema`]. Unreadable bodies and
/// schema failures are both rejected with 400.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: RequestSchema + Send,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                HttpError::from_error(ApplicationError::validation(format!(
                    "Invalid data: {}",
                    rejection.body_text()
                )))
            })?;

        T::parse(&body).map(Self).map_err(HttpError::from_error)
    }
}

/// Query string whose deserialization failures use the JSON error body.
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                HttpError::from_error(ApplicationError::validation(rejection.body_text()))
            })?;
        Ok(Self(params))
    }
}

/// Parses a numeric path segment, naming the entity in the error.
pub fn parse_id(raw: &str, entity: &str) -> Result<i64, HttpError> {
    raw.trim().parse::<i64>().map_err(|_| {
        HttpError::from_error(ApplicationError::validation(format!("Invalid {entity} ID")))
    })
}
