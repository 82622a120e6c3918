//! Route handlers. Each one decodes at most one JSON body and issues exactly
//! one store operation.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use domain::{Content, ContentUpdate};
use serde::{de::DeserializeOwned, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TotalResponse {
    pub total: i64,
}

/// Serialize fully before committing to a status, so a failed encode never
/// follows a success header.
pub(crate) fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response, ApiError> {
    let bytes = serde_json::to_vec(body).map_err(ApiError::Encode)?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}

/// Decode the first JSON value of the raw body, regardless of the declared
/// content type. Anything after that value is ignored.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    match serde_json::Deserializer::from_slice(body).into_iter::<T>().next() {
        Some(value) => value.map_err(ApiError::InvalidPayload),
        None => Err(ApiError::InvalidPayload(serde::de::Error::custom("empty body"))),
    }
}

pub async fn health() -> Result<Response, ApiError> {
    json_response(StatusCode::OK, &HealthResponse { status: "healthy" })
}

pub async fn list_contents(State(state): State<AppState>) -> Result<Response, ApiError> {
    let contents = state.content_app.content_service.list_contents().await?;
    json_response(StatusCode::OK, &contents)
}

pub async fn create_content(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let content: Content = decode_body(&body)?;
    state.content_app.content_service.create_content(content).await?;
    info!("📥 Content created");
    json_response(
        StatusCode::CREATED,
        &MessageResponse {
            message: "Content created successfully",
        },
    )
}

pub async fn delete_content(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let content: Content = decode_body(&body)?;
    state.content_app.content_service.delete_content(content).await?;
    info!("🗑️  Content deleted");
    json_response(
        StatusCode::OK,
        &MessageResponse {
            message: "Content deleted successfully",
        },
    )
}

pub async fn update_content(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let update: ContentUpdate = decode_body(&body)?;
    state.content_app.content_service.update_content(update).await?;
    info!("✏️  Content updated");
    json_response(
        StatusCode::OK,
        &MessageResponse {
            message: "Content updated successfully",
        },
    )
}

pub async fn count_contents(State(state): State<AppState>) -> Result<Response, ApiError> {
    let total = state.content_app.content_service.count_contents().await?;
    json_response(StatusCode::OK, &TotalResponse { total })
}

// Method fallbacks, one per route verb.

pub async fn only_get() -> ApiError {
    ApiError::MethodNotAllowed("Get")
}

pub async fn only_post() -> ApiError {
    ApiError::MethodNotAllowed("Post")
}

pub async fn only_delete() -> ApiError {
    ApiError::MethodNotAllowed("Delete")
}

pub async fn only_put() -> ApiError {
    ApiError::MethodNotAllowed("Put")
}
