use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use models::file_record::{self, RECORD_ID};
use serde::Serialize;

use crate::errors::{JsonApiError, RawApiError};
use crate::startup::AppState;

#[derive(Serialize, Debug)]
pub struct IdOutput { pub id: i32 }

#[derive(Serialize, Debug)]
pub struct DeletedOutput { pub deleted: bool }

/// Bodies are opaque regardless of Content-Type; invalid UTF-8 is replaced.
fn body_text(body: &Bytes) -> std::borrow::Cow<'_, str> {
    String::from_utf8_lossy(body)
}

/// `POST /api/file`: same upsert as PUT, answered with 201.
pub async fn create_file(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<IdOutput>), JsonApiError> {
    state
        .store
        .replace(&body_text(&body))
        .await
        .map_err(|e| JsonApiError::from_service("post", e))?;
    Ok((StatusCode::CREATED, Json(IdOutput { id: RECORD_ID })))
}

/// `PUT /api/file`
pub async fn replace_file(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<IdOutput>, JsonApiError> {
    state
        .store
        .replace(&body_text(&body))
        .await
        .map_err(|e| JsonApiError::from_service("put", e))?;
    Ok(Json(IdOutput { id: RECORD_ID }))
}

/// `GET /api/file`: the record as `{id, content}`, empty content included.
pub async fn read_file(
    State(state): State<AppState>,
) -> Result<Json<file_record::Model>, JsonApiError> {
    let rec = state
        .store
        .get()
        .await
        .map_err(|e| JsonApiError::from_service("get", e))?;
    Ok(Json(rec))
}

/// `DELETE /api/file`: clears the content, the row stays.
pub async fn delete_file(
    State(state): State<AppState>,
) -> Result<Json<DeletedOutput>, JsonApiError> {
    state
        .store
        .clear()
        .await
        .map_err(|e| JsonApiError::from_service("delete", e))?;
    Ok(Json(DeletedOutput { deleted: true }))
}

/// `GET /api/file/raw`: bare content; empty content counts as not found.
pub async fn read_raw(State(state): State<AppState>) -> Result<Response, RawApiError> {
    let rec = state.store.get().await.map_err(RawApiError::from_service)?;
    if rec.content.is_empty() {
        return Err(RawApiError::NotFound);
    }
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], rec.content).into_response())
}
