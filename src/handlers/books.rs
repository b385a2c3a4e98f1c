//! Book CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::model::BookPayload;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

/// A path id that does not parse as the primary-key type can never match a
/// row, so it is reported the same way as a missing row.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str.parse().map_err(|_| not_found(id_str))
}

fn not_found(id: impl std::fmt::Display) -> AppError {
    AppError::NotFound(format!("book {} not found", id))
}

/// Converts the axum JSON rejection into the service's 400 body instead of
/// the default plain-text response.
fn payload_from(body: Result<Json<BookPayload>, JsonRejection>) -> Result<BookPayload, AppError> {
    let Json(payload) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(payload)
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let books = state.store.list().await?;
    Ok((StatusCode::OK, Json(books)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let book = state.store.get(id).await?.ok_or_else(|| not_found(id))?;
    Ok((StatusCode::OK, Json(book)))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<BookPayload>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let payload = payload_from(body)?;
    let book = state.store.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<BookPayload>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    // Existence is confirmed before the body is parsed: an absent id is 404
    // even when the payload is malformed.
    state.store.get(id).await?.ok_or_else(|| not_found(id))?;
    let payload = payload_from(body)?;
    let book = state
        .store
        .update(id, &payload)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok((StatusCode::OK, Json(book)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !state.store.delete(id).await? {
        return Err(not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_parse() {
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn malformed_ids_are_not_found() {
        assert!(matches!(parse_id("abc"), Err(AppError::NotFound(_))));
        assert!(matches!(parse_id(""), Err(AppError::NotFound(_))));
        assert!(matches!(parse_id("1.5"), Err(AppError::NotFound(_))));
    }
}
