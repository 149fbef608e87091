//! # Request Handlers
//!
//! One handler per operation. Each validates in the order the contract
//! documents, invokes the store, and shapes the response. Store faults are
//! logged with detail here and collapsed to the opaque internal error.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::auth::secret_matches;
use crate::config::Config;
use crate::observability::Logger;
use crate::store::{Collection, PoemStore, StoreError};

use super::errors::{ApiError, ApiResult};
use super::pagination::PageParams;
use super::response::{Poem, PoemList, StatusMessage};

/// Shared state for every poem route
pub struct AppState<C: Collection> {
    pub store: PoemStore<C>,
    pub config: Config,
}

/// Shared state type
type SharedState<C> = Arc<AppState<C>>;

/// Mutation body for create and update
///
/// `author`, `title` and `poem` must be present to deserialize at all; a
/// missing secret is an authorization failure, not a parse failure.
#[derive(Debug, Deserialize)]
pub struct WritePoemRequest {
    pub author: String,
    pub title: String,
    pub poem: Vec<String>,
    pub secret: Option<String>,
}

/// Mutation body for delete
#[derive(Debug, Deserialize)]
pub struct DeletePoemRequest {
    pub secret: Option<String>,
}

// ==================
// Handlers
// ==================

/// GET /poem/{id}
pub async fn get_poem<C: Collection + 'static>(
    State(state): State<SharedState<C>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Poem>> {
    let id = parse_id(id)?;

    let record = state
        .store
        .get_one(id)
        .map_err(|e| store_fault("get", e))?
        .ok_or(ApiError::PoemNotFound)?;

    Ok(Json(Poem::from(record)))
}

/// GET /poems
pub async fn list_poems<C: Collection + 'static>(
    State(state): State<SharedState<C>>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> ApiResult<Json<PoemList>> {
    let Query(query) = query.map_err(|_| ApiError::InvalidParameters)?;
    let params = PageParams::parse(&query, &state.config)?;

    let count = state.store.count().map_err(|e| store_fault("list", e))?;

    let first_record = params.first_record().ok_or(ApiError::NotEnoughPoems)?;
    if count < first_record {
        return Err(ApiError::NotEnoughPoems);
    }

    let window = state
        .store
        .get_window(params.window_len())
        .map_err(|e| store_fault("list", e))?;

    let poems: Vec<Poem> = window
        .into_iter()
        .skip((first_record - 1) as usize)
        .take(params.quantity as usize)
        .map(Poem::from)
        .collect();

    let next_page = params.next_page(count);

    Ok(Json(PoemList { poems, next_page }))
}

/// POST /poem
pub async fn create_poem<C: Collection + 'static>(
    State(state): State<SharedState<C>>,
    payload: Result<Json<WritePoemRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(body) = payload.map_err(|_| ApiError::InvalidParameters)?;
    validate_fields(&body)?;
    check_secret(body.secret.as_deref(), &state.config)?;

    let id = state
        .store
        .create(body.author, body.title, body.poem)
        .map_err(|e| store_fault("create", e))?;

    Logger::info("POEM_CREATED", &[("id", &id.to_string())]);

    // Success is 204 with an empty body, not a JSON envelope
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /poem/{id}
pub async fn update_poem<C: Collection + 'static>(
    State(state): State<SharedState<C>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<WritePoemRequest>, JsonRejection>,
) -> ApiResult<Json<StatusMessage>> {
    let id = parse_id(id)?;

    // Existence is checked before the body in this contract
    if state
        .store
        .get_one(id)
        .map_err(|e| store_fault("update", e))?
        .is_none()
    {
        return Err(ApiError::PoemNotFound);
    }

    let Json(body) = payload.map_err(|_| ApiError::InvalidParameters)?;
    validate_fields(&body)?;
    check_secret(body.secret.as_deref(), &state.config)?;

    state
        .store
        .update(id, body.author, body.title, body.poem)
        .map_err(|e| store_fault("update", e))?;

    Logger::info("POEM_UPDATED", &[("id", &id.to_string())]);

    Ok(Json(StatusMessage::updated()))
}

/// DELETE /poem/{id}
pub async fn delete_poem<C: Collection + 'static>(
    State(state): State<SharedState<C>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<DeletePoemRequest>, JsonRejection>,
) -> ApiResult<Json<StatusMessage>> {
    let id = parse_id(id)?;

    if state
        .store
        .get_one(id)
        .map_err(|e| store_fault("delete", e))?
        .is_none()
    {
        return Err(ApiError::PoemNotFound);
    }

    // An unreadable body is the same as a missing secret here
    let secret = payload.ok().and_then(|Json(body)| body.secret);
    check_secret(secret.as_deref(), &state.config)?;

    state.store.delete(id).map_err(|e| store_fault("delete", e))?;

    Logger::info("POEM_DELETED", &[("id", &id.to_string())]);

    Ok(Json(StatusMessage::deleted()))
}

// ==================
// Shared validation
// ==================

/// Extract and validate a path id
fn parse_id(id: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    let Path(id) = id.map_err(|_| ApiError::InvalidParameters)?;
    if id <= 0 {
        return Err(ApiError::InvalidParameters);
    }
    Ok(id)
}

/// Reject empty author, title or poem
fn validate_fields(body: &WritePoemRequest) -> ApiResult<()> {
    if body.author.is_empty() || body.title.is_empty() || body.poem.is_empty() {
        return Err(ApiError::InvalidParameters);
    }
    Ok(())
}

/// Enforce the shared-secret write gate
fn check_secret(provided: Option<&str>, config: &Config) -> ApiResult<()> {
    if !secret_matches(provided, &config.secret) {
        return Err(ApiError::NotAuthorized);
    }
    Ok(())
}

/// Log a store fault with detail and collapse it to the opaque error
fn store_fault(op: &'static str, err: StoreError) -> ApiError {
    Logger::error("STORE_FAULT", &[("op", op), ("detail", &err.to_string())]);
    ApiError::Internal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            secret: "hunter2".to_string(),
            default_quantity: 10,
            default_page: 1,
            data_path: None,
            bind_addr: "0.0.0.0".to_string(),
            port: 5000,
            cors_origins: Vec::new(),
        }
    }

    fn body(author: &str, title: &str, poem: &[&str], secret: Option<&str>) -> WritePoemRequest {
        WritePoemRequest {
            author: author.to_string(),
            title: title.to_string(),
            poem: poem.iter().map(|l| l.to_string()).collect(),
            secret: secret.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_validate_fields_rejects_empties() {
        assert_eq!(
            validate_fields(&body("", "t", &["l"], None)),
            Err(ApiError::InvalidParameters)
        );
        assert_eq!(
            validate_fields(&body("a", "", &["l"], None)),
            Err(ApiError::InvalidParameters)
        );
        assert_eq!(
            validate_fields(&body("a", "t", &[], None)),
            Err(ApiError::InvalidParameters)
        );
        assert!(validate_fields(&body("a", "t", &["l"], None)).is_ok());
    }

    #[test]
    fn test_blank_lines_inside_poem_are_allowed() {
        // Stanza breaks arrive as empty strings; only an empty sequence is
        // invalid
        assert!(validate_fields(&body("a", "t", &["uno", "", "dos"], None)).is_ok());
    }

    #[test]
    fn test_check_secret() {
        let config = test_config();
        assert!(check_secret(Some("hunter2"), &config).is_ok());
        assert_eq!(
            check_secret(Some("wrong"), &config),
            Err(ApiError::NotAuthorized)
        );
        assert_eq!(check_secret(None, &config), Err(ApiError::NotAuthorized));
    }

    #[test]
    fn test_write_request_parses_without_secret() {
        let parsed: WritePoemRequest =
            serde_json::from_str(r#"{"author":"a","title":"t","poem":["l"]}"#).unwrap();
        assert_eq!(parsed.secret, None);
    }

    #[test]
    fn test_write_request_requires_content_fields() {
        let result: Result<WritePoemRequest, _> =
            serde_json::from_str(r#"{"title":"t","poem":["l"],"secret":"s"}"#);
        assert!(result.is_err());
    }
}
