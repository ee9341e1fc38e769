//! Account handlers: create, list, read, update, delete.
//!
//! Each handler returns a single `Result`; the error path and the success path
//! are mutually exclusive, so exactly one response is written per request.

use crate::error::AppError;
use crate::model::Account;
use crate::password;
use crate::response::{created, ok_many};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|e| AppError::InvalidId(format!("invalid id '{}': {}", raw, e)))
}

/// Decode the raw body as JSON whatever the declared content type.
fn body(raw: &[u8]) -> Result<Account, AppError> {
    serde_json::from_slice(raw).map_err(|e| AppError::BadRequest(format!("invalid account body: {}", e)))
}

/// POST /account
pub async fn create(
    State(state): State<AppState>,
    payload: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let mut account = body(&payload)?;
    account.id = 0;
    let account = password::seal(account).await?;
    let id = state.accounts.insert(&account).await?;
    tracing::info!(account_id = id, "account created");
    Ok(created(id))
}

/// GET /account
///
/// Passwords are write-only and never appear in the listed objects.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let accounts = state.accounts.find_all().await?;
    Ok(ok_many(accounts))
}

/// GET /account/:id
///
/// Responds with an array holding the one match; the password is omitted.
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let found = state.accounts.find_by_id(id).await?;
    if found.is_empty() {
        return Err(AppError::NotFound("Account with the ID not exist".into()));
    }
    Ok(ok_many(found))
}

/// PUT /account/:id
///
/// Existence is checked before the body is looked at: an unknown id is a 404
/// even when the body is malformed.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if state.accounts.find_by_id(id).await?.is_empty() {
        return Err(AppError::NotFound("Account with id not found".into()));
    }
    let patch = password::seal(body(&payload)?).await?;
    state.accounts.update_fields(id, &patch).await?;
    tracing::info!(account_id = id, "account updated");
    Ok(StatusCode::OK)
}

/// DELETE /account/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state.accounts.delete_by_id(id).await?;
    tracing::info!(account_id = id, "account deleted");
    Ok(StatusCode::NO_CONTENT)
}
