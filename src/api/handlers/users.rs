//! User record handlers.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::extractors::{AppJson, AppPath};
use crate::api::state::AppState;
use crate::domain::{NewUser, User};
use crate::error::Result;

/// Create a user. Any `id` in the body is replaced by a generated one.
///
/// # Errors
///
/// Returns an error if the body is malformed or storage fails.
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(new_user): AppJson<NewUser>,
) -> Result<Json<User>> {
    let user = state.user_service.create(new_user).await?;
    Ok(Json(user))
}

/// Get a user by id.
///
/// # Errors
///
/// Returns a not-found error if the id is unknown, or an error if storage fails.
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<Json<User>> {
    let user = state.user_service.get(&id).await?;
    Ok(Json(user))
}

/// List all users.
///
/// # Errors
///
/// Returns an error if storage fails.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = state.user_service.list().await?;
    Ok(Json(users))
}

/// Delete a user by id.
///
/// # Errors
///
/// Returns an error if storage fails.
pub async fn delete_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<String>,
) -> Result<StatusCode> {
    state.user_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
