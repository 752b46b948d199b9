use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::extractors::ApiJson;
use crate::api::handlers::MessageResponse;
use crate::api::AppState;
use crate::auth::password::hash_password;
use crate::domain::errors::RepositoryError;
use crate::domain::repositories::user_repository::{User, UserUpdate};
use crate::domain::repositories::UserRepository;
use crate::infrastructure::repositories::SqliteUserRepository;

/// Request body for creating or updating a user
///
/// `password` is optional so PUT can carry a partial update; CREATE
/// rejects its absence explicitly.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub email: String,
}

/// User record as returned to clients; the password hash never leaves
/// the store.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub created: i64,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            created: user.created,
            username: user.username,
            email: user.email,
        }
    }
}

/// List all users
///
/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let repo = SqliteUserRepository::new(state.pool.clone());
    let users = repo.list().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Create a new user
///
/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<UserPayload>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let password = req.password.as_deref().unwrap_or_default();
    if req.username.is_empty() || password.is_empty() || req.email.is_empty() {
        return Err(ApiError::bad_request("Missing required fields"));
    }

    let password_hash = hash_password(password)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to hash password: {}", e)))?;

    let user = User {
        id: Uuid::new_v4().to_string(),
        created: Utc::now().timestamp_millis(),
        username: req.username,
        password_hash,
        email: req.email,
        session_token: None,
    };

    let repo = SqliteUserRepository::new(state.pool.clone());
    repo.create(&user).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Update a user by id
///
/// PUT /api/users/:id
///
/// An absent (or empty) password leaves the stored password unchanged;
/// it is never interpreted as "clear the password".
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UserPayload>,
) -> Result<Json<UserResponse>, ApiError> {
    if req.username.is_empty() || req.email.is_empty() {
        return Err(ApiError::bad_request("Missing required fields"));
    }

    let password_hash = req
        .password
        .as_deref()
        .filter(|password| !password.is_empty())
        .map(hash_password)
        .transpose()
        .map_err(|e| ApiError::internal_server_error(format!("Failed to hash password: {}", e)))?;

    let changes = UserUpdate {
        username: req.username,
        email: req.email,
        password_hash,
    };

    let repo = SqliteUserRepository::new(state.pool.clone());
    repo.update(&id, &changes).await.map_err(|e| match e {
        RepositoryError::NotFound => ApiError::not_found(format!("User not found: {}", id)),
        other => other.into(),
    })?;

    let user = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User not found: {}", id)))?;

    Ok(Json(UserResponse::from(user)))
}

/// Delete a user by id
///
/// DELETE /api/users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repo = SqliteUserRepository::new(state.pool.clone());
    repo.delete(&id).await.map_err(|e| match e {
        RepositoryError::NotFound => ApiError::not_found(format!("User not found: {}", id)),
        other => other.into(),
    })?;

    Ok(Json(MessageResponse::new("User deleted successfully")))
}
