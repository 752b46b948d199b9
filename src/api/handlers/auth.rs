use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::extractors::ApiJson;
use crate::api::AppState;
use crate::auth::jwt::create_token;
use crate::auth::password::verify_password;
use crate::domain::repositories::UserRepository;
use crate::infrastructure::repositories::SqliteUserRepository;

/// Request body for login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Response from successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Login with username and password
///
/// POST /api/login
///
/// On success the minted token is written into the user's single
/// session slot, overwriting any previous one. Failure responses never
/// reveal whether the username exists.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Missing username or password"));
    }

    let repo = SqliteUserRepository::new(state.pool.clone());
    let user = repo
        .find_by_username(&req.username)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid username or password"))?;

    let valid = verify_password(&req.password, &user.password_hash).map_err(|e| {
        ApiError::internal_server_error(format!("Password verification failed: {}", e))
    })?;

    if !valid {
        return Err(ApiError::unauthorized("Invalid username or password"));
    }

    let token = create_token(&user.id, &state.jwt_secret)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create token: {}", e)))?;

    repo.set_session_token(&user.id, &token).await?;

    Ok(Json(LoginResponse { token }))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
