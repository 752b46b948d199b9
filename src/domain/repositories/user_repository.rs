use async_trait::async_trait;

use crate::domain::errors::RepositoryResult;

/// User row as persisted
///
/// `session_token` is a single slot: at most one live session per user,
/// overwritten on every login. `password_hash` is a bcrypt hash and is
/// never serialized into API responses.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub created: i64,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub session_token: Option<String>,
}

/// Field set applied by a user UPDATE
///
/// `password_hash` is `None` when the caller supplied no password; the
/// implementation must then leave the stored password column untouched
/// rather than writing a null or empty value.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub username: String,
    pub email: String,
    pub password_hash: Option<String>,
}

/// Repository trait for User records
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch all users, oldest first
    async fn list(&self) -> RepositoryResult<Vec<User>>;

    /// Insert a new user row
    async fn create(&self, user: &User) -> RepositoryResult<()>;

    /// Apply an update keyed by id
    async fn update(&self, id: &str, changes: &UserUpdate) -> RepositoryResult<()>;

    /// Delete a user by id
    async fn delete(&self, id: &str) -> RepositoryResult<()>;

    /// Find a user by id
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<User>>;

    /// Find the first user with the given username
    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;

    /// Overwrite the user's single session slot
    async fn set_session_token(&self, id: &str, token: &str) -> RepositoryResult<()>;
}
