use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::errors::{RepositoryError, RepositoryResult};
use crate::domain::repositories::user_repository::{User, UserRepository, UserUpdate};

/// SQLite implementation of UserRepository
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Creates a new SqliteUserRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Maps a zero-rows-affected write to the right error kind by
    /// checking whether the target row exists at all.
    async fn classify_missed_write(&self, id: &str) -> RepositoryResult<RepositoryError> {
        Ok(match self.find_by_id(id).await? {
            None => RepositoryError::NotFound,
            Some(_) => RepositoryError::WriteRejected,
        })
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn list(&self) -> RepositoryResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, created, username, password_hash, email, session_token
             FROM users ORDER BY created",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn create(&self, user: &User) -> RepositoryResult<()> {
        sqlx::query(
            "INSERT INTO users (id, created, username, password_hash, email, session_token)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&user.id)
        .bind(user.created)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.email)
        .bind(&user.session_token)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, id: &str, changes: &UserUpdate) -> RepositoryResult<()> {
        // The password column is left out of the statement entirely when
        // the caller supplied no password; a partial update must never
        // clear the stored hash.
        let result = match &changes.password_hash {
            Some(hash) => {
                sqlx::query("UPDATE users SET username = ?, password_hash = ?, email = ? WHERE id = ?")
                    .bind(&changes.username)
                    .bind(hash)
                    .bind(&changes.email)
                    .bind(id)
                    .execute(&self.pool)
                    .await?
            }
            None => {
                sqlx::query("UPDATE users SET username = ?, email = ? WHERE id = ?")
                    .bind(&changes.username)
                    .bind(&changes.email)
                    .bind(id)
                    .execute(&self.pool)
                    .await?
            }
        };

        if result.rows_affected() == 0 {
            return Err(self.classify_missed_write(id).await?);
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(self.classify_missed_write(id).await?);
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, created, username, password_hash, email, session_token
             FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, created, username, password_hash, email, session_token
             FROM users WHERE username = ? ORDER BY created LIMIT 1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn set_session_token(&self, id: &str, token: &str) -> RepositoryResult<()> {
        let result = sqlx::query("UPDATE users SET session_token = ? WHERE id = ?")
            .bind(token)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
