use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use schoolbook_core::AppError;
use schoolbook_db::is_unique_violation;
use schoolbook_models::{NewUser, User, UserCredentials};

pub const EMAIL_TAKEN: &str = "The email has already been taken.";

/// Persistence for user accounts.
///
/// Implementations never return the password hash except through
/// [`UserRepository::find_credentials`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: NewUser) -> Result<User, AppError>;

    /// All users in insertion order.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;

    async fn find_credentials(&self, email: &str) -> Result<Option<UserCredentials>, AppError>;

    /// Whether another user (not `except`) already owns `email`.
    async fn email_taken(&self, email: &str, except: Option<Uuid>) -> Result<bool, AppError>;

    /// Replaces name, email and password hash. `None` when the user is gone.
    async fn update(&self, id: Uuid, changes: NewUser) -> Result<Option<User>, AppError>;

    /// `false` when nothing was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}

#[derive(Debug, Clone)]
pub struct PgUserRepository {
    db: PgPool,
}

impl PgUserRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

fn map_write_error(err: sqlx::Error, action: &'static str) -> AppError {
    if is_unique_violation(&err) {
        return AppError::conflict("email", EMAIL_TAKEN);
    }
    AppError::database(anyhow::Error::from(err).context(action))
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, email_verified_at, created_at, updated_at
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.db)
        .await
        .map_err(|e| map_write_error(e, "Failed to insert user"))
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, email_verified_at, created_at, updated_at
            FROM users
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .context("Failed to fetch users")
        .map_err(AppError::database)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, email_verified_at, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("Failed to fetch user by ID")
        .map_err(AppError::database)
    }

    async fn find_credentials(&self, email: &str) -> Result<Option<UserCredentials>, AppError> {
        sqlx::query_as::<_, UserCredentials>(
            "SELECT id, email, password FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .context("Failed to fetch user credentials")
        .map_err(AppError::database)
    }

    async fn email_taken(&self, email: &str, except: Option<Uuid>) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM users
                WHERE email = $1 AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(email)
        .bind(except)
        .fetch_one(&self.db)
        .await
        .context("Failed to check email uniqueness")
        .map_err(AppError::database)
    }

    async fn update(&self, id: Uuid, changes: NewUser) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $1, email = $2, password = $3, updated_at = NOW()
            WHERE id = $4
            RETURNING id, name, email, email_verified_at, created_at, updated_at
            "#,
        )
        .bind(&changes.name)
        .bind(&changes.email)
        .bind(&changes.password_hash)
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| map_write_error(e, "Failed to update user"))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .context("Failed to delete user")
            .map_err(AppError::database)?;

        Ok(result.rows_affected() > 0)
    }
}
