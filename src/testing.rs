//! In-memory collaborators for exercising the HTTP surface without PostgreSQL.
//!
//! Enabled for this crate's unit tests and, through the `test-utils` feature,
//! for the integration tests under `tests/`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use schoolbook_config::{CorsConfig, JwtConfig, PasswordConfig};
use schoolbook_core::{AppError, CommonPasswordList, CompromisedPasswordCheck};
use schoolbook_models::{NewUser, StuParent, UpdateStuParentRequest, User, UserCredentials};

use crate::modules::stu_parents::repository::StuParentRepository;
use crate::modules::users::repository::{EMAIL_TAKEN, UserRepository};
use crate::state::AppState;

pub const TEST_JWT_SECRET: &str = "test-secret-key-at-least-32-characters-long";

#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    password_hash: String,
}

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    rows: RwLock<Vec<StoredUser>>,
}

impl InMemoryUserRepository {
    pub async fn password_hash(&self, id: Uuid) -> Option<String> {
        self.rows
            .read()
            .await
            .iter()
            .find(|row| row.user.id == id)
            .map(|row| row.password_hash.clone())
    }

    pub async fn count(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, AppError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|row| row.user.email == user.email) {
            return Err(AppError::conflict("email", EMAIL_TAKEN));
        }

        let now = Utc::now();
        let created = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            email_verified_at: None,
            created_at: now,
            updated_at: now,
        };
        rows.push(StoredUser {
            user: created.clone(),
            password_hash: user.password_hash,
        });

        Ok(created)
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.rows.read().await.iter().map(|row| row.user.clone()).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|row| row.user.id == id)
            .map(|row| row.user.clone()))
    }

    async fn find_credentials(&self, email: &str) -> Result<Option<UserCredentials>, AppError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|row| row.user.email == email)
            .map(|row| UserCredentials {
                id: row.user.id,
                email: row.user.email.clone(),
                password: row.password_hash.clone(),
            }))
    }

    async fn email_taken(&self, email: &str, except: Option<Uuid>) -> Result<bool, AppError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .any(|row| row.user.email == email && Some(row.user.id) != except))
    }

    async fn update(&self, id: Uuid, changes: NewUser) -> Result<Option<User>, AppError> {
        let mut rows = self.rows.write().await;
        if rows
            .iter()
            .any(|row| row.user.email == changes.email && row.user.id != id)
        {
            return Err(AppError::conflict("email", EMAIL_TAKEN));
        }

        let Some(row) = rows.iter_mut().find(|row| row.user.id == id) else {
            return Ok(None);
        };
        row.user.name = changes.name;
        row.user.email = changes.email;
        row.user.updated_at = Utc::now();
        row.password_hash = changes.password_hash;

        Ok(Some(row.user.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.user.id != id);
        Ok(rows.len() < before)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryStuParentRepository {
    rows: RwLock<Vec<StuParent>>,
}

#[async_trait]
impl StuParentRepository for InMemoryStuParentRepository {
    async fn list(&self) -> Result<Vec<StuParent>, AppError> {
        Ok(self.rows.read().await.clone())
    }

    async fn create(&self, name: &str) -> Result<StuParent, AppError> {
        let now = Utc::now();
        let parent = StuParent {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.rows.write().await.push(parent.clone());
        Ok(parent)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StuParent>, AppError> {
        Ok(self.rows.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &UpdateStuParentRequest,
    ) -> Result<Option<StuParent>, AppError> {
        let mut rows = self.rows.write().await;
        let Some(parent) = rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        if let Some(name) = &changes.name {
            parent.name = name.clone();
        }
        parent.updated_at = Utc::now();
        Ok(Some(parent.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<StuParent>, AppError> {
        let mut rows = self.rows.write().await;
        let position = rows.iter().position(|p| p.id == id);
        Ok(position.map(|index| rows.remove(index)))
    }
}

/// A checker whose lookups always fail, as when the remote API is down.
#[derive(Debug, Default)]
pub struct UnreachablePasswordCheck;

#[async_trait]
impl CompromisedPasswordCheck for UnreachablePasswordCheck {
    async fn is_compromised(&self, _password: &str) -> anyhow::Result<bool> {
        anyhow::bail!("connection refused")
    }
}

/// State wired to in-memory repositories, with handles kept for assertions.
pub struct TestContext {
    pub state: AppState,
    pub users: Arc<InMemoryUserRepository>,
    pub stu_parents: Arc<InMemoryStuParentRepository>,
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiry: 3600,
    }
}

pub fn test_state() -> TestContext {
    test_state_with_check(Arc::new(CommonPasswordList))
}

pub fn test_state_with_check(password_check: Arc<dyn CompromisedPasswordCheck>) -> TestContext {
    let users = Arc::new(InMemoryUserRepository::default());
    let stu_parents = Arc::new(InMemoryStuParentRepository::default());

    let state = AppState {
        users: users.clone(),
        stu_parents: stu_parents.clone(),
        password_check,
        jwt_config: test_jwt_config(),
        // Minimum bcrypt cost keeps hashing fast
        password_config: PasswordConfig {
            bcrypt_cost: 4,
            ..PasswordConfig::default()
        },
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        metrics: None,
    };

    TestContext {
        state,
        users,
        stu_parents,
    }
}
