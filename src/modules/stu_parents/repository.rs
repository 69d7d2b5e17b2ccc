use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use schoolbook_core::AppError;
use schoolbook_models::{StuParent, UpdateStuParentRequest};

#[async_trait]
pub trait StuParentRepository: Send + Sync {
    /// All records in insertion order.
    async fn list(&self) -> Result<Vec<StuParent>, AppError>;

    async fn create(&self, name: &str) -> Result<StuParent, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StuParent>, AppError>;

    /// Applies the fields present in `changes` and bumps `updated_at`.
    async fn update(
        &self,
        id: Uuid,
        changes: &UpdateStuParentRequest,
    ) -> Result<Option<StuParent>, AppError>;

    /// Returns the record as it was just before deletion.
    async fn delete(&self, id: Uuid) -> Result<Option<StuParent>, AppError>;
}

#[derive(Debug, Clone)]
pub struct PgStuParentRepository {
    db: PgPool,
}

impl PgStuParentRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StuParentRepository for PgStuParentRepository {
    async fn list(&self) -> Result<Vec<StuParent>, AppError> {
        sqlx::query_as::<_, StuParent>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM stu_parents
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.db)
        .await
        .context("Failed to fetch parents")
        .map_err(AppError::database)
    }

    async fn create(&self, name: &str) -> Result<StuParent, AppError> {
        sqlx::query_as::<_, StuParent>(
            r#"
            INSERT INTO stu_parents (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(name)
        .fetch_one(&self.db)
        .await
        .context("Failed to insert parent")
        .map_err(AppError::database)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StuParent>, AppError> {
        sqlx::query_as::<_, StuParent>(
            "SELECT id, name, created_at, updated_at FROM stu_parents WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("Failed to fetch parent by ID")
        .map_err(AppError::database)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &UpdateStuParentRequest,
    ) -> Result<Option<StuParent>, AppError> {
        sqlx::query_as::<_, StuParent>(
            r#"
            UPDATE stu_parents
            SET name = COALESCE($1, name), updated_at = NOW()
            WHERE id = $2
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(changes.name.as_deref())
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("Failed to update parent")
        .map_err(AppError::database)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<StuParent>, AppError> {
        sqlx::query_as::<_, StuParent>(
            r#"
            DELETE FROM stu_parents
            WHERE id = $1
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("Failed to delete parent")
        .map_err(AppError::database)
    }
}
