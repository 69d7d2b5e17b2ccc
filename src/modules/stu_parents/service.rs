use tracing::instrument;
use uuid::Uuid;

use schoolbook_core::AppError;
use schoolbook_models::{CreateStuParentRequest, StuParent, UpdateStuParentRequest};

use crate::state::AppState;

pub const PARENT_NOT_FOUND: &str = "Parent record not found.";

pub struct StuParentService;

impl StuParentService {
    #[instrument(skip(state))]
    pub async fn get_parents(state: &AppState) -> Result<Vec<StuParent>, AppError> {
        state.stu_parents.list().await
    }

    /// Expects a validated request.
    #[instrument(skip(state))]
    pub async fn create_parent(
        state: &AppState,
        dto: CreateStuParentRequest,
    ) -> Result<StuParent, AppError> {
        let name = dto.name.unwrap_or_default();
        state.stu_parents.create(&name).await
    }

    #[instrument(skip(state))]
    pub async fn get_parent(state: &AppState, id: Uuid) -> Result<StuParent, AppError> {
        state
            .stu_parents
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(PARENT_NOT_FOUND))
    }

    /// A request without assignable fields leaves the record untouched.
    #[instrument(skip(state))]
    pub async fn update_parent(
        state: &AppState,
        id: Uuid,
        dto: UpdateStuParentRequest,
    ) -> Result<StuParent, AppError> {
        if dto.is_empty() {
            return Self::get_parent(state, id).await;
        }

        state
            .stu_parents
            .update(id, &dto)
            .await?
            .ok_or_else(|| AppError::not_found(PARENT_NOT_FOUND))
    }

    /// Returns the deleted record.
    #[instrument(skip(state))]
    pub async fn delete_parent(state: &AppState, id: Uuid) -> Result<StuParent, AppError> {
        state
            .stu_parents
            .delete(id)
            .await?
            .ok_or_else(|| AppError::not_found(PARENT_NOT_FOUND))
    }
}
