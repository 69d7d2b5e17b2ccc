use axum::{extract::State, http::StatusCode};
use tracing::{info, instrument};
use uuid::Uuid;

use schoolbook_core::{ApiResponse, AppError};
use schoolbook_models::{CreateStuParentRequest, StuParent, UpdateStuParentRequest};

use crate::docs::{ErrorResponse, StuParentEnvelope, StuParentListEnvelope};
use crate::middleware::auth::AuthUser;
use crate::modules::stu_parents::service::{PARENT_NOT_FOUND, StuParentService};
use crate::state::AppState;
use crate::validator::{ResourceId, ValidatedJson};

#[utoipa::path(
    get,
    path = "/api/stu-parents",
    responses(
        (status = 200, description = "All parent records", body = StuParentListEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Parents"
)]
#[instrument(skip(state))]
pub async fn get_parents(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<ApiResponse<Vec<StuParent>>, AppError> {
    let parents = StuParentService::get_parents(&state).await?;

    let message = if parents.is_empty() {
        "No data found"
    } else {
        "All Parents details"
    };

    Ok(ApiResponse::success(message, parents))
}

#[utoipa::path(
    post,
    path = "/api/stu-parents",
    request_body = CreateStuParentRequest,
    responses(
        (status = 201, description = "Parent record created", body = StuParentEnvelope),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Parents"
)]
#[instrument(skip(state))]
pub async fn create_parent(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateStuParentRequest>,
) -> Result<(StatusCode, ApiResponse<StuParent>), AppError> {
    let parent = StuParentService::create_parent(&state, dto).await?;
    info!(actor = %auth_user.user_id()?, parent_id = %parent.id, "parent record created");

    Ok((
        StatusCode::CREATED,
        ApiResponse::success("Parents details added successfully.", parent),
    ))
}

#[utoipa::path(
    get,
    path = "/api/stu-parents/{id}",
    params(
        ("id" = Uuid, Path, description = "Parent record ID")
    ),
    responses(
        (status = 200, description = "Parent record", body = StuParentEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Parent record not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Parents"
)]
#[instrument(skip(state))]
pub async fn get_parent(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    id: ResourceId,
) -> Result<ApiResponse<StuParent>, AppError> {
    let id = id.or_not_found(PARENT_NOT_FOUND)?;
    let parent = StuParentService::get_parent(&state, id).await?;

    Ok(ApiResponse::success("Requested parents details found.", parent))
}

#[utoipa::path(
    put,
    path = "/api/stu-parents/{id}",
    params(
        ("id" = Uuid, Path, description = "Parent record ID")
    ),
    request_body = UpdateStuParentRequest,
    responses(
        (status = 200, description = "Parent record updated", body = StuParentEnvelope),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Parent record not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Parents"
)]
#[instrument(skip(state))]
pub async fn update_parent(
    State(state): State<AppState>,
    auth_user: AuthUser,
    id: ResourceId,
    ValidatedJson(dto): ValidatedJson<UpdateStuParentRequest>,
) -> Result<ApiResponse<StuParent>, AppError> {
    let id = id.or_not_found(PARENT_NOT_FOUND)?;
    let parent = StuParentService::update_parent(&state, id, dto).await?;
    info!(actor = %auth_user.user_id()?, parent_id = %id, "parent record updated");

    Ok(ApiResponse::success(
        "Parents details updated successfully.",
        parent,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/stu-parents/{id}",
    params(
        ("id" = Uuid, Path, description = "Parent record ID")
    ),
    responses(
        (status = 200, description = "Parent record deleted; returns its last state", body = StuParentEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Parent record not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Parents"
)]
#[instrument(skip(state))]
pub async fn delete_parent(
    State(state): State<AppState>,
    auth_user: AuthUser,
    id: ResourceId,
) -> Result<ApiResponse<StuParent>, AppError> {
    let id = id.or_not_found(PARENT_NOT_FOUND)?;
    let parent = StuParentService::delete_parent(&state, id).await?;
    info!(actor = %auth_user.user_id()?, parent_id = %id, "parent record deleted");

    Ok(ApiResponse::success(
        "Parents details deleted successfully.",
        parent,
    ))
}
