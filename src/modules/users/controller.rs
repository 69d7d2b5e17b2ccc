use axum::extract::State;
use serde_json::{Value, json};
use tracing::{info, instrument};
use uuid::Uuid;

use schoolbook_core::{ApiResponse, AppError};
use schoolbook_models::{UpdateUserRequest, User};

use crate::docs::{EmptyEnvelope, ErrorResponse, UserEnvelope, UserListEnvelope};
use crate::middleware::auth::AuthUser;
use crate::modules::users::service::{USER_NOT_FOUND, UserService};
use crate::state::AppState;
use crate::validator::{JsonBody, ResourceId};

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = UserListEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<ApiResponse<Vec<User>>, AppError> {
    let users = UserService::get_users(&state).await?;

    let message = if users.is_empty() {
        "No user found."
    } else {
        "All users data"
    };

    Ok(ApiResponse::success(message, users))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = UserEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    id: ResourceId,
) -> Result<ApiResponse<User>, AppError> {
    let id = id.or_not_found(USER_NOT_FOUND)?;
    let user = UserService::get_user(&state, id).await?;

    Ok(ApiResponse::success("Retrieved single user data", user))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Email already taken", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    id: ResourceId,
    JsonBody(dto): JsonBody<UpdateUserRequest>,
) -> Result<ApiResponse<User>, AppError> {
    let id = id.or_not_found(USER_NOT_FOUND)?;
    let user = UserService::update_user(&state, id, dto).await?;
    info!(actor = %auth_user.user_id()?, user_id = %id, "user updated");

    Ok(ApiResponse::success("User updated successfully.", user))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = EmptyEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    id: ResourceId,
) -> Result<ApiResponse<Value>, AppError> {
    let id = id.or_not_found(USER_NOT_FOUND)?;
    UserService::delete_user(&state, id).await?;
    info!(actor = %auth_user.user_id()?, user_id = %id, "user deleted");

    Ok(ApiResponse::success("User deleted successfully.", json!([])))
}
