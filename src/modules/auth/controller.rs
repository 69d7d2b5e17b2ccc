use axum::{extract::State, http::StatusCode};
use tracing::instrument;

use schoolbook_core::{ApiResponse, AppError};
use schoolbook_models::{LoginRequest, RegisterRequest, TokenResponse, User};

use crate::docs::{ErrorResponse, RegisterEnvelope, TokenEnvelope};
use crate::modules::auth::service::AuthService;
use crate::state::AppState;
use crate::validator::JsonBody;

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created, token issued", body = RegisterEnvelope),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 409, description = "Email already taken", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, ApiResponse<User>), AppError> {
    let (user, token) = AuthService::register_user(&state, dto).await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::success("User create successfully.", user).with_token(token),
    ))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenEnvelope),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<LoginRequest>,
) -> Result<ApiResponse<TokenResponse>, AppError> {
    let token = AuthService::login_user(&state, dto).await?;

    Ok(ApiResponse::success(
        "User logged in successfully.",
        TokenResponse { token },
    ))
}

/// Log in (legacy alias of `POST /api/auth/login`)
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenEnvelope),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn store_user(
    state: State<AppState>,
    dto: JsonBody<LoginRequest>,
) -> Result<ApiResponse<TokenResponse>, AppError> {
    login_user(state, dto).await
}
