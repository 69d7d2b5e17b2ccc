use std::sync::OnceLock;

use tracing::instrument;
use validator::Validate;

use schoolbook_auth::create_access_token;
use schoolbook_core::errors::field_errors_from;
use schoolbook_core::{AppError, hash_password_with_cost, verify_password};
use schoolbook_models::{LoginRequest, RegisterRequest, User};

use crate::metrics::{track_jwt_issued, track_user_login, track_user_registered};
use crate::modules::users::service::UserService;
use crate::state::AppState;

pub const LOGIN_FAILED: &str = "User login failed.";

static DUMMY_HASH: OnceLock<String> = OnceLock::new();

/// Hash checked against when the email is unknown, so a miss costs the same
/// bcrypt work as a wrong password.
fn dummy_hash(cost: u32) -> Result<&'static str, AppError> {
    if let Some(hash) = DUMMY_HASH.get() {
        return Ok(hash);
    }
    let hash = hash_password_with_cost("schoolbook-login-placeholder", cost)?;
    Ok(DUMMY_HASH.get_or_init(|| hash))
}

pub struct AuthService;

impl AuthService {
    /// Creates the account and issues its first bearer token.
    #[instrument(skip(state, dto))]
    pub async fn register_user(
        state: &AppState,
        dto: RegisterRequest,
    ) -> Result<(User, String), AppError> {
        let new_user = UserService::validate_account(state, dto, None).await?;
        let user = state.users.create(new_user).await?;
        track_user_registered();

        let token = create_access_token(user.id, &user.email, &state.jwt_config)?;
        track_jwt_issued();

        tracing::info!(user_id = %user.id, "user registered");
        Ok((user, token))
    }

    /// Unknown email and wrong password fail identically.
    #[instrument(skip(state, dto))]
    pub async fn login_user(state: &AppState, dto: LoginRequest) -> Result<String, AppError> {
        dto.validate()
            .map_err(|e| AppError::validation(field_errors_from(&e)))?;

        let (Some(email), Some(password)) = (dto.email, dto.password) else {
            return Err(AppError::unauthorized(LOGIN_FAILED));
        };

        let Some(credentials) = state.users.find_credentials(&email).await? else {
            verify_password(&password, dummy_hash(state.password_config.bcrypt_cost)?)?;
            track_user_login(false);
            return Err(AppError::unauthorized(LOGIN_FAILED));
        };

        if !verify_password(&password, &credentials.password)? {
            track_user_login(false);
            return Err(AppError::unauthorized(LOGIN_FAILED));
        }

        let token = create_access_token(credentials.id, &credentials.email, &state.jwt_config)?;
        track_user_login(true);
        track_jwt_issued();

        Ok(token)
    }
}
