use tracing::{instrument, warn};
use uuid::Uuid;
use validator::Validate;

use schoolbook_core::errors::field_errors_from;
use schoolbook_core::password_policy::COMPROMISED_MESSAGE;
use schoolbook_core::{AppError, PasswordPolicy, hash_password_with_cost};
use schoolbook_models::{NewUser, RegisterRequest, UpdateUserRequest, User};

use crate::modules::users::repository::EMAIL_TAKEN;
use crate::state::AppState;

pub const USER_NOT_FOUND: &str = "User not found.";

pub struct UserService;

impl UserService {
    /// Runs the full account rule set and hashes the password.
    ///
    /// Field problems are collected into one 422 error. Email uniqueness is
    /// only checked once every field is valid and fails with a 409 conflict.
    /// `except` excludes the user being updated from the uniqueness check.
    #[instrument(skip(state, dto))]
    pub async fn validate_account(
        state: &AppState,
        dto: RegisterRequest,
        except: Option<Uuid>,
    ) -> Result<NewUser, AppError> {
        let mut errors = match dto.validate() {
            Ok(()) => Default::default(),
            Err(e) => field_errors_from(&e),
        };

        if let Some(password) = dto.password.as_deref() {
            let mut messages = PasswordPolicy::default().violations(password);
            if messages.is_empty() && Self::is_compromised(state, password).await {
                messages.push(COMPROMISED_MESSAGE.to_string());
            }
            if !messages.is_empty() {
                errors
                    .entry("password".to_string())
                    .or_insert_with(Vec::new)
                    .extend(messages);
            }
        }

        let (Some(name), Some(email), Some(password)) = (dto.name, dto.email, dto.password) else {
            return Err(AppError::validation(errors));
        };
        if !errors.is_empty() {
            return Err(AppError::validation(errors));
        }

        if state.users.email_taken(&email, except).await? {
            return Err(AppError::conflict("email", EMAIL_TAKEN));
        }

        let password_hash = hash_password_with_cost(&password, state.password_config.bcrypt_cost)?;

        Ok(NewUser {
            name,
            email,
            password_hash,
        })
    }

    // A failed lookup lets the password through rather than blocking sign-ups.
    async fn is_compromised(state: &AppState, password: &str) -> bool {
        match state.password_check.is_compromised(password).await {
            Ok(compromised) => compromised,
            Err(e) => {
                warn!(error = %e, "compromised password lookup failed");
                false
            }
        }
    }

    #[instrument(skip(state))]
    pub async fn get_users(state: &AppState) -> Result<Vec<User>, AppError> {
        state.users.list().await
    }

    #[instrument(skip(state))]
    pub async fn get_user(state: &AppState, id: Uuid) -> Result<User, AppError> {
        state
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))
    }

    /// The password is always re-hashed, even when unchanged.
    #[instrument(skip(state, dto))]
    pub async fn update_user(
        state: &AppState,
        id: Uuid,
        dto: UpdateUserRequest,
    ) -> Result<User, AppError> {
        Self::get_user(state, id).await?;

        let changes = Self::validate_account(state, dto, Some(id)).await?;

        state
            .users
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))
    }

    #[instrument(skip(state))]
    pub async fn delete_user(state: &AppState, id: Uuid) -> Result<(), AppError> {
        if state.users.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(USER_NOT_FOUND))
        }
    }
}
