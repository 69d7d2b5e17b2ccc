//! Login request and issued-token payload.

use schoolbook_core::serde::deserialize_email;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "deserialize_email")]
    #[validate(
        required(message = "The email field is required."),
        email(message = "The email field must be a valid email address.")
    )]
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[validate(required(message = "The password field is required."))]
    #[schema(example = "Str0ng!Pass")]
    pub password: Option<String>,
}

/// `data` of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}
