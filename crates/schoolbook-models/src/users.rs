//! User entity and DTOs.
//!
//! [`User`] is the only user shape that is ever serialized; the password hash
//! lives on [`UserCredentials`], which is read solely for login.

use chrono::{DateTime, Utc};
use schoolbook_core::serde::{deserialize_email, deserialize_trimmed};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub email_verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Login lookup row. Never leaves the service layer.
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    pub id: Uuid,
    pub email: String,
    pub password: String,
}

/// Registration payload.
///
/// Password composition and breach checks run in the service on top of these
/// rules, and email uniqueness is checked against the store. Name and email
/// arrive trimmed, the email lowercased; a blank value counts as missing.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    #[validate(
        required(message = "The name field is required."),
        length(
            min = 3,
            max = 30,
            message = "The name field must be between 3 and 30 characters."
        )
    )]
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
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

/// Updates re-apply the full registration rule set.
pub type UpdateUserRequest = RegisterRequest;

/// A validated user ready to be stored.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            password: Some("Str0ng!Pass".to_string()),
        }
    }

    #[test]
    fn test_register_request_valid() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_register_request_missing_fields() {
        let errors = RegisterRequest::default().validate().unwrap_err();
        let fields = errors.field_errors();

        assert_eq!(fields.len(), 3);
        assert_eq!(
            fields["name"][0].message.as_deref(),
            Some("The name field is required.")
        );
    }

    #[test]
    fn test_register_request_name_length() {
        let mut request = valid_request();
        request.name = Some("Jo".to_string());
        assert!(request.validate().is_err());

        request.name = Some("J".repeat(31));
        assert!(request.validate().is_err());

        request.name = Some("J".repeat(30));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_invalid_email() {
        let mut request = valid_request();
        request.email = Some("invalid-email".to_string());

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_register_request_ignores_unknown_fields() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"name":"Jane Doe","email":"jane@example.com","password":"x","is_admin":true}"#,
        )
        .unwrap();
        assert_eq!(request.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_register_request_blank_name_is_missing() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"name":"   ","email":"  Jane@Example.COM ","password":" Str0ng!Pass "}"#,
        )
        .unwrap();

        assert!(request.name.is_none());
        assert_eq!(request.email.as_deref(), Some("jane@example.com"));
        assert_eq!(request.password.as_deref(), Some(" Str0ng!Pass "));

        let errors = request.validate().unwrap_err();
        assert_eq!(
            errors.field_errors()["name"][0].message.as_deref(),
            Some("The name field is required.")
        );
    }

    #[test]
    fn test_register_request_length_counts_trimmed_name() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"name":"  Jo  ","email":"jane@example.com","password":"x"}"#,
        )
        .unwrap();
        assert_eq!(request.name.as_deref(), Some("Jo"));
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_user_serialization_has_no_password() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let user = User {
            id: Uuid::new_v4(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            email_verified_at: None,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["email"], "jane@example.com");
    }
}
