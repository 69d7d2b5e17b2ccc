//! OpenAPI document served by Swagger UI and Scalar.
//!
//! The envelope types below only describe response bodies; handlers build
//! [`ApiResponse`](schoolbook_core::ApiResponse) values.

use serde_json::Value;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use schoolbook_models::{
    CreateStuParentRequest, LoginRequest, RegisterRequest, StuParent, TokenResponse,
    UpdateStuParentRequest, User,
};

/// Failure envelope. `message` is a string or a map of field to messages.
#[derive(ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub status: bool,
    #[schema(value_type = Object, example = json!({"email": ["The email has already been taken."]}))]
    pub message: Value,
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<Value>,
}

#[derive(ToSchema)]
pub struct RegisterEnvelope {
    pub status: bool,
    #[schema(example = "User create successfully.")]
    pub message: String,
    pub data: User,
    pub token: String,
}

#[derive(ToSchema)]
pub struct TokenEnvelope {
    pub status: bool,
    #[schema(example = "User logged in successfully.")]
    pub message: String,
    pub data: TokenResponse,
}

#[derive(ToSchema)]
pub struct UserEnvelope {
    pub status: bool,
    pub message: String,
    pub data: User,
}

#[derive(ToSchema)]
pub struct UserListEnvelope {
    pub status: bool,
    #[schema(example = "All users data")]
    pub message: String,
    pub data: Vec<User>,
}

#[derive(ToSchema)]
pub struct StuParentEnvelope {
    pub status: bool,
    pub message: String,
    pub data: StuParent,
}

#[derive(ToSchema)]
pub struct StuParentListEnvelope {
    pub status: bool,
    #[schema(example = "All Parents details")]
    pub message: String,
    pub data: Vec<StuParent>,
}

#[derive(ToSchema)]
pub struct EmptyEnvelope {
    pub status: bool,
    #[schema(example = "User deleted successfully.")]
    pub message: String,
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<Value>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::store_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
        crate::modules::stu_parents::controller::get_parents,
        crate::modules::stu_parents::controller::create_parent,
        crate::modules::stu_parents::controller::get_parent,
        crate::modules::stu_parents::controller::update_parent,
        crate::modules::stu_parents::controller::delete_parent,
    ),
    components(
        schemas(
            User,
            RegisterRequest,
            LoginRequest,
            TokenResponse,
            StuParent,
            CreateStuParentRequest,
            UpdateStuParentRequest,
            ErrorResponse,
            RegisterEnvelope,
            TokenEnvelope,
            UserEnvelope,
            UserListEnvelope,
            StuParentEnvelope,
            StuParentListEnvelope,
            EmptyEnvelope,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Users", description = "User management endpoints"),
        (name = "Parents", description = "Student parent records")
    ),
    info(
        title = "Schoolbook API",
        version = "0.1.0",
        description = "School management REST API built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
