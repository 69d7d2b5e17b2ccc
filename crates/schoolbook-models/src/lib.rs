//! # Schoolbook Models
//!
//! Domain models and DTOs for the Schoolbook API.
//!
//! # Modules
//!
//! - [`auth`]: Login request and token payload
//! - [`users`]: User entity, credentials row, registration/update DTOs
//! - [`stu_parents`]: Student parent entity and its DTOs
//!
//! Request DTOs deserialize every field as `Option` so that a missing field is
//! reported by validation ("The name field is required.") instead of failing
//! JSON extraction.
//!
//! # Example
//!
//! ```ignore
//! use schoolbook_models::users::RegisterRequest;
//! use validator::Validate;
//!
//! let request: RegisterRequest = serde_json::from_str(body)?;
//! request.validate()?;
//! ```

pub mod auth;
pub mod stu_parents;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{LoginRequest, TokenResponse};
pub use stu_parents::{CreateStuParentRequest, StuParent, UpdateStuParentRequest};
pub use users::{NewUser, RegisterRequest, UpdateUserRequest, User, UserCredentials};
