//! # Schoolbook Core
//!
//! Core types, errors, and utilities for the Schoolbook API.
//!
//! This crate provides foundational types used throughout the Schoolbook application:
//!
//! - [`errors`]: Classified application errors rendered as the response envelope
//! - [`response`]: The `{status, message, data, token?}` success envelope
//! - [`password`]: bcrypt password hashing and verification
//! - [`password_policy`]: Composition rules for user passwords
//! - [`breach`]: Known-compromised password lookups
//! - [`serde`]: Custom serde serialization helpers
//!
//! # Example
//!
//! ```ignore
//! use schoolbook_core::{AppError, ApiResponse};
//! use schoolbook_core::password::{hash_password_with_cost, verify_password};
//!
//! // Create an error
//! let error = AppError::not_found("User not found.");
//!
//! // Hash a password
//! let hash = hash_password_with_cost("Secur3!pass", 12)?;
//!
//! // Wrap a payload
//! let response = ApiResponse::success("All users data", users);
//! ```

pub mod breach;
pub mod errors;
pub mod password;
pub mod password_policy;
pub mod response;
pub mod serde;

// Re-export commonly used types at crate root
pub use breach::{CommonPasswordList, CompromisedPasswordCheck, PwnedPasswords};
pub use errors::{AppError, ErrorMessage, FieldErrors};
pub use password::{hash_password_with_cost, verify_password};
pub use password_policy::PasswordPolicy;
pub use response::ApiResponse;
