//! # Schoolbook Auth
//!
//! Bearer token issuance and verification for the Schoolbook API.
//!
//! - [`claims`]: the JWT claim set carried by access tokens
//! - [`jwt`]: token creation and verification
//!
//! Tokens are HS256 JWTs whose subject is the user id. They are issued on
//! registration and login and presented as `Authorization: Bearer <token>`.
//!
//! # Example
//!
//! ```ignore
//! use schoolbook_auth::{create_access_token, verify_token};
//! use schoolbook_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user.id, &user.email, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.user_id()?, user.id);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
