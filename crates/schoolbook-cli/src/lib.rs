//! # Schoolbook CLI
//!
//! Administrative utilities backing the `schoolbook-cli` binary.
//!
//! - [`accounts`]: creating user accounts outside the HTTP API
//! - [`seeder`]: fake parent records for development databases
//!
//! ```ignore
//! use schoolbook_cli::seeder;
//!
//! let ids = seeder::seed_parents(&pool, 50).await?;
//! ```

pub mod accounts;
pub mod seeder;
