//! User accounts: listing, lookup, update and deletion.

pub mod controller;
pub mod repository;
pub mod router;
pub mod service;
