//! Student parent records.

pub mod controller;
pub mod repository;
pub mod router;
pub mod service;
