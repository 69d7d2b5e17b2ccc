pub mod auth;
pub mod stu_parents;
pub mod users;
