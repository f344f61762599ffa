// DTO layer - request/response models exposed via the API
pub mod admin;
pub mod auth;
pub mod common;
pub mod task;
pub mod user;
