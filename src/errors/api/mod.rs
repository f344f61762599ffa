// API-facing error types
pub mod admin;
pub mod auth;
pub mod task;
pub mod user;

// Re-exports for convenience
pub use admin::AdminError;
pub use auth::AuthError;
pub use task::TaskError;
pub use user::UserError;
