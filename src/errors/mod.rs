// Errors layer - Error type definitions
pub mod api;
pub mod internal;

// Re-exports for convenience
pub use api::{admin, auth, task, user};
pub use api::{AdminError, AuthError, TaskError, UserError};
pub use internal::InternalError;
