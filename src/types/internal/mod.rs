// Internal value types - never serialized to clients directly
pub mod principal;
pub mod roles;
pub mod task;

pub use principal::Principal;
pub use roles::{Role, RoleSet};
pub use task::{TaskPriority, TaskStatus};
