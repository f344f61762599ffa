// Stores layer - Data access and repository pattern
pub mod credential_store;
pub mod role_store;
pub mod task_store;
pub mod user_store;

pub use credential_store::CredentialStore;
pub use role_store::RoleStore;
pub use task_store::TaskStore;
pub use user_store::UserStore;
