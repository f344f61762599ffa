pub mod admin_coordinator;
pub mod auth_coordinator;
pub mod task_coordinator;
pub mod user_coordinator;

pub use admin_coordinator::AdminCoordinator;
pub use auth_coordinator::AuthCoordinator;
pub use task_coordinator::TaskCoordinator;
pub use user_coordinator::UserCoordinator;
