// Services layer - Domain logic
pub mod access_policy;
pub mod auth_service;
pub mod crypto;
pub mod role_resolver;
pub mod session_service;

pub use auth_service::AuthService;
pub use role_resolver::RoleResolver;
pub use session_service::SessionService;
