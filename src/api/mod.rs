// API layer - HTTP endpoints
pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod tasks;
pub mod user;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use dashboard::DashboardApi;
pub use health::HealthApi;
pub use tasks::TaskApi;
pub use user::UserApi;

use poem_openapi::auth::ApiKey;
use poem_openapi::SecurityScheme;

/// Name of the session cookie issued at login
pub const SESSION_COOKIE: &str = "taskhub_session";

/// Session cookie authentication
///
/// The cookie carries an opaque token; endpoints resolve it against the
/// session service to recover the principal.
#[derive(SecurityScheme)]
#[oai(ty = "api_key", key_name = "taskhub_session", key_in = "cookie")]
pub struct SessionAuth(pub ApiKey);
