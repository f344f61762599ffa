// Database entities - SeaORM models
pub mod role;
pub mod task;
pub mod user;
pub mod user_role;
