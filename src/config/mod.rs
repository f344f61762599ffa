// Configuration layer - environment access, bootstrap settings, logging
pub mod bootstrap_settings;
pub mod env_provider;
pub mod logging;

pub use bootstrap_settings::{BootstrapSettings, SettingsError};
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
pub use logging::init_logging;
