use std::sync::Arc;

use crate::config::EnvironmentProvider;

/// Session secret shipped for local/demo use. Any real deployment must
/// override SESSION_SECRET.
const DEFAULT_SESSION_SECRET: &str = "taskhub-demo-secret-change-in-production";

/// Bootstrap settings for infrastructure configuration
///
/// Everything the process needs before it can serve a request: where the
/// database lives, where to listen, and the secret used to key session
/// tokens. Defaults exist for local/demo use only.
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    session_secret: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

impl BootstrapSettings {
    /// Load bootstrap settings from the given environment provider
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, SettingsError> {
        let database_url = env_provider
            .get_var("DATABASE_URL")
            .unwrap_or_else(|| "sqlite://taskhub.db?mode=rwc".to_string());

        let server_host = env_provider
            .get_var("HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let port_value = env_provider
            .get_var("PORT")
            .unwrap_or_else(|| "3000".to_string());
        let server_port: u16 =
            port_value
                .parse()
                .map_err(|_| SettingsError::InvalidValue {
                    key: "PORT".to_string(),
                    value: port_value,
                })?;

        let session_secret = env_provider
            .get_var("SESSION_SECRET")
            .unwrap_or_else(|| DEFAULT_SESSION_SECRET.to_string());

        if session_secret == DEFAULT_SESSION_SECRET {
            tracing::warn!("SESSION_SECRET not set, using demo default");
        }

        Ok(Self {
            database_url,
            server_host,
            server_port,
            session_secret,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, SettingsError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn session_secret(&self) -> &str {
        &self.session_secret
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl std::fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("session_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env_provider::MockEnvironment;

    #[test]
    fn defaults_apply_when_env_is_empty() {
        let settings =
            BootstrapSettings::from_env_provider(Arc::new(MockEnvironment::empty())).unwrap();

        assert_eq!(settings.database_url(), "sqlite://taskhub.db?mode=rwc");
        assert_eq!(settings.bind_address(), "0.0.0.0:3000");
        assert_eq!(settings.session_secret(), DEFAULT_SESSION_SECRET);
    }

    #[test]
    fn env_values_override_defaults() {
        let env = MockEnvironment::empty()
            .with_var("DATABASE_URL", "sqlite://other.db?mode=rwc")
            .with_var("HOST", "127.0.0.1")
            .with_var("PORT", "8088")
            .with_var("SESSION_SECRET", "real-secret");
        let settings = BootstrapSettings::from_env_provider(Arc::new(env)).unwrap();

        assert_eq!(settings.database_url(), "sqlite://other.db?mode=rwc");
        assert_eq!(settings.bind_address(), "127.0.0.1:8088");
        assert_eq!(settings.session_secret(), "real-secret");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let env = MockEnvironment::empty().with_var("PORT", "not-a-port");
        let result = BootstrapSettings::from_env_provider(Arc::new(env));
        assert!(result.is_err());
    }
}
