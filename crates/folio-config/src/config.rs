use crate::{ConfigError, ConfigErrorResult, DEFAULT_ENVIRONMENT, LoggingConfig, ServerConfig};

use std::env;
use std::str::FromStr;

use log::info;

/// Process configuration, resolved once at startup and never reloaded.
#[derive(Debug, Clone)]
pub struct Config {
    /// Deployment environment name, e.g. "development" or "production"
    pub environment: String,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: String::from(DEFAULT_ENVIRONMENT),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Loading order:
    /// 1. Load .env file if present (development convenience)
    /// 2. Start from defaults
    /// 3. Apply environment variable overrides
    ///    (APP_ENV, HOST, PORT, LOG_LEVEL, LOG_COLORED)
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let _ = dotenvy::dotenv();

        let mut config = Config::default();
        config.apply_env_overrides()?;

        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> ConfigErrorResult<()> {
        Self::apply_env_string("APP_ENV", &mut self.environment);
        Self::apply_env_string("HOST", &mut self.server.host);

        if let Ok(value) = env::var("PORT") {
            self.server.port = value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?;
        }

        if let Ok(value) = env::var("LOG_LEVEL") {
            // FromStr never fails, unknown levels fall back to Info
            self.logging.level = crate::LogLevel::from_str(&value).unwrap();
        }

        Self::apply_env_bool("LOG_COLORED", &mut self.logging.colored);

        Ok(())
    }

    fn apply_env_string(key: &str, target: &mut String) {
        if let Ok(value) = env::var(key) {
            *target = value;
        }
    }

    fn apply_env_bool(key: &str, target: &mut bool) {
        if let Ok(value) = env::var(key)
            && let Ok(parsed) = value.parse()
        {
            *target = parsed;
        }
    }

    /// Validate configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.environment.is_empty() {
            return Err(ConfigError::config("environment name must not be empty"));
        }

        if self.server.host.is_empty() {
            return Err(ConfigError::server("server.host must not be empty"));
        }

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  environment: {}", self.environment);
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }
}
