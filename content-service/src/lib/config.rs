use std::env;
use std::time::Duration;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Application configuration for content-service.
///
/// Loaded from configuration files with environment variable overrides.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

/// Record store configuration.
///
/// A `memory://` url selects the in-process store instead of PostgreSQL.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub query_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    pub request_timeout_secs: u64,
}

/// Token signing configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_minutes: i64,
}

impl DatabaseConfig {
    pub const MEMORY_URL: &'static str = "memory://";

    pub fn is_memory(&self) -> bool {
        self.url == Self::MEMORY_URL
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl JwtConfig {
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.expiration_minutes)
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides.
    ///
    /// # Configuration Priority (highest to lowest)
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. Built-in defaults for everything except the database url and jwt secret
    ///
    /// # Errors
    /// Returns error if required configuration values are missing or invalid
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("database.max_connections", 5)?
            .set_default("database.acquire_timeout_secs", 5)?
            .set_default("database.query_timeout_secs", 5)?
            .set_default("server.http_port", 8080)?
            .set_default("server.request_timeout_secs", 30)?
            .set_default("jwt.expiration_minutes", 30)?
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject values that would make the service insecure or unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.trim().is_empty() {
            return Err(ConfigError::Message("jwt.secret must not be empty".into()));
        }
        if self.jwt.expiration_minutes <= 0 {
            return Err(ConfigError::Message(
                "jwt.expiration_minutes must be positive".into(),
            ));
        }
        if self.database.query_timeout_secs == 0 || self.database.acquire_timeout_secs == 0 {
            return Err(ConfigError::Message(
                "database timeouts must be positive".into(),
            ));
        }
        if self.server.request_timeout_secs == 0 {
            return Err(ConfigError::Message(
                "server.request_timeout_secs must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            database: DatabaseConfig {
                url: DatabaseConfig::MEMORY_URL.to_string(),
                max_connections: 5,
                acquire_timeout_secs: 5,
                query_timeout_secs: 5,
            },
            server: ServerConfig {
                http_port: 0,
                request_timeout_secs: 30,
            },
            jwt: JwtConfig {
                secret: "test-secret-key-for-jwt-signing-at-least-32-bytes".to_string(),
                expiration_minutes: 30,
            },
        }
    }

    #[test]
    fn test_valid_config() {
        let config = config();
        assert!(config.validate().is_ok());
        assert!(config.database.is_memory());
        assert_eq!(config.jwt.token_ttl(), chrono::Duration::minutes(30));
        assert_eq!(config.database.query_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_empty_secret_rejected() {
        let mut config = config();
        config.jwt.secret = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_positive_ttl_rejected() {
        let mut config = config();
        config.jwt.expiration_minutes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeouts_rejected() {
        let mut config = config();
        config.database.query_timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = self::config();
        config.server.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
