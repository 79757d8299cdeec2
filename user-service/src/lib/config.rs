use std::env;
use std::time::Duration;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    pub grpc_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct AuthConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    #[serde(default = "default_access_ttl_seconds")]
    pub access_ttl_seconds: u64,
    #[serde(default = "default_refresh_ttl_seconds")]
    pub refresh_ttl_seconds: u64,
    #[serde(default)]
    pub audience: Option<String>,
}

fn default_access_ttl_seconds() -> u64 {
    30 * 60
}

fn default_refresh_ttl_seconds() -> u64 {
    7 * 24 * 60 * 60
}

impl AuthConfig {
    /// Token service settings. Validation happens in `TokenService::new`.
    pub fn token_config(&self) -> auth::TokenConfig {
        auth::TokenConfig {
            access_secret: self.access_secret.as_bytes().to_vec(),
            refresh_secret: self.refresh_secret.as_bytes().to_vec(),
            access_ttl: Duration::from_secs(self.access_ttl_seconds),
            refresh_ttl: Duration::from_secs(self.refresh_ttl_seconds),
            audience: self.audience.clone(),
        }
    }
}

// Secrets stay out of logs.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("access_secret", &"***")
            .field("refresh_secret", &"***")
            .field("access_ttl_seconds", &self.access_ttl_seconds)
            .field("refresh_ttl_seconds", &self.refresh_ttl_seconds)
            .field("audience", &self.audience)
            .finish()
    }
}

/// Environment variables, `__` separating section and key.
///
/// No prefix: `with_prefix("")` would make `__` itself the prefix and match nothing.
fn environment() -> Environment {
    Environment::default().separator("__")
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, AUTH__ACCESS_SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: AUTH__ACCESS_SECRET=... overrides auth.access_secret
            .add_source(environment())
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}
