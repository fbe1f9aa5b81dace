use axum_helpers::JwtConfig;
use core_config::{app_info, cache::CacheConfig, server::ServerConfig, AppInfo, FromEnv};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub cache: CacheConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let jwt = JwtConfig::from_env()?; // Required - will fail if not set
        let cache = CacheConfig::from_env()?; // Defaults to a 1 hour TTL

        Ok(Self {
            app: app_info!(),
            server,
            jwt,
            cache,
            environment,
        })
    }
}
