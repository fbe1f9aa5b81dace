use crate::{env_or_default, ConfigError, FromEnv};
use std::time::Duration;

/// Configuration for the reference-data cache layer.
#[derive(Clone, Debug)]
pub struct CacheConfig {
    /// How long a cached snapshot stays fresh before the next request
    /// triggers a reload from the source.
    pub ttl: Duration,
}

impl CacheConfig {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }
}

impl FromEnv for CacheConfig {
    /// Reads UNIVERSITY_CACHE_TTL_SECS (defaults to 3600 = 1 hour).
    fn from_env() -> Result<Self, ConfigError> {
        let secs: u64 = env_or_default("UNIVERSITY_CACHE_TTL_SECS", "3600")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "UNIVERSITY_CACHE_TTL_SECS".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            ttl: Duration::from_secs(secs),
        })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(3600),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_one_hour() {
        temp_env::with_var_unset("UNIVERSITY_CACHE_TTL_SECS", || {
            let config = CacheConfig::from_env().unwrap();
            assert_eq!(config.ttl, Duration::from_secs(3600));
        });
    }

    #[test]
    fn test_ttl_override() {
        temp_env::with_var("UNIVERSITY_CACHE_TTL_SECS", Some("60"), || {
            let config = CacheConfig::from_env().unwrap();
            assert_eq!(config.ttl, Duration::from_secs(60));
        });
    }

    #[test]
    fn test_invalid_ttl() {
        temp_env::with_var("UNIVERSITY_CACHE_TTL_SECS", Some("soon"), || {
            let err = CacheConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("UNIVERSITY_CACHE_TTL_SECS"));
        });
    }
}
