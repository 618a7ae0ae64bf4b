//! Application configuration
//!
//! Configuration is loaded from a TOML file with serde defaults for every
//! field, so a partial (or absent) file always yields a usable config. When
//! the file does not exist a default one is written in its place.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

/// HTTP transport configuration shared by all extractors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connection timeout in seconds (no total request timeout is applied)
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; vidgrab/0.1)".to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
}

impl Config {
    pub fn load_from_file(config_file: &str) -> Result<Self> {
        if std::path::Path::new(&config_file).exists() {
            let contents = std::fs::read_to_string(config_file)?;
            Ok(toml::from_str(&contents)?)
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            std::fs::write(config_file, contents)?;
            info!("Created default config file: {}", config_file);
            Ok(default_config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[http]\nconnect_timeout_secs = 3\n").unwrap();
        assert_eq!(config.http.connect_timeout_secs, 3);
        assert_eq!(config.http.user_agent, default_user_agent());
    }

    #[test]
    fn test_empty_file_is_fully_defaulted() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.http.connect_timeout_secs, 10);
    }
}
