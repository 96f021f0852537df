// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{ClientError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    pub polling: PollingConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub placeholder_fallback: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollingConfig {
    pub interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadConfig {
    pub allowed_extensions: Vec<String>,
    pub max_file_size_mb: u64,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("DOC_INSIGHT")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8000/api".to_string(),
                timeout_secs: 30,
                placeholder_fallback: true,
            },
            polling: PollingConfig { interval_secs: 3 },
            upload: UploadConfig {
                allowed_extensions: vec![
                    "pdf".to_string(),
                    "html".to_string(),
                    "htm".to_string(),
                    "txt".to_string(),
                ],
                max_file_size_mb: 50,
            },
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.polling.interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(ClientError::Config(
                "api.base_url must not be empty".to_string(),
            ));
        }

        if self.polling.interval_secs == 0 {
            return Err(ClientError::Config(
                "polling.interval_secs must be greater than 0".to_string(),
            ));
        }

        if self.upload.max_file_size_mb == 0 {
            return Err(ClientError::Config(
                "upload.max_file_size_mb must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.poll_interval(), Duration::from_secs(3));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut config = Config::default_config();
        config.polling.interval_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let mut config = Config::default_config();
        config.api.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
