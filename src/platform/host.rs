//! API base URL resolution from multiple sources

use log::debug;

use crate::config::{defaults, host as host_config};
use crate::error::{BlError, Result};

/// API URL resolution with fallback logic
pub struct ApiResolver;

impl ApiResolver {
    /// Resolve the API base URL with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (BL_API_URL)
    /// 3. Built-in default
    pub fn resolve(cli_api: Option<&str>) -> Result<String> {
        let url = if let Some(url) = cli_api {
            debug!("Using API URL from CLI argument: {}", url);
            url.to_string()
        } else if let Ok(url) = std::env::var(host_config::ENV_VAR) {
            debug!(
                "Using API URL from {} environment variable: {}",
                host_config::ENV_VAR,
                url
            );
            url
        } else {
            debug!("Using default API URL: {}", defaults::API_URL);
            defaults::API_URL.to_string()
        };

        Self::validate(&url)?;
        Ok(url.trim_end_matches('/').to_string())
    }

    fn validate(url: &str) -> Result<()> {
        if url.starts_with("https://") || url.starts_with("http://") {
            Ok(())
        } else {
            Err(BlError::Config(format!(
                "API URL '{}' must start with http:// or https:// (set via --api or {})",
                url,
                host_config::ENV_VAR
            )))
        }
    }
}
