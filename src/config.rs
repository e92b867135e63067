//! Configuration handling for the portal

use crate::api::DEFAULT_API_BASE_URL;
use crate::state::DEFAULT_SIDEBAR_WIDTH;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "SCHOOL_PORTAL_API_URL";

/// Request timeout used when none is configured
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// User configuration for the portal
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PortalConfig {
    /// Base address of the submissions API
    pub api_base_url: Option<String>,
    /// Request timeout in seconds (0 waits indefinitely)
    pub request_timeout_secs: Option<u64>,
    /// Initial sidebar width in pixels
    pub sidebar_width: Option<u16>,
}

impl PortalConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "school", "school-portal")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: PortalConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded configuration from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// API base URL: environment, then config file, then the built-in default
    pub fn api_base_url(&self) -> String {
        self.resolve_api_base_url(std::env::var(API_URL_ENV).ok())
    }

    fn resolve_api_base_url(&self, env_override: Option<String>) -> String {
        env_override
            .filter(|url| !url.is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    /// Request timeout, `None` when disabled
    pub fn request_timeout(&self) -> Option<Duration> {
        match self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
        {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn sidebar_width(&self) -> u16 {
        self.sidebar_width.unwrap_or(DEFAULT_SIDEBAR_WIDTH)
    }
}
