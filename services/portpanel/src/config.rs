//! Configuration types for the port panel

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub watch: WatchConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Which backend API shape to talk to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BackendConfig {
    /// String status, discrete open/close commands and a line-based log
    #[serde(rename = "discrete")]
    Discrete {
        #[serde(default = "default_base_url")]
        base_url: String,
        #[serde(default = "default_log_type")]
        log_type: String,
        /// Address a single port via `/api/status/{port}` and friends
        #[serde(default)]
        port: Option<String>,
    },
    /// Boolean status, a single toggle command and a structured log
    #[serde(rename = "toggle")]
    Toggle {
        #[serde(default = "default_base_url")]
        base_url: String,
    },
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig::Discrete {
            base_url: default_base_url(),
            log_type: default_log_type(),
            port: None,
        }
    }
}

impl BackendConfig {
    pub fn base_url(&self) -> &str {
        match self {
            BackendConfig::Discrete { base_url, .. } | BackendConfig::Toggle { base_url } => {
                base_url
            }
        }
    }

    pub fn set_base_url(&mut self, url: String) {
        match self {
            BackendConfig::Discrete { base_url, .. } | BackendConfig::Toggle { base_url } => {
                *base_url = url
            }
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            BackendConfig::Discrete { .. } => "discrete",
            BackendConfig::Toggle { .. } => "toggle",
        }
    }
}

/// Watch loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_polling_interval")]
    pub polling_interval_seconds: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            polling_interval_seconds: default_polling_interval(),
        }
    }
}

/// Local web page configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_dashboard_port")]
    pub port: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            port: default_dashboard_port(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_log_type() -> String {
    "event".to_string()
}

fn default_polling_interval() -> u64 {
    5
}

fn default_dashboard_port() -> u16 {
    11120
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::PanelError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    if config.watch.polling_interval_seconds == 0 {
        return Err(crate::PanelError::Config(
            "watch.polling_interval_seconds must be greater than zero".to_string(),
        ));
    }
    Ok(config)
}
