//! Global configuration types for Botforge.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls the
//! HTTP server bind address. Loaded from `~/.botforge/config.toml`; all
//! fields have sensible defaults.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Botforge backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// HTTP server settings for `bforge serve`.
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
        }
    }
}

/// HTTP server bind settings. CLI flags take precedence over these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
