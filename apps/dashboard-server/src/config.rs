//! Layered server configuration
//!
//! Precedence, lowest first: built-in defaults, optional YAML file,
//! `DASHBOARD__*` environment variables, legacy `PORT` / `FRONTEND_URL`.
//! CLI flags are applied by the binary on top of the extracted value.

use anyhow::{Context, Result};
use dashboard_service::config::Config as DashboardConfig;
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_PREFIX: &str = "DASHBOARD__";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tried once when `port` is already taken
    pub fallback_port: u16,
    /// Allowed CORS origin
    pub frontend_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            fallback_port: 40001,
            frontend_url: "http://localhost:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` wins when set
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Defaults merged with the YAML file, without any environment layer
    pub fn file_figment(path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            if !path.exists() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }
        Ok(figment)
    }

    /// Full provider chain used by the server
    pub fn figment(path: Option<&Path>) -> Result<Figment> {
        let legacy = Env::raw().only(&["PORT", "FRONTEND_URL"]).map(|key| {
            if key == "port" {
                "server.port".into()
            } else {
                "server.frontend_url".into()
            }
        });

        Ok(Self::file_figment(path)?
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(legacy))
    }

    pub fn extract(figment: &Figment) -> Result<Self> {
        figment
            .extract()
            .context("failed to extract server configuration")
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::extract(&Self::figment(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = AppConfig::extract(&AppConfig::file_figment(None).unwrap()).unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 4000);
        assert_eq!(cfg.server.fallback_port, 40001);
        assert_eq!(cfg.server.frontend_url, "http://localhost:3000");
        assert_eq!(cfg.logging.level, "info");
        assert!(!cfg.logging.json);
        assert_eq!(cfg.dashboard.mock_seed, None);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = AppConfig::file_figment(Some(Path::new("/definitely/not/here.yaml")));
        assert!(err.is_err());
    }
}
