//! # Monitoring Configuration
//!
//! Layered configuration for service identity defaults and logging.
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults
//! 2. `config/monitoring.{toml,yaml,json}` (optional), or an explicit file
//! 3. `MONITORING_*` environment variables, `__` separating sections
//!    (e.g. `MONITORING_SERVICE__DEFAULT_ID=billing`)

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::manifest::Manifest;

pub const DEFAULT_CONFIG_FILE: &str = "config/monitoring";
pub const ENV_PREFIX: &str = "MONITORING";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MonitoringConfig {
    pub service: ServiceConfig,
    pub instance: InstanceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Service id used when the manifest carries no `Service-Id`.
    pub default_id: String,
    pub manifest_path: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_id: "unknown-service".to_string(),
            manifest_path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct InstanceConfig {
    /// Fixed instance id; a random one is generated when unset.
    pub instance_id: Option<String>,
    pub host_address: String,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            instance_id: None,
            host_address: "127.0.0.1".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub environment: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            json: false,
        }
    }
}

impl MonitoringConfig {
    /// Load from the default file location and the process environment.
    pub fn load() -> Result<Self> {
        Self::build(None, None)
    }

    /// Load from an explicit file (which must exist) and the process environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::build(Some(path.as_ref()), None)
    }

    fn build(
        path: Option<&Path>,
        env_source: Option<::config::Map<String, String>>,
    ) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config: MonitoringConfig = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(env_source),
            )
            .build()?
            .try_deserialize()?;

        info!(
            environment = %config.logging.environment,
            default_service_id = %config.service.default_id,
            manifest_path = ?config.service.manifest_path,
            "Monitoring configuration loaded"
        );

        Ok(config)
    }

    /// Manifest at `service.manifest_path`, or an empty manifest when unset.
    pub fn load_manifest(&self) -> Result<Manifest> {
        match &self.service.manifest_path {
            Some(path) => Manifest::from_file(path),
            None => Ok(Manifest::new()),
        }
    }
}
