//! Infrastructure implementation of the `ConfigStore` port.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::application::ports::ConfigStore;
use crate::domain::config::FleetConfig;

/// Production implementation of `ConfigStore` that uses a YAML file on disk.
///
/// Environment overrides are captured at construction so the store itself
/// never reads the process environment.
#[derive(Debug, Default, Clone)]
pub struct YamlConfigStore {
    /// Explicit config file path (`FLEET_CONFIG`).
    pub path_override: Option<PathBuf>,
    /// `FLEET_API_URL`
    pub api_url: Option<String>,
    /// `FLEET_TOKEN`
    pub token: Option<String>,
}

impl YamlConfigStore {
    /// Build a store from `FLEET_CONFIG`, `FLEET_API_URL` and `FLEET_TOKEN`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            path_override: std::env::var_os("FLEET_CONFIG").map(PathBuf::from),
            api_url: std::env::var("FLEET_API_URL").ok(),
            token: std::env::var("FLEET_TOKEN").ok(),
        }
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<FleetConfig> {
        let path = self.path()?;
        let config = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            serde_yaml::from_str(&content)
                .with_context(|| format!("cannot parse {}", path.display()))?
        } else {
            FleetConfig::default()
        };
        Ok(config.with_overrides(self.api_url.clone(), self.token.clone()))
    }

    fn path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.path_override {
            return Ok(path.clone());
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".fleet").join("config.yaml"))
    }
}
