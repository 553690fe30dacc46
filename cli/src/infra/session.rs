//! Config-backed implementation of the `SessionChecker` port.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::SessionChecker;
use crate::domain::config::FleetConfig;
use crate::domain::error::EnvError;

/// Treats the presence of a non-blank token in the resolved config as a session.
pub struct ConfigSession<'a> {
    config: &'a FleetConfig,
    config_path: PathBuf,
}

impl<'a> ConfigSession<'a> {
    #[must_use]
    pub fn new(config: &'a FleetConfig, config_path: PathBuf) -> Self {
        Self {
            config,
            config_path,
        }
    }
}

impl SessionChecker for ConfigSession<'_> {
    fn check_logged_in(&self) -> Result<()> {
        if self.config.session_token().is_none() {
            return Err(EnvError::NotLoggedIn {
                config_path: self.config_path.clone(),
            }
            .into());
        }
        Ok(())
    }
}
