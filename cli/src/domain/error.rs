//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the `env` commands.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("Login required: set FLEET_TOKEN or add a token to {}", config_path.display())]
    NotLoggedIn { config_path: PathBuf },

    #[error("The parameter 'id' must be an integer or a comma-separated list of integers, got '{0}'")]
    InvalidId(String),

    #[error("The parameter 'id' must not be empty")]
    EmptyIdList,
}
