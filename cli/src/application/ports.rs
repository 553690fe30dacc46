//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;

use anyhow::Result;
use fleet_common::VarResource;

use crate::domain::{FleetConfig, VariableId};

// ── Session Port ──────────────────────────────────────────────────────────────

/// Verifies that the user has an API session before any remote work starts.
pub trait SessionChecker {
    /// Succeed when a session is present.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::NotLoggedIn` when no credentials are available.
    fn check_logged_in(&self) -> Result<()>;
}

// ── Confirmation Port ─────────────────────────────────────────────────────────

/// Asks the user a yes/no question.
pub trait ConfirmPrompt {
    /// Returns `true` when the user agrees.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be shown (e.g. no TTY available).
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

// ── Remote Variable API Port ──────────────────────────────────────────────────

/// Remote operations on configuration and environment variables.
#[allow(async_fn_in_trait)]
pub trait VariableApi {
    /// Delete the variable `id` from `resource`.
    async fn delete(&self, resource: VarResource, id: VariableId) -> Result<()>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts loading the CLI configuration.
pub trait ConfigStore {
    /// Load the configuration with environment overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn load(&self) -> Result<FleetConfig>;

    /// Path of the configuration file, whether or not it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
