//! Terminal implementation of the `ConfirmPrompt` port.

use anyhow::{Context, Result};

use crate::application::ports::ConfirmPrompt;

/// Asks on the controlling terminal with `dialoguer`; defaults to "no".
pub struct TerminalPrompt;

impl ConfirmPrompt for TerminalPrompt {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .context("cannot prompt for confirmation (use --yes to skip)")
    }
}
