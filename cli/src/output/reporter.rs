//! `TerminalReporter` — Presentation-layer implementation of `ProgressReporter`.
//!
//! Wraps `&OutputContext` and implements the `application::ports::ProgressReporter`
//! trait so application services can emit progress events without depending on
//! any presentation type directly.

use crate::application::ports::ProgressReporter;
use crate::output::OutputContext;

/// Terminal progress reporter that wraps an `OutputContext`.
///
/// - `step()` prints `"  → {message}"` (suppressed when `ctx.quiet`)
/// - `success()` prints `"  ✓ {message}"` (suppressed when `ctx.quiet`)
/// - `warn()` prints `"  ✗ {message}"` (never suppressed)
///
/// A silenced reporter prints nothing; JSON mode uses one so stdout carries
/// only the JSON document.
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
    silenced: bool,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            silenced: false,
        }
    }

    /// Create a reporter that discards every event.
    #[must_use]
    pub fn silenced(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            silenced: true,
        }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        if !self.silenced {
            self.ctx.step(message);
        }
    }

    fn success(&self, message: &str) {
        if !self.silenced {
            self.ctx.success(message);
        }
    }

    fn warn(&self, message: &str) {
        if !self.silenced {
            self.ctx.failure(message);
        }
    }
}
