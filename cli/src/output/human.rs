//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;

use crate::domain::RemovalOutcome;
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the end of an `env rm` run.
    ///
    /// Per-item lines were already printed by the reporter while the batch ran;
    /// this only prints the closing summary.
    pub fn render_removal(&self, outcome: &RemovalOutcome) {
        match outcome {
            RemovalOutcome::Declined => self.ctx.info("Aborted."),
            RemovalOutcome::Completed(report) => {
                let failed = report.failures().count();
                let total = report.outcomes.len();
                if failed == 0 {
                    return;
                }
                if !self.ctx.quiet {
                    println!();
                    println!(
                        "  {}",
                        format!("{failed} of {total} deletions failed").style(self.ctx.styles.dim)
                    );
                }
            }
        }
    }
}
