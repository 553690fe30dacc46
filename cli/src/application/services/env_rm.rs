//! Application service — delete a batch of configuration/environment variables.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use anyhow::Result;

use crate::application::ports::{ConfirmPrompt, ProgressReporter, SessionChecker, VariableApi};
use crate::domain::variable::{
    DeletionOutcome, RemovalOutcome, RemovalReport, RemovalRequest, confirmation_prompt,
};

/// Delete every ID in `request` from its resource.
///
/// Steps:
/// 1. Require a session (fatal)
/// 2. Ask once for confirmation unless `skip_confirmation`
/// 3. Delete each ID in input order; a failed delete is recorded and the
///    loop moves on to the next ID
///
/// No rollback is attempted: a report with failures may still contain
/// deleted variables.
///
/// # Errors
///
/// Returns an error if the session check fails or the confirmation prompt
/// cannot be shown. Per-item deletion failures are never returned as errors;
/// they are recorded in the [`RemovalReport`].
pub async fn remove_variables(
    session: &impl SessionChecker,
    prompt: &impl ConfirmPrompt,
    api: &impl VariableApi,
    reporter: &impl ProgressReporter,
    request: &RemovalRequest,
) -> Result<RemovalOutcome> {
    session.check_logged_in()?;

    if !request.skip_confirmation && !prompt.confirm(&confirmation_prompt(&request.ids))? {
        tracing::debug!(count = request.ids.len(), "removal declined");
        return Ok(RemovalOutcome::Declined);
    }

    let resource = request.resource;
    let mut outcomes = Vec::with_capacity(request.ids.len());
    for id in &request.ids {
        reporter.step(&format!("deleting {resource} {id}..."));
        tracing::debug!(%resource, %id, "deleting variable");
        match api.delete(resource, id).await {
            Ok(()) => {
                reporter.success(&format!("deleted {resource} {id}"));
                outcomes.push(DeletionOutcome::Deleted { id });
            }
            Err(e) => {
                let message = e.to_string();
                tracing::debug!(%resource, %id, error = %message, "delete failed");
                reporter.warn(&format!("{message}, id: {id}"));
                outcomes.push(DeletionOutcome::Failed { id, message });
            }
        }
    }

    Ok(RemovalOutcome::Completed(RemovalReport { resource, outcomes }))
}
