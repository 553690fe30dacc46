//! `fleet env` — manage configuration and environment variables.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Subcommand};
use fleet_common::{VarResource, VarScope};

use crate::app::AppContext;
use crate::application::ports::ConfigStore;
use crate::application::services::env_rm;
use crate::domain::variable::{IdList, RemovalRequest, parse_id_list};
use crate::infra::api::HttpVariableApi;
use crate::infra::prompt::TerminalPrompt;
use crate::infra::session::ConfigSession;
use crate::output::TerminalReporter;

/// Env subcommands.
#[derive(Subcommand)]
pub enum EnvCommand {
    /// Remove a config or env var from one or more applications, devices or services
    ///
    /// Remove a configuration or environment variable from one or more applications,
    /// devices or services, as selected by command-line options.
    ///
    /// Variables are selected by their numeric database ID; several IDs may be
    /// given as a comma-separated list. Interactive confirmation is normally
    /// asked before the variables are deleted. The --yes option disables this
    /// behavior.
    #[command(
        name = "rm",
        after_help = "Examples:\n  \
            fleet env rm 123123\n  \
            fleet env rm 123123,234234\n  \
            fleet env rm 234234 --yes\n  \
            fleet env rm 345345 --config\n  \
            fleet env rm 456456 --service\n  \
            fleet env rm 567567 --device\n  \
            fleet env rm 678678 --device --config\n  \
            fleet env rm 789789 --device --service --yes"
    )]
    Rm(EnvRmArgs),
}

/// Arguments for `fleet env rm`.
#[derive(Args)]
pub struct EnvRmArgs {
    /// Variable's numeric database ID, or a comma-separated list of IDs
    #[arg(value_name = "ID", value_parser = parse_id_arg)]
    pub ids: IdList,

    #[command(flatten)]
    pub scope: VarScope,

    /// Do not prompt for confirmation before deleting the variable
    #[arg(short, long)]
    pub yes: bool,
}

fn parse_id_arg(raw: &str) -> Result<IdList, String> {
    parse_id_list(raw).map_err(|e| e.to_string())
}

/// Run an env subcommand.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, the user is not logged in,
/// or the confirmation prompt fails. Failed deletions are reported through the
/// returned exit code instead.
pub async fn run(app: &AppContext, cmd: EnvCommand) -> Result<ExitCode> {
    match cmd {
        EnvCommand::Rm(args) => remove(app, args).await,
    }
}

async fn remove(app: &AppContext, args: EnvRmArgs) -> Result<ExitCode> {
    let config = app.config_store.load()?;
    let session = ConfigSession::new(&config, app.config_store.path()?);
    let api = HttpVariableApi::new(&config)?;

    let request = RemovalRequest {
        ids: args.ids,
        resource: VarResource::from_scope(args.scope),
        skip_confirmation: args.yes || app.non_interactive,
    };

    let reporter = if app.is_json() {
        TerminalReporter::silenced(&app.output)
    } else {
        TerminalReporter::new(&app.output)
    };

    let outcome =
        env_rm::remove_variables(&session, &TerminalPrompt, &api, &reporter, &request).await?;
    app.renderer().render_removal(&outcome)?;
    Ok(ExitCode::from(outcome.exit_code()))
}
