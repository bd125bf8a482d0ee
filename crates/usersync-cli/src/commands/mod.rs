//! Subcommand implementations.

pub mod create;
pub mod delete;
pub mod list;
pub mod shell;
pub mod update;

use anyhow::{Result, anyhow, bail};

use usersync_core::Outcome;

use crate::cli::Commands;
use crate::connect::CliController;

pub async fn handle(cmd: Commands, controller: CliController) -> Result<()> {
    match cmd {
        Commands::List(args) => list::run(args, &controller).await,
        Commands::Create(args) => create::run(args, &controller).await,
        Commands::Update(args) => update::run(args, &controller).await,
        Commands::Delete(args) => delete::run(args, &controller).await,
        Commands::Shell(args) => shell::run(args, &controller).await,
    }
}

/// Turn a non-applied outcome into a command error.
pub(crate) fn applied(outcome: Outcome) -> Result<()> {
    match outcome {
        Outcome::Applied => Ok(()),
        Outcome::Invalid(err) => Err(anyhow!(err)),
        Outcome::Skipped(reason) => bail!("Not submitted: {}", reason),
        Outcome::Failed(err) => Err(anyhow!(err)),
    }
}
