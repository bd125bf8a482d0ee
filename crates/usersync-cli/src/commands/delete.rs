//! Delete command implementation.

use anyhow::{Context, Result};
use clap::Args;

use usersync_core::RecordId;

use crate::commands::applied;
use crate::connect::CliController;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Id of the user to delete
    pub id: String,
}

pub async fn run(args: DeleteArgs, controller: &CliController) -> Result<()> {
    let id = RecordId::new(&args.id).context("Invalid user id")?;

    applied(controller.delete(&id).await)?;

    output::success(&format!("Deleted user {}", id));
    Ok(())
}
