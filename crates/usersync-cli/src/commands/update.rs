//! Update command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use usersync_core::RecordId;

use crate::commands::applied;
use crate::connect::CliController;
use crate::output;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Id of the user to update
    pub id: String,

    /// New display name (keeps the current one if omitted)
    #[arg(long)]
    pub name: Option<String>,

    /// New e-mail address (keeps the current one if omitted)
    #[arg(long)]
    pub email: Option<String>,
}

pub async fn run(args: UpdateArgs, controller: &CliController) -> Result<()> {
    let id = RecordId::new(&args.id).context("Invalid user id")?;

    applied(controller.load().await).context("Failed to load users")?;

    if !controller.begin_edit(&id) {
        bail!("No user with id {}", id);
    }
    if let Some(name) = args.name {
        controller.set_edit_name(name);
    }
    if let Some(email) = args.email {
        controller.set_edit_email(email);
    }

    applied(controller.update(&id).await)?;

    let state = controller.state();
    if let Some(record) = state.store().get(&id) {
        output::json(record)?;
    }
    output::success(&format!("Updated user {}", id));
    Ok(())
}
