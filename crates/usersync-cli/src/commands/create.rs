//! Create command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::commands::applied;
use crate::connect::CliController;
use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Display name
    #[arg(long, default_value = "")]
    pub name: String,

    /// E-mail address
    #[arg(long, default_value = "")]
    pub email: String,
}

pub async fn run(args: CreateArgs, controller: &CliController) -> Result<()> {
    controller.set_draft_name(args.name);
    controller.set_draft_email(args.email);

    applied(controller.create().await)?;

    let state = controller.state();
    let created = state
        .last_created()
        .context("Created user missing from cache")?;

    output::json(created)?;
    output::success(&format!("Created user {}", created.id));
    Ok(())
}
