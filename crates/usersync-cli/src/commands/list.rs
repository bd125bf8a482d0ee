//! List command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::commands::applied;
use crate::connect::CliController;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: ListArgs, controller: &CliController) -> Result<()> {
    applied(controller.load().await)?;

    let state = controller.state();
    let records = state.store().records();
    if records.is_empty() {
        eprintln!("{}", "No users found.".dimmed());
        return Ok(());
    }

    for record in records {
        if args.pretty {
            output::json_pretty(record)?;
        } else {
            output::json(record)?;
        }
    }

    Ok(())
}
