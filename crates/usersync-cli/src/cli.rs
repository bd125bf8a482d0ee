//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use usersync_core::config::{API_ORIGIN_ENV, API_PATH_ENV, DEFAULT_API_ORIGIN, DEFAULT_API_PATH};

use crate::commands::{create, delete, list, shell, update};

/// Browse and edit the records behind a users API.
#[derive(Parser, Debug)]
#[command(name = "usersync")]
#[command(author, version = env!("USERSYNC_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub api: ApiArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the users resource lives.
#[derive(Args, Debug)]
pub struct ApiArgs {
    /// Base path of the users resource, or a full URL
    #[arg(long, global = true, env = API_PATH_ENV, default_value = DEFAULT_API_PATH)]
    pub api_path: String,

    /// Origin a relative base path is resolved against
    #[arg(long, global = true, env = API_ORIGIN_ENV, default_value = DEFAULT_API_ORIGIN)]
    pub origin: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all users
    List(list::ListArgs),

    /// Create a user
    Create(create::CreateArgs),

    /// Update a user's name and email
    Update(update::UpdateArgs),

    /// Delete a user
    Delete(delete::DeleteArgs),

    /// Interactive session over stdin
    Shell(shell::ShellArgs),
}
