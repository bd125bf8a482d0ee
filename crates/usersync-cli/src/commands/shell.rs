//! Interactive session over stdin.
//!
//! Each line is one interaction with the controller; the view is re-rendered
//! after every command. Once a request fails only the failure line is shown
//! and further submissions are ignored.

use anyhow::{Context, Result};
use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};

use usersync_core::{Outcome, RecordId};

use crate::connect::CliController;
use crate::output;

const HELP: &str = "\
commands:
  ls                  reload users from the server
  name <value>        set the new user's name
  email <value>       set the new user's email
  add                 create the new user
  edit <id>           open a user for editing
  set name <value>    change the open user's name
  set email <value>   change the open user's email
  save                save the open user
  cancel              close the open user without saving
  rm <id>             delete a user
  ok                  dismiss the missing-value notice
  help                show this text
  quit                leave the session";

#[derive(Args, Debug)]
pub struct ShellArgs {
    /// Start with an empty list instead of loading from the server
    #[arg(long)]
    pub no_load: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    Reload,
    DraftName(String),
    DraftEmail(String),
    Add,
    Edit(RecordId),
    EditName(String),
    EditEmail(String),
    Save,
    Cancel,
    Remove(RecordId),
    Dismiss,
    Help,
    Quit,
}

fn parse(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let id = |rest: &str| RecordId::new(rest).map_err(|e| e.to_string());

    match word {
        "ls" => Ok(ShellCommand::Reload),
        "name" => Ok(ShellCommand::DraftName(rest.to_string())),
        "email" => Ok(ShellCommand::DraftEmail(rest.to_string())),
        "add" => Ok(ShellCommand::Add),
        "edit" => id(rest).map(ShellCommand::Edit),
        "set" => {
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim()),
                None => (rest, ""),
            };
            match field {
                "name" => Ok(ShellCommand::EditName(value.to_string())),
                "email" => Ok(ShellCommand::EditEmail(value.to_string())),
                other => Err(format!("unknown field '{}'", other)),
            }
        }
        "save" => Ok(ShellCommand::Save),
        "cancel" => Ok(ShellCommand::Cancel),
        "rm" => id(rest).map(ShellCommand::Remove),
        "ok" => Ok(ShellCommand::Dismiss),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" => Ok(ShellCommand::Quit),
        other => Err(format!("unknown command '{}' (try 'help')", other)),
    }
}

/// Say why a submission did nothing. Failures are shown by the view itself.
fn report(outcome: Outcome) {
    match outcome {
        Outcome::Applied | Outcome::Failed(_) => {}
        Outcome::Invalid(err) => output::error(&err.to_string()),
        Outcome::Skipped(reason) => output::error(&format!("not submitted: {}", reason)),
    }
}

pub async fn run(args: ShellArgs, controller: &CliController) -> Result<()> {
    if !args.no_load {
        report(controller.load().await);
    }
    output::view(&controller.view());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse(&line) {
            Ok(command) => command,
            Err(msg) => {
                output::error(&msg);
                continue;
            }
        };

        match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                println!("{}", HELP);
                continue;
            }
            ShellCommand::Reload => report(controller.load().await),
            ShellCommand::DraftName(v) => controller.set_draft_name(v),
            ShellCommand::DraftEmail(v) => controller.set_draft_email(v),
            ShellCommand::Add => report(controller.create().await),
            ShellCommand::Edit(id) => {
                if !controller.begin_edit(&id) {
                    output::error(&format!("cannot edit user {}", id));
                }
            }
            ShellCommand::EditName(v) => controller.set_edit_name(v),
            ShellCommand::EditEmail(v) => controller.set_edit_email(v),
            ShellCommand::Save => {
                let editing = controller.state().editing().map(|r| r.id.clone());
                match editing {
                    Some(id) => report(controller.update(&id).await),
                    None => output::error("no user is open for editing"),
                }
            }
            ShellCommand::Cancel => {
                if !controller.cancel_edit() {
                    output::error("nothing to cancel");
                }
            }
            ShellCommand::Remove(id) => report(controller.delete(&id).await),
            ShellCommand::Dismiss => controller.dismiss_dialog(),
        }

        output::view(&controller.view());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_values_with_spaces() {
        assert_eq!(
            parse("name  Ann Lee ").unwrap(),
            ShellCommand::DraftName("Ann Lee".to_string())
        );
        assert_eq!(
            parse("set email bo@x.com").unwrap(),
            ShellCommand::EditEmail("bo@x.com".to_string())
        );
    }

    #[test]
    fn bare_field_clears_value() {
        assert_eq!(parse("name").unwrap(), ShellCommand::DraftName(String::new()));
        assert_eq!(parse("set name").unwrap(), ShellCommand::EditName(String::new()));
    }

    #[test]
    fn ids_are_parsed() {
        assert_eq!(
            parse("edit 3").unwrap(),
            ShellCommand::Edit(RecordId::from(3))
        );
        assert_eq!(
            parse("rm abc").unwrap(),
            ShellCommand::Remove(RecordId::from("abc"))
        );
        assert!(parse("rm").is_err());
    }

    #[test]
    fn unknown_input_is_rejected() {
        assert!(parse("frobnicate").is_err());
        assert!(parse("set phone 123").is_err());
    }
}
