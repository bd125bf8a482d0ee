//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use usersync_core::sync::{ReadyView, RowView};
use usersync_core::View;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Render the controller's view. In failure mode only the failure line shows.
pub fn view(view: &View) {
    match view {
        View::Failed { .. } => println!("{}", view.to_string().red()),
        View::Ready(ready) => ready_view(ready),
    }
}

fn ready_view(view: &ReadyView) {
    let submit = if view.creating { "adding..." } else { "add" };
    println!(
        "{} name={:?} email={:?} [{}]",
        "new".dimmed(),
        view.draft.name,
        view.draft.email,
        submit
    );

    if view.rows.is_empty() {
        println!("{}", "No users.".dimmed());
    }
    for row in &view.rows {
        println!("{}", row_line(row));
    }

    if view.dialog_open {
        println!("{}", "Please enter a value. (ok to dismiss)".yellow());
    }
}

fn row_line(row: &RowView) -> String {
    let line = row.to_string();
    if row.editing.is_some() {
        line.cyan().to_string()
    } else if row.deleting {
        line.dimmed().to_string()
    } else {
        line
    }
}
