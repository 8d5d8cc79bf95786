//! Planner subcommands.

use std::io::{BufRead, Write};

use colored::Colorize;

use crate::cli::args::{OutputFormat, TaskCommands};
use crate::config::Config;
use crate::error::DeskError;
use crate::features::planner::Planner;
use crate::output::{format_task, format_tasks};
use crate::storage::{Database, KvStore};

/// Execute task subcommands against the on-disk planner.
///
/// # Errors
///
/// Returns an error if the database cannot be opened, the task does not
/// exist, or the text is empty.
pub fn task(cmd: TaskCommands, config: &Config, format: OutputFormat) -> Result<String, DeskError> {
    let db = Database::open()?;
    let stdin = std::io::stdin();
    run(
        Planner::load(db)?,
        cmd,
        config.planner.confirm_delete,
        &mut stdin.lock(),
        format,
    )
}

fn run<S: KvStore, R: BufRead>(
    mut planner: Planner<S>,
    cmd: TaskCommands,
    confirm_delete: bool,
    input: &mut R,
    format: OutputFormat,
) -> Result<String, DeskError> {
    match cmd {
        TaskCommands::List => format_tasks(planner.tasks(), format),
        TaskCommands::Add { text } => {
            let task = planner.add(&text)?;
            format_task(&task, "Added", format)
        }
        TaskCommands::Done { id } => {
            let task = planner.toggle_completed(id)?;
            let action = if task.completed { "Completed" } else { "Reopened" };
            format_task(task, action, format)
        }
        TaskCommands::Star { id } => {
            let task = planner.toggle_priority(id)?;
            let action = if task.priority { "Starred" } else { "Unstarred" };
            format_task(task, action, format)
        }
        TaskCommands::Edit { id, text } => {
            let task = planner.edit(id, &text)?;
            format_task(task, "Updated", format)
        }
        TaskCommands::Rm { id, yes } => {
            let text = planner
                .get(id)
                .map(|t| t.text.clone())
                .ok_or_else(|| DeskError::NotFound(format!("task {id}")))?;
            if confirm_delete && !yes && !confirm(&format!("Delete \"{text}\"?"), input)? {
                return Ok("Cancelled.".to_string());
            }
            let task = planner.remove(id)?;
            format_task(&task, "Removed", format)
        }
    }
}

fn confirm<R: BufRead>(question: &str, input: &mut R) -> Result<bool, DeskError> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{} {} ", question.bold(), "[y/N]".dimmed())?;
    stderr.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
