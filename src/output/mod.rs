//! Output formatting for focusdesk.
//!
//! This module provides formatters for displaying widget results in various formats.

mod json;
mod pretty;

use chrono::NaiveDateTime;

use crate::cli::args::OutputFormat;
use crate::error::DeskError;
use crate::features::age::AgeBreakdown;
use crate::features::bmi::BmiReading;
use crate::features::planner::Task;
use crate::features::timer::{PhaseComplete, TimerSnapshot};

pub use json::*;
pub use pretty::*;

/// Format the task list based on output format
///
/// # Errors
///
/// Returns `DeskError::Parse` if JSON serialization fails.
pub fn format_tasks(tasks: &[Task], format: OutputFormat) -> Result<String, DeskError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks)),
        OutputFormat::Json => format_tasks_json(tasks),
    }
}

/// Format a single task after an action (`"Added"`, `"Removed"`, ...)
///
/// # Errors
///
/// Returns `DeskError::Parse` if JSON serialization fails.
pub fn format_task(task: &Task, action: &str, format: OutputFormat) -> Result<String, DeskError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task, action)),
        OutputFormat::Json => format_task_json(task, action),
    }
}

/// Format an age breakdown
///
/// # Errors
///
/// Returns `DeskError::Parse` if JSON serialization fails.
pub fn format_age(
    age: &AgeBreakdown,
    birth: NaiveDateTime,
    at: NaiveDateTime,
    format: OutputFormat,
) -> Result<String, DeskError> {
    match format {
        OutputFormat::Pretty => Ok(format_age_pretty(age, birth, at)),
        OutputFormat::Json => format_age_json(age, birth, at),
    }
}

/// Format a BMI reading
///
/// # Errors
///
/// Returns `DeskError::Parse` if JSON serialization fails.
pub fn format_bmi(reading: &BmiReading, format: OutputFormat) -> Result<String, DeskError> {
    match format {
        OutputFormat::Pretty => Ok(format_bmi_pretty(reading)),
        OutputFormat::Json => to_json(reading),
    }
}

/// Format a completed timer period
///
/// # Errors
///
/// Returns `DeskError::Parse` if JSON serialization fails.
pub fn format_phase_complete(
    event: PhaseComplete,
    completed: u32,
    format: OutputFormat,
) -> Result<String, DeskError> {
    match format {
        OutputFormat::Pretty => Ok(format_phase_complete_pretty(event, completed)),
        OutputFormat::Json => format_phase_complete_json(event, completed),
    }
}

/// Format the final timer state when a run ends
///
/// # Errors
///
/// Returns `DeskError::Parse` if JSON serialization fails.
pub fn format_timer_summary(
    snapshot: &TimerSnapshot,
    completed: u32,
    format: OutputFormat,
) -> Result<String, DeskError> {
    match format {
        OutputFormat::Pretty => Ok(format_timer_summary_pretty(snapshot, completed)),
        OutputFormat::Json => format_timer_summary_json(snapshot, completed),
    }
}
