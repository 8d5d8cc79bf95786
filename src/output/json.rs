//! JSON output formatting for focusdesk.

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::json;

use crate::error::DeskError;
use crate::features::age::AgeBreakdown;
use crate::features::planner::Task;
use crate::features::timer::{PhaseComplete, TimerSnapshot};

const MOMENT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Format tasks as JSON
///
/// # Errors
///
/// Returns `DeskError::Parse` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[Task]) -> Result<String, DeskError> {
    let output = json!({
        "count": tasks.len(),
        "completed": tasks.iter().filter(|t| t.completed).count(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single task as JSON
///
/// # Errors
///
/// Returns `DeskError::Parse` if JSON serialization fails.
pub fn format_task_json(task: &Task, action: &str) -> Result<String, DeskError> {
    let output = json!({
        "action": action.to_lowercase(),
        "task": task
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format an age breakdown as JSON
///
/// # Errors
///
/// Returns `DeskError::Parse` if JSON serialization fails.
pub fn format_age_json(
    age: &AgeBreakdown,
    birth: NaiveDateTime,
    at: NaiveDateTime,
) -> Result<String, DeskError> {
    let output = json!({
        "birth": birth.format(MOMENT_FORMAT).to_string(),
        "at": at.format(MOMENT_FORMAT).to_string(),
        "age": age
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a completed period as a single JSON line, for streaming
///
/// # Errors
///
/// Returns `DeskError::Parse` if JSON serialization fails.
pub fn format_phase_complete_json(
    event: PhaseComplete,
    completed: u32,
) -> Result<String, DeskError> {
    let output = json!({
        "event": "phase_complete",
        "mode": event.mode,
        "next": event.next(),
        "completed_phases": completed
    });
    Ok(serde_json::to_string(&output)?)
}

/// Format the final timer state as JSON
///
/// # Errors
///
/// Returns `DeskError::Parse` if JSON serialization fails.
pub fn format_timer_summary_json(
    snapshot: &TimerSnapshot,
    completed: u32,
) -> Result<String, DeskError> {
    let output = json!({
        "completed_phases": completed,
        "timer": snapshot
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `DeskError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, DeskError> {
    Ok(serde_json::to_string_pretty(value)?)
}
