use chrono::NaiveDateTime;
use colored::Colorize;

use crate::features::age::AgeBreakdown;
use crate::features::bmi::{BmiCategory, BmiReading};
use crate::features::planner::Task;
use crate::features::timer::{
    format_clock, render_progress_bar, PhaseComplete, TimerMode, TimerSnapshot,
};

const PROGRESS_WIDTH: usize = 30;

/// Format the task list as a checklist
pub fn format_tasks_pretty(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "Planner (0 tasks)\n  Nothing planned. Add one with `focusdesk task add`."
            .to_string();
    }

    let done = tasks.iter().filter(|t| t.completed).count();
    let mut output = format!("Planner ({done}/{} done)\n", tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        output.push_str(&task_line(task));
        output.push('\n');
    }

    output
}

fn task_line(task: &Task) -> String {
    let status_icon = if task.completed {
        "[x]".green()
    } else {
        "[ ]".white()
    };
    let star = if task.priority {
        "★".yellow().to_string()
    } else {
        " ".to_string()
    };
    let text = if task.completed {
        task.text.strikethrough().dimmed().to_string()
    } else if task.priority {
        task.text.bold().to_string()
    } else {
        task.text.clone()
    };

    format!(
        "{status_icon} {star} {text}  {}",
        format!("#{}", task.id).dimmed()
    )
}

/// Format a single task after an action
pub fn format_task_pretty(task: &Task, action: &str) -> String {
    format!("{} {}", format!("{action}:").green().bold(), task_line(task))
}

/// Format an age breakdown
pub fn format_age_pretty(age: &AgeBreakdown, birth: NaiveDateTime, at: NaiveDateTime) -> String {
    let mut output = format!(
        "{} {} {} years, {} months, {} days\n",
        "Age".bold(),
        "─".dimmed(),
        age.years.to_string().cyan().bold(),
        age.months,
        age.days
    );
    output.push_str(&format!(
        "  {}: {} → {}\n",
        "Between".dimmed(),
        birth.format("%Y-%m-%d %H:%M:%S"),
        at.format("%Y-%m-%d %H:%M:%S")
    ));
    output.push_str(&format!(
        "  {}: {}h {}m {}s\n",
        "Plus".dimmed(),
        age.hours,
        age.minutes,
        age.seconds
    ));
    output.push_str(&format!("  {}:\n", "Totals".dimmed()));
    for (label, value) in [
        ("months", age.total_months),
        ("days", age.total_days),
        ("hours", age.total_hours),
        ("minutes", age.total_minutes),
        ("seconds", age.total_seconds),
    ] {
        output.push_str(&format!("    {value:>14} {label}\n"));
    }

    output
}

/// Format a BMI reading with its category advice
pub fn format_bmi_pretty(reading: &BmiReading) -> String {
    let category = reading.category.display_name();
    let category = match reading.category {
        BmiCategory::Normal => category.green(),
        BmiCategory::Underweight | BmiCategory::Overweight => category.yellow(),
        BmiCategory::Obese => category.red(),
    };

    format!(
        "{}: {} ({})\n  {}",
        "BMI".bold(),
        reading.formatted().bold(),
        category.bold(),
        reading.category.feedback()
    )
}

/// One-line timer status, redrawn in place by `timer run`
pub fn format_timer_status_pretty(snapshot: &TimerSnapshot) -> String {
    let label = mode_label(snapshot.mode);
    let state = if snapshot.running {
        "running".green()
    } else {
        "paused".yellow()
    };

    format!(
        "{label} {} {} {:>3}%  {state}",
        format_clock(snapshot.remaining_seconds).bold(),
        render_progress_bar(snapshot.percent_remaining, PROGRESS_WIDTH),
        snapshot.percent_remaining
    )
}

/// Format a completed period
pub fn format_phase_complete_pretty(event: PhaseComplete, completed: u32) -> String {
    format!(
        "{} {} finished ({completed} completed), starting {}",
        "✓".green().bold(),
        event.mode.display_name(),
        event.next().display_name()
    )
}

/// Format the final timer state when a run ends
pub fn format_timer_summary_pretty(snapshot: &TimerSnapshot, completed: u32) -> String {
    let noun = if completed == 1 { "period" } else { "periods" };
    format!(
        "Stopped during {} with {} left. {completed} {noun} completed.",
        snapshot.mode.display_name(),
        format_clock(snapshot.remaining_seconds)
    )
}

fn mode_label(mode: TimerMode) -> colored::ColoredString {
    match mode {
        TimerMode::Focus => mode.display_name().red().bold(),
        TimerMode::Break => mode.display_name().green().bold(),
    }
}
