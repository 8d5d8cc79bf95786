//! Headless interval timer.
//!
//! Runs the focus/break cycle in the current terminal, redrawing a status
//! line every second until Ctrl-C or the requested number of periods.

use std::io::{IsTerminal, Write};

use tracing::{debug, info};

use crate::cli::args::{OutputFormat, TimerCommands};
use crate::config::Config;
use crate::error::DeskError;
use crate::features::timer::{Chime, SilentChime, TimerConfiguration, TimerSession, ToneChime};
use crate::output::{format_phase_complete, format_timer_status_pretty, format_timer_summary};

/// Execute timer subcommands.
///
/// # Errors
///
/// Returns an error if the durations are invalid or the runtime cannot start.
pub fn timer(
    cmd: TimerCommands,
    config: &Config,
    format: OutputFormat,
) -> Result<String, DeskError> {
    match cmd {
        TimerCommands::Run {
            focus,
            r#break,
            phases,
            quiet,
        } => {
            let durations = TimerConfiguration::new(
                focus.unwrap_or(config.timer.focus_minutes),
                r#break.unwrap_or(config.timer.break_minutes),
            )?;
            let chime: Box<dyn Chime> = if quiet || !config.timer.sound {
                Box::new(SilentChime)
            } else {
                Box::new(ToneChime::default())
            };
            run(TimerSession::new(durations, chime), phases, format)
        }
    }
}

fn run(
    session: TimerSession,
    phases: Option<u32>,
    format: OutputFormat,
) -> Result<String, DeskError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(drive(session, phases, format))
}

async fn drive(
    mut session: TimerSession,
    phases: Option<u32>,
    format: OutputFormat,
) -> Result<String, DeskError> {
    let live = format == OutputFormat::Pretty && std::io::stdout().is_terminal();
    let config = session.config();
    info!(
        focus_minutes = config.focus_minutes(),
        break_minutes = config.break_minutes(),
        ?phases,
        "timer run started"
    );

    session.start()?;
    if live {
        redraw(&format_timer_status_pretty(&session.snapshot()))?;
    }

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            event = session.next_event() => {
                if let Some(event) = event {
                    let line = format_phase_complete(event, session.completed_phases(), format)?;
                    if live {
                        clear_line()?;
                    }
                    println!("{line}");
                    if phases.is_some_and(|limit| session.completed_phases() >= limit) {
                        debug!("requested number of periods reached");
                        break;
                    }
                }
                if live {
                    redraw(&format_timer_status_pretty(&session.snapshot()))?;
                }
            }
            _ = &mut ctrl_c => {
                debug!("interrupted");
                break;
            }
        }
    }

    session.pause();
    if live {
        clear_line()?;
    }
    format_timer_summary(&session.snapshot(), session.completed_phases(), format)
}

fn redraw(status: &str) -> Result<(), DeskError> {
    let mut stdout = std::io::stdout();
    write!(stdout, "\r{status}\x1b[K")?;
    stdout.flush()?;
    Ok(())
}

fn clear_line() -> Result<(), DeskError> {
    let mut stdout = std::io::stdout();
    write!(stdout, "\r\x1b[K")?;
    stdout.flush()?;
    Ok(())
}
