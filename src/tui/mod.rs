//! Terminal User Interface (TUI) for focusdesk.
//!
//! A tabbed dashboard with the planner, focus timer, age and BMI widgets.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, Field, Mode, Tab};

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use crate::config::Config;
use crate::error::DeskError;
use crate::features::planner::Planner;
use crate::features::timer::{Chime, SilentChime, TimerSession, ToneChime};
use crate::storage::{Database, KvStore};

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(config: &Config) -> Result<(), DeskError> {
    // The tick driver is a tokio task; keep a runtime alive next to the
    // blocking crossterm loop.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;
    let _guard = runtime.enter();

    let chime: Box<dyn Chime> = if config.timer.sound {
        Box::new(ToneChime::default())
    } else {
        Box::new(SilentChime)
    };
    let timer = TimerSession::new(config.timer.durations(), chime);
    let planner = Planner::load(Database::open()?)?;
    let mut app = App::new(planner, timer, config.planner.confirm_delete);

    // Setup terminal
    enable_raw_mode().map_err(|e| DeskError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| DeskError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| DeskError::Config(format!("Failed to create terminal: {e}")))?;

    info!("dashboard opened");
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    info!(
        completed_phases = app.timer.completed_phases(),
        "dashboard closed"
    );
    result
}

/// Run the main application loop.
fn run_app<B: Backend, S: KvStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> Result<(), DeskError> {
    while !app.should_quit {
        app.on_tick();

        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| DeskError::Config(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(event::Action::Quit) = event::handle_events(app)? {
            app.should_quit = true;
        }
    }

    Ok(())
}
