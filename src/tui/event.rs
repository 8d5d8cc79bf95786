//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::DeskError;
use crate::storage::KvStore;
use crate::tui::app::{App, Field, Mode, Tab};

/// How long to wait for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<S: KvStore>(app: &mut App<S>) -> Result<Option<Action>, DeskError> {
    if event::poll(POLL_INTERVAL)
        .map_err(|e| DeskError::Config(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) =
            event::read().map_err(|e| DeskError::Config(format!("Event read failed: {e}")))?
        {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key(app, key));
            }
        }
    }

    Ok(None)
}

/// Dispatch a single key press.
pub fn handle_key<S: KvStore>(app: &mut App<S>, key: KeyEvent) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match app.mode {
        Mode::Input { .. } => {
            handle_input_key(app, key);
            None
        }
        Mode::ConfirmDelete(_) => {
            app.confirm(matches!(key.code, KeyCode::Char('y' | 'Y')));
            None
        }
        Mode::Normal => handle_normal_key(app, key),
    }
}

fn handle_input_key<S: KvStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Esc => app.cancel_input(),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char(c) => app.push_char(c),
        _ => {}
    }
}

fn handle_normal_key<S: KvStore>(app: &mut App<S>, key: KeyEvent) -> Option<Action> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),

        // Tabs
        KeyCode::Tab => app.select_tab(app.tab.next()),
        KeyCode::BackTab => app.select_tab(app.tab.previous()),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            app.select_tab(Tab::ALL[index]);
        }

        // Help
        KeyCode::Char('?') => app.show_help = !app.show_help,

        _ => match app.tab {
            Tab::Planner => planner_key(app, key.code),
            Tab::Timer => timer_key(app, key.code),
            Tab::Age => match key.code {
                KeyCode::Char('b') => app.begin_input(Field::Birth),
                KeyCode::Char('c') => app.begin_input(Field::Comparison),
                _ => {}
            },
            Tab::Bmi => match key.code {
                KeyCode::Char('w') => app.begin_input(Field::Weight),
                KeyCode::Char('h') => app.begin_input(Field::Height),
                _ => {}
            },
        },
    }
    None
}

fn planner_key<S: KvStore>(app: &mut App<S>, code: KeyCode) {
    match code {
        // Navigation - vim style
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // Actions
        KeyCode::Char('a') => app.begin_input(Field::NewTask),
        KeyCode::Char('e') | KeyCode::Enter => app.begin_edit_selected(),
        KeyCode::Char(' ' | 'x') => app.toggle_selected_completed(),
        KeyCode::Char('p') => app.toggle_selected_priority(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        _ => {}
    }
}

fn timer_key<S: KvStore>(app: &mut App<S>, code: KeyCode) {
    match code {
        KeyCode::Char(' ') => app.toggle_timer(),
        KeyCode::Char('r') => app.reset_timer(),
        KeyCode::Char('+' | '=') => app.adjust_durations(1, 0),
        KeyCode::Char('-') => app.adjust_durations(-1, 0),
        KeyCode::Char(']') => app.adjust_durations(0, 1),
        KeyCode::Char('[') => app.adjust_durations(0, -1),
        _ => {}
    }
}

/// Keys shown in the help panel, per tab.
#[must_use]
pub const fn help_text(tab: Tab) -> &'static str {
    match tab {
        Tab::Planner => "j/k:nav | a:add | e:edit | space/x:done | p:priority | d:delete",
        Tab::Timer => "space:start/pause | r:reset | +/-:focus min | ]/[:break min",
        Tab::Age => "b:birth date | c:comparison date (blank = now)",
        Tab::Bmi => "w:weight | h:height",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::planner::Planner;
    use crate::features::timer::{SilentChime, TimerConfiguration, TimerSession};
    use crate::storage::MemoryStore;

    fn app(store: &MemoryStore) -> App<&MemoryStore> {
        App::new(
            Planner::load(store).unwrap(),
            TimerSession::new(TimerConfiguration::default(), Box::new(SilentChime)),
            true,
        )
    }

    fn press<S: KvStore>(app: &mut App<S>, code: KeyCode) -> Option<Action> {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_quit_keys() {
        let store = MemoryStore::new();
        let mut app = app(&store);

        assert_eq!(press(&mut app, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(
            handle_key(
                &mut app,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let store = MemoryStore::new();
        let mut app = app(&store);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.tab, Tab::Timer);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.tab, Tab::Bmi);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.tab, Tab::Planner);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.tab, Tab::Bmi);
    }

    #[test]
    fn test_typing_q_in_prompt_does_not_quit() {
        let store = MemoryStore::new();
        let mut app = app(&store);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(press(&mut app, KeyCode::Char('q')), None);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.planner.tasks()[0].text, "q");
    }

    #[test]
    fn test_escape_cancels_prompt() {
        let store = MemoryStore::new();
        let mut app = app(&store);

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(press(&mut app, KeyCode::Esc), None);

        assert_eq!(app.mode, Mode::Normal);
        assert!(app.planner.tasks().is_empty());
    }

    #[test]
    fn test_delete_flow() {
        let store = MemoryStore::new();
        let mut app = app(&store);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('z'));
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.planner.tasks().len(), 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.planner.tasks().is_empty());
    }

    #[test]
    fn test_timer_keys_adjust_durations() {
        let store = MemoryStore::new();
        let mut app = app(&store);
        press(&mut app, KeyCode::Char('2'));

        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char(']'));

        assert_eq!(app.timer.config().focus_minutes(), 26);
        assert_eq!(app.timer.config().break_minutes(), 6);
    }

    #[test]
    fn test_help_toggle() {
        let store = MemoryStore::new();
        let mut app = app(&store);

        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('?'));
        assert!(!app.show_help);
    }
}
