//! Application state for the TUI.

use tracing::{debug, warn};

use crate::error::DeskError;
use crate::features::age::{parse_moment, AgeBreakdown};
use crate::features::bmi::BmiReading;
use crate::features::planner::{Planner, Task};
use crate::features::timer::{PhaseComplete, TimerSession};
use crate::storage::KvStore;

/// Dashboard widgets, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Planner,
    Timer,
    Age,
    Bmi,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::Planner, Self::Timer, Self::Age, Self::Bmi];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Planner => "Planner",
            Self::Timer => "Focus Timer",
            Self::Age => "Age",
            Self::Bmi => "BMI",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Planner => 0,
            Self::Timer => 1,
            Self::Age => 2,
            Self::Bmi => 3,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which text field a prompt is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    NewTask,
    EditTask(i64),
    Birth,
    Comparison,
    Weight,
    Height,
}

impl Field {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewTask => "New task",
            Self::EditTask(_) => "Edit task",
            Self::Birth => "Birth date (YYYY-MM-DD [HH:MM[:SS]])",
            Self::Comparison => "Compare with (blank = now)",
            Self::Weight => "Weight (kg)",
            Self::Height => "Height (cm)",
        }
    }
}

/// Input mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Keys are commands.
    Normal,
    /// Keys edit `buffer` for `field`.
    Input { field: Field, buffer: String },
    /// Waiting for y/n before deleting a task.
    ConfirmDelete(i64),
}

/// Application state.
pub struct App<S: KvStore> {
    /// Active tab.
    pub tab: Tab,
    pub mode: Mode,
    /// The focus timer. Lives for the whole dashboard session.
    pub timer: TimerSession,
    pub planner: Planner<S>,
    /// Selected planner row.
    pub selected: usize,
    /// Ask before deleting a task.
    pub confirm_delete: bool,
    pub birth_input: String,
    pub comparison_input: String,
    pub weight_input: String,
    pub height_input: String,
    /// Last BMI result, or the message explaining why there is none.
    pub bmi: Option<Result<BmiReading, String>>,
    /// Status message to display.
    pub status: Option<String>,
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<S: KvStore> App<S> {
    /// Create a new app instance on the planner tab.
    #[must_use]
    pub fn new(planner: Planner<S>, timer: TimerSession, confirm_delete: bool) -> Self {
        Self {
            tab: Tab::Planner,
            mode: Mode::Normal,
            timer,
            planner,
            selected: 0,
            confirm_delete,
            birth_input: String::new(),
            comparison_input: String::new(),
            weight_input: String::new(),
            height_input: String::new(),
            bmi: None,
            status: Some("Press ? for help".to_string()),
            show_help: false,
            should_quit: false,
        }
    }

    /// Apply queued timer ticks. Called once per loop iteration.
    pub fn on_tick(&mut self) {
        for event in self.timer.drain() {
            self.announce(event);
        }
    }

    fn announce(&mut self, event: PhaseComplete) {
        self.status = Some(format!(
            "{} finished. {} started.",
            event.mode.display_name(),
            event.next().display_name()
        ));
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.status = None;
    }

    // ==================== Timer ====================

    pub fn toggle_timer(&mut self) {
        if let Err(e) = self.timer.toggle() {
            warn!("could not start timer: {e}");
            self.status = Some(e.to_string());
        }
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset();
        self.status = Some("Timer reset".to_string());
    }

    /// Nudge the focus and break lengths by whole minutes.
    pub fn adjust_durations(&mut self, focus_delta: i64, break_delta: i64) {
        let config = self.timer.config();
        let shift = |minutes: u32, delta: i64| {
            u32::try_from((i64::from(minutes) + delta).max(0)).unwrap_or(0)
        };
        let focus = shift(config.focus_minutes(), focus_delta);
        let brk = shift(config.break_minutes(), break_delta);

        match self.timer.reconfigure(focus, brk) {
            Ok(Some(event)) => self.announce(event),
            Ok(None) => {
                self.status = Some(format!("Focus {focus} min, break {brk} min"));
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    // ==================== Planner ====================

    /// Get the currently selected task.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.planner.tasks().get(self.selected)
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.planner.tasks().len() {
            self.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.planner.tasks().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn toggle_selected_completed(&mut self) {
        if let Some(id) = self.selected_task().map(|t| t.id) {
            let result = self.planner.toggle_completed(id).map(|t| t.completed);
            self.report(result.map(|done| if done { "Marked done" } else { "Reopened" }));
        }
    }

    pub fn toggle_selected_priority(&mut self) {
        if let Some(id) = self.selected_task().map(|t| t.id) {
            let result = self.planner.toggle_priority(id).map(|t| t.priority);
            self.report(result.map(|on| if on { "Starred" } else { "Unstarred" }));
        }
    }

    /// Delete the selected task, asking first when configured to.
    pub fn request_delete(&mut self) {
        let Some(id) = self.selected_task().map(|t| t.id) else {
            return;
        };
        if self.confirm_delete {
            self.mode = Mode::ConfirmDelete(id);
        } else {
            self.delete(id);
        }
    }

    /// Resolve a pending delete confirmation.
    pub fn confirm(&mut self, yes: bool) {
        if let Mode::ConfirmDelete(id) = self.mode {
            self.mode = Mode::Normal;
            if yes {
                self.delete(id);
            } else {
                self.status = Some("Kept".to_string());
            }
        }
    }

    fn delete(&mut self, id: i64) {
        let result = self.planner.remove(id).map(|_| "Deleted");
        self.report(result);
        self.clamp_selection();
    }

    fn report(&mut self, result: Result<&'static str, DeskError>) {
        self.status = Some(match result {
            Ok(message) => message.to_string(),
            Err(e) => {
                debug!("planner action failed: {e}");
                e.to_string()
            }
        });
    }

    // ==================== Prompts ====================

    /// Open a prompt for `field`, prefilled with its current value.
    pub fn begin_input(&mut self, field: Field) {
        let buffer = match field {
            Field::NewTask => String::new(),
            Field::EditTask(id) => self
                .planner
                .get(id)
                .map(|t| t.text.clone())
                .unwrap_or_default(),
            Field::Birth => self.birth_input.clone(),
            Field::Comparison => self.comparison_input.clone(),
            Field::Weight => self.weight_input.clone(),
            Field::Height => self.height_input.clone(),
        };
        self.mode = Mode::Input { field, buffer };
    }

    /// Open the edit prompt for the selected task.
    pub fn begin_edit_selected(&mut self) {
        if let Some(id) = self.selected_task().map(|t| t.id) {
            self.begin_input(Field::EditTask(id));
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let Mode::Input { buffer, .. } = &mut self.mode {
            buffer.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Mode::Input { buffer, .. } = &mut self.mode {
            buffer.pop();
        }
    }

    pub fn cancel_input(&mut self) {
        self.mode = Mode::Normal;
    }

    /// Apply the prompt's buffer to its field.
    pub fn submit_input(&mut self) {
        let Mode::Input { field, buffer } = std::mem::replace(&mut self.mode, Mode::Normal) else {
            return;
        };

        match field {
            Field::NewTask => match self.planner.add(&buffer) {
                Ok(_) => {
                    self.selected = self.planner.tasks().len().saturating_sub(1);
                    self.status = Some("Added".to_string());
                }
                Err(e) => {
                    // Keep the prompt open so the user can fix the text.
                    self.status = Some(e.to_string());
                    self.mode = Mode::Input { field, buffer };
                }
            },
            Field::EditTask(id) => {
                let result = self.planner.edit(id, &buffer).map(|_| "Updated");
                self.report(result);
            }
            Field::Birth => self.birth_input = buffer.trim().to_string(),
            Field::Comparison => self.comparison_input = buffer.trim().to_string(),
            Field::Weight => {
                self.weight_input = buffer.trim().to_string();
                self.recalculate_bmi();
            }
            Field::Height => {
                self.height_input = buffer.trim().to_string();
                self.recalculate_bmi();
            }
        }
    }

    // ==================== Calculators ====================

    /// Age for the entered dates; `None` until a birth date is entered.
    ///
    /// Recomputed on every frame so that "now" stays current.
    #[must_use]
    pub fn age(&self) -> Option<Result<AgeBreakdown, DeskError>> {
        if self.birth_input.is_empty() {
            return None;
        }
        Some(parse_moment(&self.birth_input).and_then(|birth| {
            if self.comparison_input.is_empty() {
                AgeBreakdown::until_now(birth)
            } else {
                AgeBreakdown::between(birth, parse_moment(&self.comparison_input)?)
            }
        }))
    }

    fn recalculate_bmi(&mut self) {
        if self.weight_input.is_empty() && self.height_input.is_empty() {
            self.bmi = None;
            return;
        }
        self.bmi = Some(
            BmiReading::from_inputs(&self.weight_input, &self.height_input)
                .map_err(|e| e.to_string()),
        );
    }
}
