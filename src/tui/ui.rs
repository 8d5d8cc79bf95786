//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::features::bmi::BmiCategory;
use crate::features::timer::{format_clock, TimerMode};
use crate::storage::KvStore;
use crate::tui::app::{App, Mode, Tab};
use crate::tui::event::help_text;

const GLOBAL_HELP: &str = "Tab/1-4:switch | ?:help | q:quit";

/// Render the application UI.
pub fn render<S: KvStore>(frame: &mut Frame<'_>, app: &App<S>) {
    // Create layout: tabs, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);
    match app.tab {
        Tab::Planner => render_planner(frame, app, chunks[1]),
        Tab::Timer => render_timer(frame, app, chunks[1]),
        Tab::Age => render_age(frame, app, chunks[1]),
        Tab::Bmi => render_bmi(frame, app, chunks[1]),
    }
    render_status_bar(frame, app, chunks[2]);

    if let Mode::Input { field, buffer } = &app.mode {
        render_prompt(frame, field.label(), buffer);
    }
    if app.show_help {
        render_help(frame, app.tab);
    }
}

fn render_tabs<S: KvStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let titles = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| format!(" {} {} ", i + 1, tab.title()));

    // Show a running timer on every tab.
    let snapshot = app.timer.snapshot();
    let title = if snapshot.running {
        format!(
            " focusdesk ─ {} {} ",
            mode_short(snapshot.mode),
            format_clock(snapshot.remaining_seconds)
        )
    } else {
        " focusdesk ".to_string()
    };

    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(tabs, area);
}

fn render_planner<S: KvStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let tasks = app.planner.tasks();
    let done = tasks.iter().filter(|t| t.completed).count();
    let block = Block::default()
        .title(format!(" Today ({done}/{} done) ", tasks.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if tasks.is_empty() {
        let empty = Paragraph::new("Nothing planned yet. Press 'a' to add a task.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let pending_delete = match app.mode {
        Mode::ConfirmDelete(id) => Some(id),
        _ => None,
    };

    let items: Vec<ListItem<'_>> = tasks
        .iter()
        .map(|task| {
            let (icon, icon_color) = if task.completed {
                ("[x] ", Color::Green)
            } else {
                ("[ ] ", Color::White)
            };

            let mut text_style = Style::default();
            if task.completed {
                text_style = text_style
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT);
            }
            if task.priority {
                text_style = text_style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
            }

            let mut spans = vec![
                Span::styled(icon, Style::default().fg(icon_color)),
                Span::styled(
                    if task.priority { "★ " } else { "  " },
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(task.text.as_str(), text_style),
            ];
            if pending_delete == Some(task.id) {
                spans.push(Span::styled(
                    "  delete? (y/n)",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));

    // Create list state for scrolling
    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_timer<S: KvStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let snapshot = app.timer.snapshot();
    let config = app.timer.config();
    let color = match snapshot.mode {
        TimerMode::Focus => Color::Red,
        TimerMode::Break => Color::Green,
    };

    let block = Block::default()
        .title(format!(" {} ", snapshot.mode.display_name()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2), // Clock
            Constraint::Length(3), // Gauge
            Constraint::Length(1),
            Constraint::Min(0), // Details
        ])
        .split(inner);

    let state = if snapshot.running { "running" } else { "paused" };
    let clock = Paragraph::new(vec![
        Line::from(Span::styled(
            format_clock(snapshot.remaining_seconds),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(state, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(clock, rows[1]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .percent(u16::from(snapshot.percent_remaining))
        .label(format!("{}% left", snapshot.percent_remaining));
    frame.render_widget(gauge, rows[2]);

    let details = Paragraph::new(vec![
        Line::from(format!(
            "Focus {} min  ·  Break {} min",
            config.focus_minutes(),
            config.break_minutes()
        )),
        Line::from(format!("Periods completed: {}", app.timer.completed_phases())),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::White));
    frame.render_widget(details, rows[4]);
}

fn render_age<S: KvStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let mut lines = vec![
        field_line("Birth", &app.birth_input, "press b"),
        field_line("Compare with", &app.comparison_input, "now"),
        Line::from(""),
    ];

    match app.age() {
        None => lines.push(Line::from(Span::styled(
            "Enter a birth date to see the age.",
            Style::default().fg(Color::DarkGray),
        ))),
        Some(Err(e)) => lines.push(error_line(&e.to_string())),
        Some(Ok(age)) => {
            lines.push(Line::from(Span::styled(
                format!(
                    "{} years, {} months, {} days, {} hours, {} minutes, {} seconds",
                    age.years, age.months, age.days, age.hours, age.minutes, age.seconds
                ),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            for (label, value) in [
                ("Months", age.total_months),
                ("Days", age.total_days),
                ("Hours", age.total_hours),
                ("Minutes", age.total_minutes),
                ("Seconds", age.total_seconds),
            ] {
                lines.push(Line::from(vec![
                    Span::styled(format!("{label:>8}: "), Style::default().fg(Color::DarkGray)),
                    Span::raw(value.to_string()),
                ]));
            }
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title(" Age Calculator ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_bmi<S: KvStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let mut lines = vec![
        field_line("Weight (kg)", &app.weight_input, "press w"),
        field_line("Height (cm)", &app.height_input, "press h"),
        Line::from(""),
    ];

    match &app.bmi {
        None => {}
        Some(Err(e)) => lines.push(error_line(e)),
        Some(Ok(reading)) => {
            let color = match reading.category {
                BmiCategory::Normal => Color::Green,
                BmiCategory::Underweight | BmiCategory::Overweight => Color::Yellow,
                BmiCategory::Obese => Color::Red,
            };
            lines.push(Line::from(vec![
                Span::raw("BMI: "),
                Span::styled(
                    reading.formatted(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", reading.category), Style::default().fg(color)),
            ]));
            lines.push(Line::from(reading.category.feedback()));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title(" BMI Calculator ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn field_line<'a>(label: &'a str, value: &'a str, placeholder: &'a str) -> Line<'a> {
    let value = if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(value)
    };
    Line::from(vec![
        Span::styled(format!("{label:>12}: "), Style::default().fg(Color::DarkGray)),
        value,
    ])
}

fn error_line(message: &str) -> Line<'static> {
    Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::Red),
    ))
}

/// Render the status bar.
fn render_status_bar<S: KvStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let status_text = match (&app.mode, app.status.as_deref()) {
        (Mode::ConfirmDelete(_), _) => "Delete this task? y/n",
        (Mode::Input { .. }, _) => "Enter:save | Esc:cancel",
        (Mode::Normal, Some(status)) => status,
        (Mode::Normal, None) => GLOBAL_HELP,
    };

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

fn render_prompt(frame: &mut Frame<'_>, label: &str, buffer: &str) {
    let area = centered(frame.area(), 60, 3);
    let prompt = Paragraph::new(format!("{buffer}▏")).block(
        Block::default()
            .title(format!(" {label} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(prompt, area);
}

fn render_help(frame: &mut Frame<'_>, tab: Tab) {
    let area = centered(frame.area(), 70, 6);
    let help = Paragraph::new(vec![
        Line::from(Span::styled(
            tab.title(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(help_text(tab)),
        Line::from(""),
        Line::from(GLOBAL_HELP),
    ])
    .block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    )
    .wrap(Wrap { trim: true });
    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}

/// A box `width` columns by `height` rows centred in `area`, clipped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

const fn mode_short(mode: TimerMode) -> &'static str {
    match mode {
        TimerMode::Focus => "Focus",
        TimerMode::Break => "Break",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::planner::Planner;
    use crate::features::timer::{SilentChime, TimerConfiguration, TimerSession};
    use crate::storage::MemoryStore;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App<&MemoryStore>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app(store: &MemoryStore) -> App<&MemoryStore> {
        App::new(
            Planner::load(store).unwrap(),
            TimerSession::new(TimerConfiguration::default(), Box::new(SilentChime)),
            true,
        )
    }

    #[test]
    fn test_render_empty_planner() {
        let store = MemoryStore::new();
        let screen = draw(&app(&store));

        assert!(screen.contains("Planner"));
        assert!(screen.contains("Nothing planned yet"));
    }

    #[test]
    fn test_render_timer_tab() {
        let store = MemoryStore::new();
        let mut app = app(&store);
        app.select_tab(Tab::Timer);
        let screen = draw(&app);

        assert!(screen.contains("25:00"));
        assert!(screen.contains("100% left"));
        assert!(screen.contains("paused"));
    }

    #[test]
    fn test_render_bmi_result() {
        let store = MemoryStore::new();
        let mut app = app(&store);
        app.select_tab(Tab::Bmi);
        app.weight_input = "70".to_string();
        app.height_input = "175".to_string();
        app.bmi = Some(
            crate::features::bmi::BmiReading::from_inputs("70", "175").map_err(|e| e.to_string()),
        );
        let screen = draw(&app);

        assert!(screen.contains("22.86"));
    }

    #[test]
    fn test_centered_clips_to_area() {
        let area = Rect::new(0, 0, 40, 2);
        let rect = centered(area, 60, 3);
        assert_eq!((rect.width, rect.height), (40, 2));
    }
}
