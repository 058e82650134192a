//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::SettingsStore;
use crate::session::Snapshot;
use crate::tui::app::{App, SettingsField};

/// Primary and secondary colors for a session theme.
struct Theme {
    primary: Color,
    secondary: Color,
}

/// Map a theme key to its colors.
///
/// Work is blue, short breaks green, long breaks magenta.
fn theme(key: &str) -> Theme {
    match key {
        "short_break" => Theme {
            primary: Color::Green,
            secondary: Color::DarkGray,
        },
        "long_break" => Theme {
            primary: Color::Magenta,
            secondary: Color::DarkGray,
        },
        _ => Theme {
            primary: Color::Blue,
            secondary: Color::DarkGray,
        },
    }
}

/// Render the application UI.
pub fn render<S: SettingsStore>(frame: &mut Frame<'_>, app: &App<'_, S>) {
    let snapshot = app.snapshot();
    let colors = theme(snapshot.theme);

    // Create layout: header, timer body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Timer / settings
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, &snapshot, &colors, chunks[0]);

    if app.settings_open {
        render_settings(frame, app, &colors, chunks[1]);
    } else {
        render_timer(frame, &snapshot, &colors, chunks[1]);
    }

    render_status_bar(frame, app, chunks[2]);
}

/// Render the header with the session name.
fn render_header(frame: &mut Frame<'_>, snapshot: &Snapshot, colors: &Theme, area: Rect) {
    let title = format!(" Pomodoro Timer - {} ", snapshot.session.display_name());

    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(colors.primary)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.primary)),
        );

    frame.render_widget(header, area);
}

/// Render the countdown clock, progress dots, and controls.
fn render_timer(frame: &mut Frame<'_>, snapshot: &Snapshot, colors: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1), // Clock
            Constraint::Length(1),
            Constraint::Length(1), // Progress dots
            Constraint::Length(1),
            Constraint::Length(1), // Controls
            Constraint::Min(0),
        ])
        .split(area);

    let clock = Paragraph::new(snapshot.clock.clone())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(colors.primary)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(clock, chunks[1]);

    // One dot per completed session in the current cycle of four.
    let dots: Vec<Span<'_>> = (0..4)
        .map(|i| {
            if i < snapshot.completed_in_cycle {
                Span::styled("● ", Style::default().fg(colors.primary))
            } else {
                Span::styled("○ ", Style::default().fg(colors.secondary))
            }
        })
        .collect();
    let progress = Paragraph::new(Line::from(dots)).alignment(Alignment::Center);
    frame.render_widget(progress, chunks[3]);

    let controls = if snapshot.running {
        "Space: Pause   r: Reset   s: Settings   q: Quit"
    } else {
        "Space: Start   r: Reset   s: Settings   q: Quit"
    };
    let controls = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(controls, chunks[5]);
}

/// Render the settings panel.
fn render_settings<S: SettingsStore>(
    frame: &mut Frame<'_>,
    app: &App<'_, S>,
    colors: &Theme,
    area: Rect,
) {
    let rows = [
        (
            SettingsField::Work,
            "Work Duration",
            format!("{} min", app.draft.work_minutes),
        ),
        (
            SettingsField::ShortBreak,
            "Short Break",
            format!("{} min", app.draft.short_break_minutes),
        ),
        (
            SettingsField::LongBreak,
            "Long Break",
            format!("{} min", app.draft.long_break_minutes),
        ),
        (
            SettingsField::Sound,
            "Sound",
            if app.draft.sound_enabled {
                "on".to_string()
            } else {
                "off".to_string()
            },
        ),
    ];

    let mut lines = vec![Line::default()];
    for (field, label, value) in rows {
        let selected = field == app.selected_field;
        let marker = if selected { "> " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(colors.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        lines.push(Line::from(Span::styled(
            format!("{marker}{label:<16} {value:>7}"),
            style,
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "j/k: select   h/l: adjust   Enter: save   Esc: cancel",
        Style::default().fg(Color::DarkGray),
    )));

    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Timer Settings ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.primary)),
    );

    frame.render_widget(panel, area);
}

/// Render the status bar.
fn render_status_bar<S: SettingsStore>(frame: &mut Frame<'_>, app: &App<'_, S>, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("Space:start/pause | r:reset | s:settings | ?:help | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
