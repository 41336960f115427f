//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::clock::Phase;
use crate::timer::TimerState;
use crate::tui::app::{App, HELP};

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, lengths, clock, controls, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Lengths
            Constraint::Min(7),    // Clock
            Constraint::Length(1), // Controls
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_lengths(frame, app, chunks[1]);
    render_clock(frame, app, chunks[2]);
    render_controls(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[4]);
}

const fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Session => Color::Red,
        Phase::Break => Color::Green,
    }
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, area: Rect) {
    let header = Paragraph::new(" pomoclock ")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the break and session length controls.
fn render_lengths(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Lengths are locked while the countdown runs
    let locked = app.clock.is_running();
    let settings = app.clock.settings();

    let panels = [
        ("Break Length", settings.break_length(), "h", "l", Phase::Break),
        ("Session Length", settings.session_length(), "j", "k", Phase::Session),
    ];

    for ((title, length, down, up, phase), area) in panels.into_iter().zip(columns.iter()) {
        let key_style = if locked {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(format!("[{down}] − "), key_style),
                Span::styled(
                    format!("{length:>2}"),
                    Style::default()
                        .fg(phase_color(phase))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" + [{up}]"), key_style),
            ]),
            Line::from(Span::styled("minutes", Style::default().fg(Color::DarkGray))),
        ];

        let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        );

        frame.render_widget(panel, *area);
    }
}

/// Render the phase label, time left, and progress gauge.
fn render_clock(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(phase_color(app.clock.phase())));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Padding
            Constraint::Length(1), // Phase label
            Constraint::Length(1), // Time left
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Gauge
            Constraint::Min(0),    // Padding
        ])
        .split(inner);

    let mut style = Style::default()
        .fg(phase_color(app.clock.phase()))
        .add_modifier(Modifier::BOLD);
    if app.pulse() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let label = Paragraph::new(app.clock.phase().label())
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(label, rows[1]);

    let time_left = Paragraph::new(app.clock.time_left_display())
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(time_left, rows[2]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(phase_color(app.clock.phase())))
        .ratio(app.clock.progress().clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, horizontal_margin(rows[4], 4));
}

fn horizontal_margin(area: Rect, margin: u16) -> Rect {
    let margin = margin.min(area.width / 2);
    Rect {
        x: area.x + margin,
        width: area.width - margin * 2,
        ..area
    }
}

/// Render the start/pause and reset controls.
fn render_controls(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let toggle = match app.clock.state() {
        TimerState::Running => "⏸ pause",
        TimerState::Paused => "▶ resume",
        TimerState::Stopped => "▶ start",
    };

    let controls = Line::from(vec![
        Span::styled("[space] ", Style::default().fg(Color::Yellow)),
        Span::raw(toggle),
        Span::raw("   "),
        Span::styled("[r] ", Style::default().fg(Color::Yellow)),
        Span::raw("■ reset"),
    ]);

    frame.render_widget(Paragraph::new(controls).alignment(Alignment::Center), area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
