//! TUI rendering
//!
//! Lays out the display panel, the keypad grid, a key-binding help panel,
//! and the modal error overlay.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::KeypadApp;
use super::grid::KeypadWidget;

/// Keyboard bindings shown in the help panel
const HELP_LINES: &[&str] = &[
    "0-9 .   enter digits",
    "+ - * /  operators",
    "^        power",
    "Enter/=  evaluate",
    "s        square root",
    "!        factorial",
    "l        natural log",
    "n        toggle sign",
    "Bksp     delete digit",
    "Esc      clear entry",
    "c        clear all",
    "q        quit",
];

/// Splits the frame into display and body areas
fn layout(area: Rect) -> (Rect, Rect, Rect) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(4), Constraint::Min(14)])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(20)])
        .split(vertical[1]);

    (vertical[0], body[0], body[1])
}

/// Returns the keypad grid's screen area for mouse hit-testing
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    layout(area).1
}

/// Renders the calculator UI to the frame
pub fn render(app: &KeypadApp, frame: &mut Frame) {
    let (display, keypad, help) = layout(frame.area());

    render_display(app, display, frame);
    frame.render_widget(KeypadWidget::new(app.grid()), keypad);
    render_help(help, frame);

    if let Some(message) = app.error() {
        render_error_modal(message, frame);
    }
}

/// Renders the display panel: pending-operator line plus the entry buffer
fn render_display(app: &KeypadApp, area: Rect, frame: &mut Frame) {
    let pending = app.pending_line().unwrap_or_default();
    let lines = vec![
        Line::styled(pending, Style::default().fg(Color::DarkGray)),
        Line::styled(
            app.display().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let widget = Paragraph::new(lines).alignment(Alignment::Right).block(
        Block::default()
            .title(" Scientific Calculator ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(widget, area);
}

/// Renders the key-binding help panel
fn render_help(area: Rect, frame: &mut Frame) {
    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|l| Line::styled(*l, Style::default().fg(Color::Gray)))
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Keys ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(widget, area);
}

/// Renders the modal error overlay in the center of the frame
fn render_error_modal(message: &str, frame: &mut Frame) {
    let area = centered_rect(frame.area(), 40, 5);
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::styled(
            message.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "press any key",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Error ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(widget, area);
}

/// Computes a centered rectangle of at most `width` x `height` inside `area`
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
