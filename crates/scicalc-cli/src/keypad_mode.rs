//! Full-screen keypad mode
//!
//! Terminal setup and the event loop for the TUI keypad frontend.
//! Buttons respond to both the keyboard and mouse clicks on the grid.

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use scicalc::tui::{keypad_area, render, InputHandler, KeyAction, KeypadApp};

use crate::error::CliResult;

/// Runs the keypad interface until the user quits
pub fn run() -> CliResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Event loop: draw, translate terminal events into key presses, repeat
fn run_app<B: Backend>(terminal: &mut Terminal<B>) -> CliResult<()> {
    let mut app = KeypadApp::new();
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|f| render(&app, f))?;

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                match input_handler.handle_key(key) {
                    KeyAction::Press(k) => app.press(k),
                    KeyAction::Quit => app.quit(),
                    KeyAction::None => {}
                }
            }
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(_) = mouse.kind {
                    let size = terminal.size()?;
                    let area = keypad_area(Rect::new(0, 0, size.width, size.height));
                    let key = app
                        .grid()
                        .hit_test(area, mouse.column, mouse.row)
                        .and_then(|idx| app.grid().get_button(idx))
                        .map(|btn| btn.key);
                    if let Some(key) = key {
                        app.press(key);
                    }
                }
            }
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
