//! TUI application state
//!
//! Wraps the keypad state machine with the pieces the terminal frontend
//! needs: the button grid (for rendering and highlighting), the modal
//! error message, and the quit flag.

use crate::keypad::{format_number, Key, KeypadState};

use super::grid::Keypad;

/// Calculator TUI application state
#[derive(Debug, Default)]
pub struct KeypadApp {
    /// The keypad state machine
    state: KeypadState,
    /// The button grid
    grid: Keypad,
    /// Active modal error message, if any
    error: Option<String>,
    /// Whether the app should quit
    should_quit: bool,
}

impl KeypadApp {
    /// Creates a new app in the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the keypad state machine
    #[must_use]
    pub fn state(&self) -> &KeypadState {
        &self.state
    }

    /// Returns the button grid
    #[must_use]
    pub fn grid(&self) -> &Keypad {
        &self.grid
    }

    /// Returns the active modal error message, if any
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies a key press
    ///
    /// While the error modal is up, the first press dismisses it and is
    /// otherwise swallowed; the state machine has already been reset by
    /// the failure. Library failures become the modal message.
    pub fn press(&mut self, key: Key) {
        if self.error.take().is_some() {
            self.grid.release_all();
            return;
        }
        self.grid.highlight(key);
        if let Err(e) = self.state.press(key) {
            self.error = Some(e.to_string());
        }
    }

    /// Returns the display line: the current entry buffer
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Returns the pending-operation indicator line, if an operator is
    /// awaiting its second operand (e.g. `"12 +"`)
    #[must_use]
    pub fn pending_line(&self) -> Option<String> {
        self.state
            .pending_op()
            .map(|op| format!("{} {}", format_number(self.state.operand_value()), op.symbol()))
    }
}
