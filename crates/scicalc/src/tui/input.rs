//! Keyboard input handling
//!
//! Maps crossterm key events to keypad presses so the TUI can be driven
//! from the keyboard as well as the button grid.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::BinaryOp;
use crate::keypad::Key;

/// Actions triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a keypad key
    Press(Key),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to keypad actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Press(Key::Clear),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::handle_char(c),
            KeyCode::Backspace => KeyAction::Press(Key::Backspace),
            KeyCode::Delete | KeyCode::Esc => KeyAction::Press(Key::ClearEntry),
            KeyCode::Enter => KeyAction::Press(Key::Equals),
            _ => KeyAction::None,
        }
    }

    /// Maps a plain character to an action
    fn handle_char(c: char) -> KeyAction {
        if let Some(d) = c.to_digit(10) {
            return KeyAction::Press(Key::Digit(d as u8));
        }
        match c {
            '.' | ',' => KeyAction::Press(Key::Decimal),
            '+' => KeyAction::Press(Key::Op(BinaryOp::Add)),
            '-' => KeyAction::Press(Key::Op(BinaryOp::Subtract)),
            '*' | 'x' | '×' => KeyAction::Press(Key::Op(BinaryOp::Multiply)),
            '/' | '÷' => KeyAction::Press(Key::Op(BinaryOp::Divide)),
            '^' => KeyAction::Press(Key::Op(BinaryOp::Power)),
            '=' => KeyAction::Press(Key::Equals),
            's' => KeyAction::Press(Key::Sqrt),
            '!' => KeyAction::Press(Key::Factorial),
            'l' => KeyAction::Press(Key::Ln),
            'n' => KeyAction::Press(Key::ToggleSign),
            'c' => KeyAction::Press(Key::Clear),
            'e' => KeyAction::Press(Key::ClearEntry),
            'q' => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Character mapping tests =====

    #[test]
    fn test_digit_keys() {
        let handler = InputHandler::new();
        for d in 0..=9u8 {
            let c = char::from(b'0' + d);
            assert_eq!(
                handler.handle_key(key(KeyCode::Char(c))),
                KeyAction::Press(Key::Digit(d))
            );
        }
    }

    #[test]
    fn test_operator_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('+'))),
            KeyAction::Press(Key::Op(BinaryOp::Add))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('/'))),
            KeyAction::Press(Key::Op(BinaryOp::Divide))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('^'))),
            KeyAction::Press(Key::Op(BinaryOp::Power))
        );
    }

    #[test]
    fn test_unary_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('s'))),
            KeyAction::Press(Key::Sqrt)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('!'))),
            KeyAction::Press(Key::Factorial)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('l'))),
            KeyAction::Press(Key::Ln)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('n'))),
            KeyAction::Press(Key::ToggleSign)
        );
    }

    #[test]
    fn test_evaluate_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter)),
            KeyAction::Press(Key::Equals)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('='))),
            KeyAction::Press(Key::Equals)
        );
    }

    #[test]
    fn test_edit_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Backspace)),
            KeyAction::Press(Key::Backspace)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc)),
            KeyAction::Press(Key::ClearEntry)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('c'))),
            KeyAction::Press(Key::Clear)
        );
    }

    // ===== Quit and control tests =====

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key(ctrl(KeyCode::Char('c'))), KeyAction::Quit);
        assert_eq!(handler.handle_key(ctrl(KeyCode::Char('q'))), KeyAction::Quit);
    }

    #[test]
    fn test_ctrl_l_clears() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(ctrl(KeyCode::Char('l'))),
            KeyAction::Press(Key::Clear)
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('z'))), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Tab)), KeyAction::None);
        assert_eq!(handler.handle_key(ctrl(KeyCode::Char('x'))), KeyAction::None);
    }
}
