//! Keypad button grid
//!
//! The 6x4 button layout of the graphical keypad, with hit-testing for
//! mouse clicks and a ratatui widget for rendering:
//!
//! ```text
//! [ √ ] [ xʸ ] [ n! ] [ ln ]
//! [ C ] [ CE ] [ ←  ] [ ÷  ]
//! [ 7 ] [ 8  ] [ 9  ] [ ×  ]
//! [ 4 ] [ 5  ] [ 6  ] [ -  ]
//! [ 1 ] [ 2  ] [ 3  ] [ +  ]
//! [ ± ] [ 0  ] [ .  ] [ =  ]
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::BinaryOp;
use crate::keypad::Key;

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The key this button presses
    pub key: Key,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a new unpressed button for a key
    #[must_use]
    pub fn new(key: Key) -> Self {
        Self {
            key,
            pressed: false,
        }
    }

    /// Returns the button label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.key.label()
    }
}

/// The keypad button grid
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order (6 rows x 4 cols)
    buttons: Vec<KeypadButton>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard scientific keypad layout
    #[must_use]
    pub fn new() -> Self {
        let keys = [
            // Row 1: scientific functions
            Key::Sqrt,
            Key::Op(BinaryOp::Power),
            Key::Factorial,
            Key::Ln,
            // Row 2: edit keys and divide
            Key::Clear,
            Key::ClearEntry,
            Key::Backspace,
            Key::Op(BinaryOp::Divide),
            // Rows 3-5: digits and remaining operators
            Key::Digit(7),
            Key::Digit(8),
            Key::Digit(9),
            Key::Op(BinaryOp::Multiply),
            Key::Digit(4),
            Key::Digit(5),
            Key::Digit(6),
            Key::Op(BinaryOp::Subtract),
            Key::Digit(1),
            Key::Digit(2),
            Key::Digit(3),
            Key::Op(BinaryOp::Add),
            // Row 6: sign, zero, decimal, equals
            Key::ToggleSign,
            Key::Digit(0),
            Key::Decimal,
            Key::Equals,
        ];

        Self {
            buttons: keys.iter().copied().map(KeypadButton::new).collect(),
            cols: 4,
            rows: 6,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the index of the button for a key
    #[must_use]
    pub fn find_button(&self, key: Key) -> Option<usize> {
        self.buttons.iter().position(|b| b.key == key)
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Highlights the button for a key, releasing all others
    pub fn highlight(&mut self, key: Key) {
        self.release_all();
        if let Some(idx) = self.find_button(key) {
            self.buttons[idx].pressed = true;
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a terminal click position inside `area` to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for the border (1 char on each side)
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;

        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

/// Style for a button, grouped the way the original keypad colors its keys
fn button_style(btn: &KeypadButton) -> Style {
    if btn.pressed {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }
    match btn.key {
        Key::Digit(_) | Key::Decimal | Key::ToggleSign => Style::default().fg(Color::White),
        Key::Clear | Key::ClearEntry | Key::Backspace => Style::default().fg(Color::Red),
        Key::Sqrt | Key::Factorial | Key::Ln | Key::Op(BinaryOp::Power) => {
            Style::default().fg(Color::Yellow)
        }
        Key::Op(_) | Key::Equals => Style::default().fg(Color::Cyan),
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < 4 || inner.height < 6 {
            return; // Too small to render
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label());
                let width = label.chars().count() as u16;
                let label_x = x + btn_width.saturating_sub(width) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(
                        label_x,
                        label_y,
                        &Span::styled(label, button_style(btn)),
                        btn_width,
                    );
                }
            }
        }
    }
}
