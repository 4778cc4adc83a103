//! Keypad state machine
//!
//! The interaction state behind the graphical keypad: a display entry
//! buffer, a stored first operand, and a pending operator. Every button
//! press is a discrete event applied to this state; the math itself is
//! delegated to the pure operation library. Operators evaluate left to
//! right with no precedence - pressing an operator while another is
//! pending evaluates the pending one first.
//!
//! Any library failure resets the state to empty/zero and propagates the
//! error so the frontend can surface it (as a modal dialog, a status
//! line, or however it presents errors).

use crate::core::{self, BinaryOp, CalcError, CalcResult};

/// A keypad input event - one per button on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A digit key (0-9)
    Digit(u8),
    /// The decimal point key
    Decimal,
    /// A binary operator key (+, -, ×, ÷, x^y)
    Op(BinaryOp),
    /// The equals key
    Equals,
    /// Square root of the current entry
    Sqrt,
    /// Factorial of the current entry
    Factorial,
    /// Natural logarithm of the current entry
    Ln,
    /// Toggle the sign of the current entry
    ToggleSign,
    /// Delete the last character of the current entry
    Backspace,
    /// Clear the current entry only
    ClearEntry,
    /// Clear everything (entry, operand, pending operator)
    Clear,
}

impl Key {
    /// Returns the button label for display
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Digit(d) => match d {
                0 => "0",
                1 => "1",
                2 => "2",
                3 => "3",
                4 => "4",
                5 => "5",
                6 => "6",
                7 => "7",
                8 => "8",
                _ => "9",
            },
            Self::Decimal => ".",
            Self::Op(op) => match op {
                BinaryOp::Add => "+",
                BinaryOp::Subtract => "-",
                BinaryOp::Multiply => "×",
                BinaryOp::Divide => "÷",
                BinaryOp::Power => "xʸ",
            },
            Self::Equals => "=",
            Self::Sqrt => "√",
            Self::Factorial => "n!",
            Self::Ln => "ln",
            Self::ToggleSign => "±",
            Self::Backspace => "←",
            Self::ClearEntry => "CE",
            Self::Clear => "C",
        }
    }
}

/// Keypad interaction state
///
/// Starts at a display of `"0"` with nothing pending. All mutation goes
/// through [`KeypadState::press`] or the per-key methods it dispatches to.
#[derive(Debug, Clone, PartialEq)]
pub struct KeypadState {
    /// Display entry buffer (digits, optional sign, optional decimal point)
    entry: String,
    /// Stored first operand for a pending binary operator
    operand: f64,
    /// Operator awaiting its second operand
    pending: Option<BinaryOp>,
    /// Next digit starts a new entry rather than appending
    fresh: bool,
}

impl Default for KeypadState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypadState {
    /// Creates a keypad in its initial state
    #[must_use]
    pub fn new() -> Self {
        Self {
            entry: "0".to_string(),
            operand: 0.0,
            pending: None,
            fresh: true,
        }
    }

    /// Returns the current display string
    #[must_use]
    pub fn display(&self) -> &str {
        &self.entry
    }

    /// Returns the operator awaiting a second operand, if any
    #[must_use]
    pub fn pending_op(&self) -> Option<BinaryOp> {
        self.pending
    }

    /// Returns the stored first operand (zero when nothing is pending)
    #[must_use]
    pub fn operand_value(&self) -> f64 {
        self.operand
    }

    /// Returns the numeric value of the current entry
    ///
    /// An unparseable buffer reads as zero; the press methods never
    /// produce one, but the zero fallback keeps this total.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.entry.parse().unwrap_or(0.0)
    }

    /// Applies a single key press to the state
    pub fn press(&mut self, key: Key) -> CalcResult<()> {
        match key {
            Key::Digit(d) => {
                self.press_digit(d);
                Ok(())
            }
            Key::Decimal => {
                self.press_decimal();
                Ok(())
            }
            Key::Op(op) => self.press_operator(op),
            Key::Equals => self.press_equals(),
            Key::Sqrt => self.press_sqrt(),
            Key::Factorial => self.press_factorial(),
            Key::Ln => self.press_ln(),
            Key::ToggleSign => {
                self.toggle_sign();
                Ok(())
            }
            Key::Backspace => {
                self.backspace();
                Ok(())
            }
            Key::ClearEntry => {
                self.clear_entry();
                Ok(())
            }
            Key::Clear => {
                self.clear();
                Ok(())
            }
        }
    }

    /// Appends a digit to the entry (or starts a new entry)
    pub fn press_digit(&mut self, d: u8) {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            return;
        };
        if self.fresh {
            self.entry.clear();
            self.entry.push(c);
            self.fresh = false;
        } else {
            self.entry.push(c);
        }
    }

    /// Appends a decimal point; at most one per entry
    pub fn press_decimal(&mut self) {
        if self.fresh {
            self.entry = "0.".to_string();
            self.fresh = false;
        } else if !self.entry.contains('.') {
            self.entry.push('.');
        }
    }

    /// Commits the entry as the first operand and records the operator
    ///
    /// A previously pending operator is evaluated first, so chains like
    /// `2 + 3 × 4 =` run strictly left to right (yielding 20, not 14).
    pub fn press_operator(&mut self, op: BinaryOp) -> CalcResult<()> {
        if self.pending.is_some() && !self.fresh {
            self.press_equals()?;
        }
        self.operand = self.value();
        self.pending = Some(op);
        self.fresh = true;
        Ok(())
    }

    /// Evaluates the pending operator against the current entry
    ///
    /// Without a pending operator this is a no-op.
    pub fn press_equals(&mut self) -> CalcResult<()> {
        if let Some(op) = self.pending {
            let second = self.value();
            let result = self.guard(op.apply(self.operand, second))?;
            self.show(result);
            self.pending = None;
            self.operand = 0.0;
        }
        Ok(())
    }

    /// Replaces the entry with its principal square root
    pub fn press_sqrt(&mut self) -> CalcResult<()> {
        let value = self.value();
        let result = self.guard(core::sqrt(value))?;
        self.show(result);
        Ok(())
    }

    /// Replaces the entry with its factorial
    ///
    /// The entry must hold a non-negative integer; the result is shown as
    /// the exact 64-bit value rather than going through float formatting.
    pub fn press_factorial(&mut self) -> CalcResult<()> {
        let value = self.value();
        if value < 0.0 || value.fract() != 0.0 {
            self.clear();
            return Err(CalcError::invalid_domain(
                "Factorial only defined for non-negative integers",
            ));
        }
        let result = self.guard(core::factorial(value as i64))?;
        self.entry = result.to_string();
        self.fresh = true;
        Ok(())
    }

    /// Replaces the entry with its natural logarithm
    pub fn press_ln(&mut self) -> CalcResult<()> {
        let value = self.value();
        let result = self.guard(core::ln(value))?;
        self.show(result);
        Ok(())
    }

    /// Toggles the sign of the current entry; `"0"` stays unsigned
    pub fn toggle_sign(&mut self) {
        if self.entry == "0" {
            return;
        }
        if let Some(stripped) = self.entry.strip_prefix('-') {
            self.entry = stripped.to_string();
        } else {
            self.entry.insert(0, '-');
        }
    }

    /// Deletes the last character of the entry
    ///
    /// Ignored on a fresh entry; deleting down to nothing (or a bare
    /// minus sign) leaves `"0"`.
    pub fn backspace(&mut self) {
        if self.fresh {
            return;
        }
        self.entry.pop();
        if self.entry.is_empty() || self.entry == "-" {
            self.entry = "0".to_string();
            self.fresh = true;
        }
    }

    /// Clears the current entry, keeping any pending operator
    pub fn clear_entry(&mut self) {
        self.entry = "0".to_string();
        self.fresh = true;
    }

    /// Resets everything to the initial state
    pub fn clear(&mut self) {
        self.entry = "0".to_string();
        self.operand = 0.0;
        self.pending = None;
        self.fresh = true;
    }

    /// Shows a computed result as the new entry
    fn show(&mut self, value: f64) {
        self.entry = format_number(value);
        self.fresh = true;
    }

    /// Resets the state on failure before propagating the error
    fn guard<T>(&mut self, result: CalcResult<T>) -> CalcResult<T> {
        if result.is_err() {
            self.clear();
        }
        result
    }
}

/// Formats a result for the keypad display
///
/// Mathematically integral values print without a decimal part; others
/// print to ten decimal places with trailing zeros trimmed.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{value:.10}");
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        trimmed.to_string()
    }
}
