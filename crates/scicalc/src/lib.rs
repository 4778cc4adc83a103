//! Scientific calculator library
//!
//! A small library of arithmetic and transcendental operations with
//! per-operation domain validation, plus the keypad state machine and a
//! terminal keypad frontend built on it.
//!
//! The operations are stateless pure functions: every call is independent,
//! completes or fails immediately, and is safe to call from any number of
//! threads without coordination. Exactly two error kinds exist -
//! [`CalcError::DivisionByZero`] and [`CalcError::InvalidDomain`] - both
//! deterministic rejections raised at the point of violation.
//!
//! # Example
//!
//! ```rust
//! use scicalc::prelude::*;
//!
//! assert_eq!(add(2.0, 3.0), 5.0);
//! assert_eq!(factorial(5), Ok(120));
//! assert!(divide(5.0, 0.0).is_err());
//!
//! // Keypad state machine: 12 + 30 =
//! let mut keypad = KeypadState::new();
//! for key in [
//!     Key::Digit(1), Key::Digit(2),
//!     Key::Op(BinaryOp::Add),
//!     Key::Digit(3), Key::Digit(0),
//!     Key::Equals,
//! ] {
//!     keypad.press(key)?;
//! }
//! assert_eq!(keypad.display(), "42");
//! # Ok::<(), scicalc::CalcError>(())
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

pub use crate::core::{CalcError, CalcResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        add, divide, exp, factorial, ln, log, multiply, power, sqrt, subtract, BinaryOp,
        CalcError, CalcResult,
    };
    pub use crate::keypad::{format_number, Key, KeypadState};

    #[cfg(feature = "tui")]
    pub use crate::tui::{InputHandler, KeyAction, KeypadApp};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_operations() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(multiply(6.0, 7.0), 42.0);
        assert_eq!(factorial(5), Ok(120));
    }

    #[test]
    fn test_prelude_keypad() {
        let mut keypad = KeypadState::new();
        keypad.press(Key::Digit(8)).unwrap();
        keypad.press(Key::Op(BinaryOp::Subtract)).unwrap();
        keypad.press(Key::Digit(3)).unwrap();
        keypad.press(Key::Equals).unwrap();
        assert_eq!(keypad.display(), "5");
    }

    #[test]
    fn test_error_kinds_are_exhaustive() {
        // The two documented failure kinds, and nothing else
        let division: CalcError = divide(1.0, 0.0).unwrap_err();
        let domain: CalcError = sqrt(-1.0).unwrap_err();
        assert!(matches!(division, CalcError::DivisionByZero));
        assert!(matches!(domain, CalcError::InvalidDomain(_)));
    }
}
