//! Property-based tests for the keypad state machine
//!
//! The keypad must stay well-formed under any button sequence: no panic,
//! a display that always parses back to a number, and a clean reset after
//! every failure.

use proptest::prelude::*;
use scicalc::prelude::*;

// ===== Strategy definitions =====

/// Generate any valid digit (0-9)
fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

/// Generate any binary operator
fn operator_strategy() -> impl Strategy<Value = BinaryOp> {
    prop_oneof![
        Just(BinaryOp::Add),
        Just(BinaryOp::Subtract),
        Just(BinaryOp::Multiply),
        Just(BinaryOp::Divide),
        Just(BinaryOp::Power),
    ]
}

/// Generate any keypad key
fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        digit_strategy().prop_map(Key::Digit),
        Just(Key::Decimal),
        operator_strategy().prop_map(Key::Op),
        Just(Key::Equals),
        Just(Key::Sqrt),
        Just(Key::Factorial),
        Just(Key::Ln),
        Just(Key::ToggleSign),
        Just(Key::Backspace),
        Just(Key::ClearEntry),
        Just(Key::Clear),
    ]
}

// ===== Key properties =====

proptest! {
    /// Every key has a non-empty button label
    #[test]
    fn prop_key_has_label(key in key_strategy()) {
        prop_assert!(!key.label().is_empty());
    }

    /// Digit keys label with their own digit
    #[test]
    fn prop_digit_label_matches(d in digit_strategy()) {
        prop_assert_eq!(Key::Digit(d).label(), d.to_string());
    }
}

// ===== State machine properties =====

proptest! {
    /// No key sequence panics, and the display always parses as a number
    #[test]
    fn prop_any_sequence_keeps_display_numeric(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let mut keypad = KeypadState::new();
        for key in keys {
            let _ = keypad.press(key);
            prop_assert!(
                keypad.display().parse::<f64>().is_ok(),
                "unparseable display: {:?}",
                keypad.display()
            );
        }
    }

    /// Every failure leaves the keypad in its initial state
    #[test]
    fn prop_failure_resets_state(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let mut keypad = KeypadState::new();
        for key in keys {
            if keypad.press(key).is_err() {
                prop_assert_eq!(&keypad, &KeypadState::new());
            }
        }
    }

    /// Clear always restores the initial state
    #[test]
    fn prop_clear_restores_initial(keys in prop::collection::vec(key_strategy(), 0..20)) {
        let mut keypad = KeypadState::new();
        for key in keys {
            let _ = keypad.press(key);
        }
        keypad.press(Key::Clear).unwrap();
        prop_assert_eq!(keypad, KeypadState::new());
    }

    /// Typing digits on a fresh keypad shows exactly those digits
    #[test]
    fn prop_digits_accumulate(digits in prop::collection::vec(digit_strategy(), 1..12)) {
        let mut keypad = KeypadState::new();
        for d in &digits {
            keypad.press(Key::Digit(*d)).unwrap();
        }
        let expected: String = digits.iter().map(u8::to_string).collect();
        prop_assert_eq!(keypad.display(), expected);
    }

    /// Toggling the sign twice is the identity
    #[test]
    fn prop_double_toggle_identity(digits in prop::collection::vec(digit_strategy(), 1..8)) {
        let mut keypad = KeypadState::new();
        for d in &digits {
            keypad.press(Key::Digit(*d)).unwrap();
        }
        let before = keypad.display().to_string();
        keypad.press(Key::ToggleSign).unwrap();
        keypad.press(Key::ToggleSign).unwrap();
        prop_assert_eq!(keypad.display(), before);
    }

    /// a + b = via keys matches the library operation
    #[test]
    fn prop_keypad_addition_matches_library(a in 0u32..10_000u32, b in 0u32..10_000u32) {
        let mut keypad = KeypadState::new();
        for c in a.to_string().chars() {
            keypad.press(Key::Digit(c.to_digit(10).unwrap() as u8)).unwrap();
        }
        keypad.press(Key::Op(BinaryOp::Add)).unwrap();
        for c in b.to_string().chars() {
            keypad.press(Key::Digit(c.to_digit(10).unwrap() as u8)).unwrap();
        }
        keypad.press(Key::Equals).unwrap();
        prop_assert_eq!(keypad.display(), format_number(add(f64::from(a), f64::from(b))));
    }

    /// Dividing by a nonzero value via keys never fails
    #[test]
    fn prop_keypad_divide_nonzero_succeeds(a in 0u8..=9u8, b in 1u8..=9u8) {
        let mut keypad = KeypadState::new();
        keypad.press(Key::Digit(a)).unwrap();
        keypad.press(Key::Op(BinaryOp::Divide)).unwrap();
        keypad.press(Key::Digit(b)).unwrap();
        prop_assert!(keypad.press(Key::Equals).is_ok());
    }
}
