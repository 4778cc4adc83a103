//! TUI keypad frontend
//!
//! A terminal rendition of the graphical keypad: a display panel, the
//! 6x4 button grid, and a modal error overlay. All calculator behavior
//! lives in [`crate::keypad::KeypadState`]; this module only renders it
//! and translates terminal events into key presses.

mod app;
mod grid;
mod input;
mod ui;

pub use app::KeypadApp;
pub use grid::{Keypad, KeypadButton, KeypadWidget};
pub use input::{InputHandler, KeyAction};
pub use ui::{keypad_area, render};
