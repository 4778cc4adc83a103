//! Command-line argument parsing

use clap::Parser;

/// Scientific calculator with menu and keypad interfaces
#[derive(Debug, Parser)]
#[command(name = "scicalc", version, about, long_about = None)]
pub struct Cli {
    /// Launch the full-screen keypad interface instead of the menu
    #[arg(short, long)]
    pub keypad: bool,
}
