//! Scicalc CLI: scientific calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! scicalc             # interactive menu mode
//! scicalc --keypad    # full-screen keypad mode
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;

mod cli;
mod error;
mod keypad_mode;
mod menu;

use cli::Cli;
use error::CliResult;
use menu::MenuSession;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    if cli.keypad {
        keypad_mode::run()
    } else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        MenuSession::new(stdin.lock(), stdout.lock()).run()
    }
}
