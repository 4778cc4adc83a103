//! Menu-driven interactive mode
//!
//! A line-based loop over any `BufRead`/`Write` pair: print the numbered
//! menu, read a selection (0-10), prompt for operands, invoke the library
//! operation, and report `✓ Result: <expression> = <result>` on success or
//! `✗ Error: <message>` on failure. Malformed numeric input is its own
//! failure, reported after the offending line has been consumed, so the
//! session always returns to the menu. End of input exits the loop.

use std::io::{BufRead, Write};

use console::style;
use scicalc::core::{self, BinaryOp};
use scicalc::keypad::format_number;

use crate::error::CliResult;

/// An interactive menu session over an input and output stream
#[derive(Debug)]
pub struct MenuSession<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    /// Creates a session over the given streams
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Runs the menu loop until selection 0 or end of input
    pub fn run(&mut self) -> CliResult<()> {
        self.print_banner()?;

        loop {
            self.print_menu()?;
            self.prompt("\nEnter your choice: ")?;
            let Some(line) = self.read_line()? else {
                break;
            };
            let choice = line.parse::<i32>().unwrap_or(-1);

            if choice == 0 {
                writeln!(
                    self.writer,
                    "\nThank you for using Scientific Calculator!"
                )?;
                break;
            }
            self.process_choice(choice)?;
        }
        Ok(())
    }

    fn print_banner(&mut self) -> CliResult<()> {
        writeln!(self.writer, "╔════════════════════════════════════════╗")?;
        writeln!(self.writer, "║   Scientific Calculator - Menu Mode    ║")?;
        writeln!(self.writer, "╚════════════════════════════════════════╝")?;
        Ok(())
    }

    fn print_menu(&mut self) -> CliResult<()> {
        let menu = "\n┌─────────────────────────────────────┐\n\
                    │         SELECT OPERATION            │\n\
                    ├─────────────────────────────────────┤\n\
                    │  Basic Operations:                  │\n\
                    │   1. Addition (+)                   │\n\
                    │   2. Subtraction (-)                │\n\
                    │   3. Multiplication (×)             │\n\
                    │   4. Division (÷)                   │\n\
                    │                                     │\n\
                    │  Scientific Functions:              │\n\
                    │   5. Square Root (√)                │\n\
                    │   6. Power (x^y)                    │\n\
                    │   7. Factorial (n!)                 │\n\
                    │   8. Natural Logarithm (ln)         │\n\
                    │   9. Common Logarithm (log)         │\n\
                    │  10. Exponential (e^x)              │\n\
                    │                                     │\n\
                    │   0. Exit                           │\n\
                    └─────────────────────────────────────┘";
        writeln!(self.writer, "{menu}")?;
        Ok(())
    }

    /// Dispatches one menu round; interaction failures are reported to the
    /// writer, only IO errors propagate
    fn process_choice(&mut self, choice: i32) -> CliResult<()> {
        match choice {
            1 => self.binary_round(BinaryOp::Add, "Enter first number: ", "Enter second number: "),
            2 => self.binary_round(
                BinaryOp::Subtract,
                "Enter first number: ",
                "Enter second number: ",
            ),
            3 => self.binary_round(
                BinaryOp::Multiply,
                "Enter first number: ",
                "Enter second number: ",
            ),
            4 => self.binary_round(
                BinaryOp::Divide,
                "Enter numerator: ",
                "Enter denominator: ",
            ),
            5 => self.sqrt_round(),
            6 => self.binary_round(BinaryOp::Power, "Enter base: ", "Enter exponent: "),
            7 => self.factorial_round(),
            8 => self.ln_round(),
            9 => self.log_round(),
            10 => self.exp_round(),
            _ => self.report_error("Invalid choice! Please select a number from 0-10."),
        }
    }

    fn binary_round(&mut self, op: BinaryOp, first: &str, second: &str) -> CliResult<()> {
        let Some(a) = self.read_number(first)? else {
            return Ok(());
        };
        let Some(b) = self.read_number(second)? else {
            return Ok(());
        };
        let expression = format!("{} {} {}", format_number(a), op.symbol(), format_number(b));
        match op.apply(a, b) {
            Ok(result) => self.report_result(&expression, &format_number(result)),
            Err(e) => self.report_error(&e.to_string()),
        }
    }

    fn sqrt_round(&mut self) -> CliResult<()> {
        let Some(x) = self.read_number("Enter number: ")? else {
            return Ok(());
        };
        match core::sqrt(x) {
            Ok(result) => self.report_result(
                &format!("√{}", format_number(x)),
                &format_number(result),
            ),
            Err(e) => self.report_error(&e.to_string()),
        }
    }

    fn factorial_round(&mut self) -> CliResult<()> {
        let Some(n) = self.read_integer("Enter non-negative integer: ")? else {
            return Ok(());
        };
        match core::factorial(n) {
            Ok(result) => self.report_result(&format!("{n}!"), &result.to_string()),
            Err(e) => self.report_error(&e.to_string()),
        }
    }

    fn ln_round(&mut self) -> CliResult<()> {
        let Some(x) = self.read_number("Enter positive number: ")? else {
            return Ok(());
        };
        match core::ln(x) {
            Ok(result) => self.report_result(
                &format!("ln({})", format_number(x)),
                &format_number(result),
            ),
            Err(e) => self.report_error(&e.to_string()),
        }
    }

    fn log_round(&mut self) -> CliResult<()> {
        let Some(x) = self.read_number("Enter positive number: ")? else {
            return Ok(());
        };
        match core::log(x) {
            Ok(result) => self.report_result(
                &format!("log({})", format_number(x)),
                &format_number(result),
            ),
            Err(e) => self.report_error(&e.to_string()),
        }
    }

    fn exp_round(&mut self) -> CliResult<()> {
        let Some(x) = self.read_number("Enter exponent: ")? else {
            return Ok(());
        };
        let result = core::exp(x);
        self.report_result(&format!("e^{}", format_number(x)), &format_number(result))
    }

    /// Prompts for a real operand; `None` means the round is over (the
    /// malformed line was consumed and reported, or input ended)
    fn read_number(&mut self, prompt: &str) -> CliResult<Option<f64>> {
        self.prompt(prompt)?;
        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        match line.parse::<f64>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                self.report_error("Invalid number format")?;
                Ok(None)
            }
        }
    }

    /// Prompts for an integer operand (factorial)
    fn read_integer(&mut self, prompt: &str) -> CliResult<Option<i64>> {
        self.prompt(prompt)?;
        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        match line.parse::<i64>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                self.report_error("Invalid integer format")?;
                Ok(None)
            }
        }
    }

    /// Reads one trimmed line; `None` on end of input
    fn read_line(&mut self) -> CliResult<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> CliResult<()> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn report_result(&mut self, expression: &str, result: &str) -> CliResult<()> {
        writeln!(
            self.writer,
            "\n{} {expression} = {result}",
            style("✓ Result:").green()
        )?;
        Ok(())
    }

    fn report_error(&mut self, message: &str) -> CliResult<()> {
        writeln!(self.writer, "\n{} {message}", style("✗ Error:").red())?;
        Ok(())
    }
}
