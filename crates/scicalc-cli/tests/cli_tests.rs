//! Integration tests driving the scicalc binary's menu mode through
//! stdin/stdout.

use assert_cmd::Command;
use predicates::prelude::*;

fn scicalc() -> Command {
    Command::cargo_bin("scicalc").expect("binary built")
}

#[test]
fn test_exit_immediately() {
    scicalc()
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Thank you for using Scientific Calculator!",
        ));
}

#[test]
fn test_menu_lists_all_operations() {
    scicalc()
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1. Addition")
                .and(predicate::str::contains("4. Division"))
                .and(predicate::str::contains("7. Factorial"))
                .and(predicate::str::contains("10. Exponential")),
        );
}

#[test]
fn test_addition() {
    scicalc()
        .write_stdin("1\n2\n3\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 + 3 = 5"));
}

#[test]
fn test_division_by_zero_reports_error_and_continues() {
    scicalc()
        .write_stdin("4\n5\n0\n0\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Cannot divide by zero")
                .and(predicate::str::contains("Thank you")),
        );
}

#[test]
fn test_sqrt_of_negative_reports_domain_error() {
    scicalc()
        .write_stdin("5\n-4\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Cannot calculate square root of negative number",
        ));
}

#[test]
fn test_factorial() {
    scicalc()
        .write_stdin("7\n5\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("5! = 120"));
}

#[test]
fn test_factorial_of_negative_reports_domain_error() {
    scicalc()
        .write_stdin("7\n-1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Factorial not defined for negative numbers",
        ));
}

#[test]
fn test_ln_of_zero_reports_domain_error() {
    scicalc()
        .write_stdin("8\n0\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Logarithm undefined for non-positive numbers",
        ));
}

#[test]
fn test_power_with_fractional_exponent() {
    scicalc()
        .write_stdin("6\n4\n0.5\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 ^ 0.5 = 2"));
}

#[test]
fn test_malformed_operand_is_reported_and_session_recovers() {
    scicalc()
        .write_stdin("1\nabc\n3\n6\n7\n0\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid number format")
                .and(predicate::str::contains("6 × 7 = 42")),
        );
}

#[test]
fn test_invalid_choice() {
    scicalc()
        .write_stdin("42\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice"));
}

#[test]
fn test_eof_exits_cleanly() {
    scicalc().write_stdin("").assert().success();
}

#[test]
fn test_help_mentions_keypad_mode() {
    scicalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("keypad"));
}
