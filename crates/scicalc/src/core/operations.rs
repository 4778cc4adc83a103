//! The nine calculator operations
//!
//! Every function is a pure computation over its arguments: no shared state,
//! no logging, no retries. Infallible operations return a bare `f64`; the
//! four with a restricted domain return [`CalcResult`] and reject invalid
//! input before computing.

use crate::core::{CalcError, CalcResult};

/// Addition: `a + b`
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtraction: `a - b`
#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiplication: `a * b`
#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Division: `a / b`
///
/// Fails with [`CalcError::DivisionByZero`] when `b` is zero (either sign).
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// Principal square root
///
/// Fails with [`CalcError::InvalidDomain`] for negative input.
pub fn sqrt(x: f64) -> CalcResult<f64> {
    if x < 0.0 {
        return Err(CalcError::invalid_domain(
            "Cannot calculate square root of negative number",
        ));
    }
    Ok(x.sqrt())
}

/// Exponentiation: `base` raised to `exp`
///
/// Uses `f64::powf` semantics throughout. A negative base with a
/// non-integer exponent yields NaN (e.g. `power(-8.0, 1.0 / 3.0)` is NaN,
/// not -2); this matches the host exponentiation primitive and is not
/// guarded.
#[must_use]
pub fn power(base: f64, exp: f64) -> f64 {
    base.powf(exp)
}

/// Factorial: `n!` as a 64-bit integer
///
/// Computed by iterative product over `2..=n`, with `0! = 1! = 1`.
/// Fails with [`CalcError::InvalidDomain`] for negative `n`. Inputs above
/// 20 overflow `i64`; the wrapped value is unspecified.
pub fn factorial(n: i64) -> CalcResult<i64> {
    if n < 0 {
        return Err(CalcError::invalid_domain(
            "Factorial not defined for negative numbers",
        ));
    }
    let mut result: i64 = 1;
    for i in 2..=n {
        result = result.wrapping_mul(i);
    }
    Ok(result)
}

/// Natural logarithm
///
/// Fails with [`CalcError::InvalidDomain`] for non-positive input.
pub fn ln(x: f64) -> CalcResult<f64> {
    if x <= 0.0 {
        return Err(CalcError::invalid_domain(
            "Logarithm undefined for non-positive numbers",
        ));
    }
    Ok(x.ln())
}

/// Base-10 logarithm
///
/// Fails with [`CalcError::InvalidDomain`] for non-positive input.
pub fn log(x: f64) -> CalcResult<f64> {
    if x <= 0.0 {
        return Err(CalcError::invalid_domain(
            "Logarithm undefined for non-positive numbers",
        ));
    }
    Ok(x.log10())
}

/// Exponential: `e` raised to `x`
#[must_use]
pub fn exp(x: f64) -> f64 {
    x.exp()
}

/// Type-safe binary operator enum - the dispatch surface shared by the
/// keypad state machine and the menu frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (x)
    Multiply,
    /// Division (/)
    Divide,
    /// Exponentiation (x^y)
    Power,
}

impl BinaryOp {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }

    /// Applies the operator to two operands
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(add(a, b)),
            Self::Subtract => Ok(subtract(a, b)),
            Self::Multiply => Ok(multiply(a, b)),
            Self::Divide => divide(a, b),
            Self::Power => Ok(power(a, b)),
        }
    }
}
