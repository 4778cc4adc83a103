//! Core operation library
//!
//! Stateless pure functions for every calculator operation, each validating
//! its own domain at the boundary. Validation is per-operation rather than
//! centralized: division excludes only zero, square root excludes negatives,
//! the logarithms exclude non-positives, and factorial excludes negatives.

mod operations;

pub use operations::{
    add, divide, exp, factorial, ln, log, multiply, power, sqrt, subtract, BinaryOp,
};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error kinds - exactly two, both deterministic rejections
/// raised synchronously at the point of violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Cannot divide by zero")]
    DivisionByZero,
    /// Out-of-domain argument (negative radicand, negative factorial,
    /// non-positive logarithm)
    #[error("{0}")]
    InvalidDomain(String),
}

impl CalcError {
    /// Creates an `InvalidDomain` error from a message
    #[must_use]
    pub fn invalid_domain(message: impl Into<String>) -> Self {
        Self::InvalidDomain(message.into())
    }
}
