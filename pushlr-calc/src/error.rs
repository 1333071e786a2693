//! # Calculator Error Type
//!
//! This module defines [`CalcError`], the single error surface of the
//! calculator pipeline, and [`Diagnostic`], the record kept for every syntax
//! error the engine reports. It aggregates failures from:
//!
//! - **Lexing**: characters that start no token, oversized integer literals,
//! - **Evaluation**: division by zero, overflow, unknown functions, bad arity,
//! - **Parsing**: input the grammar rejects even after recovery, or a fault
//!   raised by the engine itself.
use pushlr::EngineError;
use smartstring::alias::String;
use std::fmt;
use std::ops::Range;
use thiserror::Error;

/// A syntax error with its position in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Byte range of the offending token.
    pub span: Range<usize>,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}: {}", self.span.start, self.span.end, self.message)
    }
}

/// Represents all possible errors that can occur within the calculator.
///
/// # Examples
/// Propagating a literal that does not fit:
/// ```rust
/// # use pushlr_calc::CalcError;
/// # fn demo(s: &str) -> Result<i64, CalcError> {
/// let n: i64 = s.parse()?; // ParseIntError -> CalcError via #[from]
/// # Ok(n) }
/// assert!(matches!(demo("99999999999999999999"), Err(CalcError::ParseInt(_))));
/// ```
#[derive(Debug, Error)]
pub enum CalcError {
    /// An integer literal could not be parsed from its text.
    #[error("unable to parse {0:?}")]
    ParseInt(#[from] std::num::ParseIntError),

    /// No token starts at this position.
    #[error("unexpected character {text:?} at {}..{}", .span.start, .span.end)]
    Lex {
        /// Byte range of the unrecognised text.
        span: Range<usize>,
        /// The unrecognised text.
        text: String,
    },

    /// Division or remainder by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An arithmetic result does not fit in `i64`.
    #[error("arithmetic overflow")]
    Overflow,

    /// A call names a function that is not built in.
    #[error("unknown function {0:?}")]
    UnknownFunction(String),

    /// A built-in was called with the wrong number of arguments.
    #[error("{name} expects {expected} argument(s), got {got}")]
    Arity {
        name: String,
        expected: &'static str,
        got: usize,
    },

    /// A semantic action received a value of the wrong kind.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The input was rejected; every syntax error reported along the way is
    /// listed.
    #[error("input rejected after {} syntax error(s)", .diagnostics.len())]
    Rejected { diagnostics: Vec<Diagnostic> },

    /// The engine raised a fault.
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}
