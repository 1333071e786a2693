//! # Calculator Tokens
//!
//! This module defines the values carried on the parser stack and the tokens
//! produced by the lexer:
//!
//! - [`CalcValue`]: the single value type stored in every stack frame, from
//!   literal payloads up to the finished program,
//! - [`CalcToken`]: a [`TokenID`] paired with its payload and its byte span in
//!   the source text.
use crate::CalcError;
use crate::TokenID;
use smartstring::alias::String;
use std::ops::Range;

/// The payload carried by a token or produced by a reduction.
///
/// # Example
/// ```rust
/// # use pushlr_calc::CalcValue;
/// let value = CalcValue::Number(42);
/// assert_eq!(value.number().unwrap(), 42);
/// assert!(CalcValue::None.number().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CalcValue {
    /// No associated data (punctuation, structural rules, empty statements).
    #[default]
    None,

    /// Integer literal or the value of an expression.
    Number(i64),

    /// Identifier text (function names).
    Ident(String),

    /// A completed statement: `Some` with its value, `None` if the statement
    /// was replaced by error recovery.
    Stmt(Option<i64>),

    /// Results of every non-empty statement, in source order.
    Program(Vec<Option<i64>>),
}

impl CalcValue {
    /// The numeric payload, or [`CalcError::TypeMismatch`].
    pub fn number(&self) -> Result<i64, CalcError> {
        match self {
            CalcValue::Number(n) => Ok(*n),
            other => Err(CalcError::TypeMismatch {
                expected: "number",
                found: other.kind(),
            }),
        }
    }

    /// Statement result; `None` for anything that is not a statement, such
    /// as the empty statement `;`.
    pub fn statement(&self) -> Option<Option<i64>> {
        match self {
            CalcValue::Stmt(result) => Some(*result),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CalcValue::None => "nothing",
            CalcValue::Number(_) => "number",
            CalcValue::Ident(_) => "identifier",
            CalcValue::Stmt(_) => "statement",
            CalcValue::Program(_) => "program",
        }
    }
}

/// A lexical token with its byte span.
///
/// # Example
/// ```rust
/// # use pushlr_calc::{CalcToken, CalcValue, TokenID};
/// let tok = CalcToken {
///     token_id: TokenID::Int,
///     value: CalcValue::Number(99),
///     span: 0..2,
/// };
/// assert_eq!(tok.token_id, TokenID::Int);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcToken {
    /// The token's kind.
    pub token_id: TokenID,
    /// The payload posted to the engine together with `token_id`.
    pub value: CalcValue,
    /// Byte range in the source text.
    pub span: Range<usize>,
}
