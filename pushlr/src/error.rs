//! Error types reported by the stack and the engine.
//!
//! Two kinds of failure are kept apart here:
//!
//! - **Parse outcomes**: a syntax error or a stack overflow. These are part of
//!   normal operation: the engine notifies the
//!   [`SemanticActions`](crate::SemanticActions) provider, sets its sticky
//!   error flag and reports it through the boolean returned by
//!   [`Engine::post`](crate::Engine::post). [`SyntaxError`] is the context
//!   handed to the provider in that case.
//! - **Faults**: an inconsistent table, a failing semantic action, or a
//!   caller that keeps posting after the session ended. These surface as
//!   `Err(EngineError)`.
//!
//! # Examples
//!
//! ```rust
//! # use pushlr::{EngineError, StackError};
//! let err: EngineError = StackError::Overflow { capacity: 8 }.into();
//! assert!(err.to_string().contains("capacity 8"));
//!
//! let err = EngineError::from_err("division by zero");
//! assert_eq!(err.to_string(), "semantic action failed: division by zero");
//! ```

use smartstring::alias::String;
use std::fmt::Debug;
use thiserror::Error;

/// Failures of the transactional [`Stack`](crate::Stack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// A push would grow the stack past its configured capacity.
    #[error("stack overflow (capacity {capacity})")]
    Overflow {
        /// The configured bound.
        capacity: usize,
    },
    /// More frames were requested than the stack holds.
    #[error("stack underflow (requested {requested}, depth {depth})")]
    Underflow {
        /// Number of frames the operation needed.
        requested: usize,
        /// Depth of the stack at the time.
        depth: usize,
    },
}

/// Faults raised by the [`Engine`](crate::Engine).
///
/// None of these is a syntax error: a token the table has no action for is
/// reported to the provider and through [`Engine::is_error`](crate::Engine::is_error).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A stack operation failed in a way a well-formed table never causes.
    #[error(transparent)]
    Stack(#[from] StackError),

    /// The table has no goto entry for a freshly reduced nonterminal.
    #[error("no goto from state {state} on nonterminal {nonterminal}")]
    MissingGoto {
        /// Index of the state on top of the stack.
        state: usize,
        /// Debug rendering of the nonterminal.
        nonterminal: String,
    },

    /// An EBNF pseudo-action is attached to a rule of the wrong length.
    #[error("production {prod} reduces with {reduction} but has {size} symbols")]
    BadArity {
        /// Production label.
        prod: &'static str,
        /// Reduction kind label.
        reduction: &'static str,
        /// Right-hand side length of the production.
        size: usize,
    },

    /// The table uses EBNF bookkeeping while the engine runs without it.
    #[error("production {prod} needs EBNF support, which is disabled")]
    EbnfDisabled {
        /// Production label.
        prod: &'static str,
    },

    /// `post` was called after the session was accepted or failed for good.
    #[error("parse session has ended; call reset before posting more tokens")]
    SessionClosed,

    /// A semantic action failed.
    #[error("semantic action failed: {0}")]
    Action(String),
}

impl EngineError {
    /// Wraps any displayable error as [`EngineError::Action`], passing an
    /// existing `EngineError` through unchanged.
    pub fn from_err<E>(err: E) -> Self
    where
        E: std::fmt::Display + 'static,
    {
        if let Some(e) = (&err as &dyn std::any::Any).downcast_ref::<EngineError>() {
            e.clone()
        } else {
            EngineError::Action(String::from(err.to_string().as_str()))
        }
    }
}

/// Context of a syntax error: the state on top of the stack, the offending
/// token, and every token the state would have accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected {token:?} in state {state:?}, expected one of {expected:?}")]
pub struct SyntaxError<S, T>
where
    S: Debug,
    T: Debug,
{
    /// State whose decision function rejected the token.
    pub state: S,
    /// The rejected token.
    pub token: T,
    /// Tokens with a non-error action in `state`, in table order.
    pub expected: Vec<T>,
}
