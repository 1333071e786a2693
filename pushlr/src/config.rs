//! Engine configuration.

use crate::table::{ParserData, ParserTokenID};

/// Options recognised by the [`Engine`](crate::Engine).
///
/// # Examples
///
/// ```rust
/// # use pushlr::EngineConfig;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// # struct Tok(usize);
/// # impl From<Tok> for usize { fn from(t: Tok) -> usize { t.0 } }
/// # impl TryFrom<usize> for Tok { type Error = (); fn try_from(i: usize) -> Result<Self, ()> { Ok(Tok(i)) } }
/// # impl pushlr::ParserTokenID for Tok { const COUNT: usize = 3; }
/// let config = EngineConfig::new(Tok(0))
///     .with_ebnf(true)
///     .with_recovery(Tok(2))
///     .with_stack_capacity(256);
/// assert!(config.recovery_enabled());
/// assert_eq!(config.stack_capacity, Some(256));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig<T> {
    /// Honour the sequence reductions (`seq_head`, `seq_trail`, ...).
    /// Without it a table that uses them is rejected at the first such
    /// reduction.
    pub ebnf: bool,
    /// Token posted to a resynchronisation state during recovery. Recovery
    /// is enabled exactly when this is set.
    pub recovery_token: Option<T>,
    /// End-of-input token; never discarded by recovery.
    pub eof_token: T,
    /// Upper bound on stack depth. Exceeding it is reported as a stack
    /// overflow.
    pub stack_capacity: Option<usize>,
}

impl<T: ParserTokenID> EngineConfig<T> {
    /// EBNF off, recovery off, unbounded stack.
    pub fn new(eof_token: T) -> Self {
        Self {
            ebnf: false,
            recovery_token: None,
            eof_token,
            stack_capacity: None,
        }
    }

    /// Takes the end and error tokens from the table. Recovery is on when the
    /// table declares an error token.
    pub fn from_data<D>() -> Self
    where
        D: ParserData<TokenID = T>,
    {
        Self {
            recovery_token: D::error_token(),
            ..Self::new(D::end_token())
        }
    }

    pub fn with_ebnf(mut self, ebnf: bool) -> Self {
        self.ebnf = ebnf;
        self
    }

    pub fn with_recovery(mut self, recovery_token: T) -> Self {
        self.recovery_token = Some(recovery_token);
        self
    }

    pub fn without_recovery(mut self) -> Self {
        self.recovery_token = None;
        self
    }

    pub fn with_stack_capacity(mut self, capacity: usize) -> Self {
        self.stack_capacity = Some(capacity);
        self
    }

    pub fn recovery_enabled(&self) -> bool {
        self.recovery_token.is_some()
    }
}
