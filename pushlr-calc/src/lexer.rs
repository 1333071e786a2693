//! # Calculator Lexer
//!
//! Turns source text into [`CalcToken`]s. Recognition is delegated to a
//! [`logos`]-derived token set; [`CalcLexer`] attaches payloads and spans and
//! appends a single [`TokenID::End`] once the text is exhausted.
//!
//! Whitespace and `#` line comments are skipped.
use crate::{CalcError, CalcToken, CalcValue, TokenID};
use logos::Logos;

/// Raw tokens recognized by the `logos`-based lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"([ \t\r\n\f]+|#[^\n]*)")]
enum LogosToken {
    #[regex(r"[0-9]+")]
    Int,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Asterisk,

    #[token("/")]
    Slash,

    #[token("(")]
    LeftParen,

    #[token(")")]
    RightParen,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,
}

impl From<LogosToken> for TokenID {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Int => TokenID::Int,
            LogosToken::Ident => TokenID::Ident,
            LogosToken::Plus => TokenID::Plus,
            LogosToken::Minus => TokenID::Minus,
            LogosToken::Asterisk => TokenID::Asterisk,
            LogosToken::Slash => TokenID::Slash,
            LogosToken::LeftParen => TokenID::LeftParen,
            LogosToken::RightParen => TokenID::RightParen,
            LogosToken::Comma => TokenID::Comma,
            LogosToken::Semicolon => TokenID::Semicolon,
        }
    }
}

/// Lexer over a source string.
///
/// Yields `Ok` tokens until the text ends, then one `End` token, then `None`.
/// Unrecognised characters and integer literals that do not fit in `i64` are
/// yielded as `Err`; lexing may continue after them.
///
/// # Example
/// ```rust
/// # use pushlr_calc::{CalcLexer, TokenID};
/// let ids: Vec<TokenID> = CalcLexer::new("max(1, x);")
///     .map(|t| t.unwrap().token_id)
///     .collect();
/// assert_eq!(
///     ids,
///     [
///         TokenID::Ident,
///         TokenID::LeftParen,
///         TokenID::Int,
///         TokenID::Comma,
///         TokenID::Ident,
///         TokenID::RightParen,
///         TokenID::Semicolon,
///         TokenID::End,
///     ]
/// );
/// ```
pub struct CalcLexer<'source> {
    inner: logos::Lexer<'source, LogosToken>,
    finished: bool,
}

impl<'source> CalcLexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            inner: LogosToken::lexer(source),
            finished: false,
        }
    }

    fn token(&self, raw: LogosToken) -> Result<CalcToken, CalcError> {
        let text = self.inner.slice();
        let value = match raw {
            LogosToken::Int => CalcValue::Number(text.parse()?),
            LogosToken::Ident => CalcValue::Ident(text.into()),
            _ => CalcValue::None,
        };
        Ok(CalcToken {
            token_id: raw.into(),
            value,
            span: self.inner.span(),
        })
    }
}

impl Iterator for CalcLexer<'_> {
    type Item = Result<CalcToken, CalcError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.inner.next() {
            Some(Ok(raw)) => Some(self.token(raw)),
            Some(Err(())) => Some(Err(CalcError::Lex {
                span: self.inner.span(),
                text: self.inner.slice().into(),
            })),
            None => {
                self.finished = true;
                let end = self.inner.source().len();
                Some(Ok(CalcToken {
                    token_id: TokenID::End,
                    value: CalcValue::None,
                    span: end..end,
                }))
            }
        }
    }
}

impl std::iter::FusedIterator for CalcLexer<'_> {}
