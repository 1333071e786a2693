//! # pushlr-calc
//!
//! A small demonstration crate built on **pushlr**, providing a complete,
//! minimal example of a lexer feeding a push-driven LALR engine for a
//! calculator language.
//!
//! The parser is *pushed* one token at a time: [`CalcParser`] pulls tokens
//! from a [`CalcLexer`] and posts each to a [`pushlr::Engine`]. The grammar
//! uses both EBNF sequence forms (`Stmt*` for the program, `Expr / ','` for
//! call arguments) and an `error` production for statement-level recovery.
//!
//! ## Overview
//!
//! - [`lexer`]: converts raw input into [`CalcToken`] items, each annotated
//!   with its byte span in the source text.
//! - [`parser`]: the generated tables ([`parser::parser_data`]), the
//!   [`CalcActions`] trait, and [`CalcParser`].
//! - [`calc`]: [`Evaluator`], the stock [`CalcActions`] implementation with
//!   checked arithmetic and built-in functions.
//! - [`token`]: [`CalcToken`] and [`CalcValue`], the value type on the engine
//!   stack.
//! - [`error`]: [`CalcError`] and [`Diagnostic`].
//!
//! ## Language
//!
//! ```text
//! Program -> Stmt*
//! Stmt    -> Expr ';' | error ';' | ';'
//! Expr    -> Expr '+' Term | Expr '-' Term | Term
//! Term    -> Term '*' Factor | Term '/' Factor | Factor
//! Factor  -> int | '(' Expr ')' | '-' Factor | ident '(' Expr / ',' ')'
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pushlr_calc::{CalcError, CalcParser};
//!
//! let mut parser = CalcParser::new();
//!
//! let outcome = parser.parse("1 + 2 * 3; sum(1, 2, 3);").unwrap();
//! assert_eq!(outcome.results, vec![Some(7), Some(6)]);
//! assert!(outcome.diagnostics.is_empty());
//!
//! // end of input in the middle of a statement cannot be recovered from
//! assert!(matches!(parser.parse("1 +"), Err(CalcError::Rejected { .. })));
//! ```
//!
//! ## Re-exports
//!
//! ```text
//! CalcActions, CalcDriver, CalcOutcome, CalcParser, Evaluator,
//! CalcError, Diagnostic, CalcLexer, CalcToken, CalcValue, TokenID
//! ```
pub mod calc;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

pub use calc::Evaluator;
pub use error::{CalcError, Diagnostic};
pub use lexer::CalcLexer;
pub use parser::parser_data::TokenID;
pub use parser::{CalcActions, CalcDriver, CalcOutcome, CalcParser};
pub use token::{CalcToken, CalcValue};
