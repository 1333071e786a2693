//! # pushlr
//!
//! A table-driven, push-style LALR parsing engine.
//!
//! The grammar analysis happens elsewhere: a generator (or a hand-written
//! module) supplies the precomputed automaton as a [`ParserData`]
//! implementation. This crate provides the runtime that drives it:
//!
//! - a transactional [`Stack`] whose pending region is committed only when a
//!   token's whole shift/reduce chain succeeds,
//! - the [`Engine`], fed one `(token, value)` pair at a time through
//!   [`Engine::post`],
//! - EBNF support: `X*`, `X+`, `X?` and `X / sep` keep their elements on the
//!   stack under an accumulator frame, read lazily through [`Sequence`] and
//!   [`Optional`] views,
//! - optional error recovery through a distinguished error token.
//!
//! User code plugs in through [`SemanticActions`].
//!
//! ## Feeding tokens
//!
//! A one-rule table (`S -> int`) whose action multiplies the literal by ten:
//!
//! ```rust
//! # use pushlr::*;
//! # #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! # struct State(usize);
//! # impl From<State> for usize { fn from(s: State) -> usize { s.0 } }
//! # impl ParserStateID for State { const COUNT: usize = 3; }
//! # #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! # enum Tok { Int, End }
//! # impl From<Tok> for usize { fn from(t: Tok) -> usize { t as usize } }
//! # impl TryFrom<usize> for Tok {
//! #     type Error = ();
//! #     fn try_from(i: usize) -> Result<Self, ()> {
//! #         [Tok::Int, Tok::End].get(i).copied().ok_or(())
//! #     }
//! # }
//! # impl ParserTokenID for Tok { const COUNT: usize = 2; }
//! # #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! # struct Sym;
//! # impl From<Sym> for usize { fn from(_: Sym) -> usize { 0 } }
//! # impl ParserNonTermID for Sym { const COUNT: usize = 1; }
//! # #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! # struct Number;
//! # impl From<Number> for usize { fn from(_: Number) -> usize { 0 } }
//! # impl ParserProdID for Number {
//! #     type NonTermID = Sym;
//! #     const COUNT: usize = 1;
//! #     fn label(&self) -> &'static str { "number" }
//! #     fn lhs(&self) -> Sym { Sym }
//! #     fn size(&self) -> usize { 1 }
//! #     fn reduction(&self) -> Reduction { Reduction::Action }
//! # }
//! # struct MyTable;
//! # impl ParserData for MyTable {
//! #     type StateID = State;
//! #     type TokenID = Tok;
//! #     type NonTermID = Sym;
//! #     type ProdID = Number;
//! #     fn start_state() -> State { State(0) }
//! #     fn lookup(s: State, t: Tok) -> ParserAction<State, Number> {
//! #         match (s.0, t) {
//! #             (0, Tok::Int) => ParserAction::Shift(State(2)),
//! #             (1, Tok::End) => ParserAction::Accept,
//! #             (2, Tok::End) => ParserAction::Reduce(Number),
//! #             _ => ParserAction::Error,
//! #         }
//! #     }
//! #     fn goto(s: State, _: Sym) -> Option<State> { (s.0 == 0).then_some(State(1)) }
//! #     fn handles_error(_: State) -> bool { false }
//! #     fn end_token() -> Tok { Tok::End }
//! # }
//! # #[derive(Default)]
//! # struct MyActions;
//! # impl SemanticActions for MyActions {
//! #     type ParserData = MyTable;
//! #     type Value = i64;
//! #     fn reduce(&mut self, _: Number, args: &Args<'_, Self>) -> Result<i64, EngineError> {
//! #         Ok(*args.get(0) * 10)
//! #     }
//! # }
//! # fn main() -> Result<(), EngineError> {
//! # let lexer = vec![(Tok::Int, 4), (Tok::End, 0)];
//! let config = EngineConfig::from_data::<MyTable>().with_ebnf(true);
//! let mut engine = Engine::new(MyActions::default(), config);
//! for (token, value) in lexer {
//!     if engine.post(token, value)? {
//!         break;
//!     }
//! }
//! let root = engine.take_accepted();
//! assert_eq!(root, Some(40));
//! # Ok(())
//! # }
//! ```

mod actions;
mod config;
mod ebnf;
mod engine;
mod error;
mod stack;
mod table;

#[cfg(test)]
mod test_parser_data;

pub use crate::actions::{Args, SemanticActions, SyntaxErrorOf};
pub use crate::config::EngineConfig;
pub use crate::ebnf::{Optional, ReduceArgs, Sequence, SequenceIter};
pub use crate::engine::{Engine, ParserStats, StackFrame};
pub use crate::error::{EngineError, StackError, SyntaxError};
pub use crate::stack::Stack;
pub use crate::table::{
    ParserAction, ParserData, ParserNonTermID, ParserProdID, ParserStateID, ParserTokenID,
    Reduction,
};
