//! # Calculator Parser
//!
//! This module couples the calculator's SLR(1) tables with calculator-specific
//! semantic actions. It exposes:
//!
//! - [`parser_data`]: the automaton, productions, and IDs,
//! - [`CalcActions`]: one method per distinct reduction signature, taking
//!   already-unpacked arguments,
//! - [`CalcDriver`]: the adapter that implements [`SemanticActions`] for the
//!   engine by unpacking stack values and dispatching to a [`CalcActions`],
//! - [`CalcParser`]: lexes a source string, feeds the engine token by token,
//!   and collects the per-statement results.
//!
//! ## Behavior highlights
//! - **Operator precedence & associativity** are encoded in the grammar
//!   itself (`Expr`/`Term`/`Factor` layering), so the tables are
//!   conflict-free.
//! - **Statements** are collected with `Stmt*`; **call arguments** with
//!   `Expr / ','`. Both are folded on the engine stack and handed to the
//!   consuming action as a lazy view.
//! - **Error recovery**: `Stmt -> error ';'` lets the parser skip a broken
//!   statement up to the next `;`. The statement's result is then `None`.
//! - **Empty statements** (a bare `;`) produce no result.

pub mod parser_data;

use crate::{CalcError, CalcLexer, CalcValue, Diagnostic, Evaluator};
use parser_data::{ParData, ProdID, TokenID};
use pushlr::{Args, Engine, EngineConfig, EngineError, SemanticActions, SyntaxErrorOf};
use std::ops::Range;

/// Semantic actions of the calculator grammar.
///
/// Each method corresponds to one action-carrying production; copy rules
/// (`Expr -> Term`, `Factor -> ( Expr )`, ...) are handled by [`CalcDriver`]
/// without a call. Sequence arguments arrive as lazy iterators over the
/// stack.
pub trait CalcActions {
    /// `Program -> Stmt*`. Receives one item per non-empty statement.
    fn program<I>(&mut self, statements: I) -> Result<Vec<Option<i64>>, CalcError>
    where
        I: Iterator<Item = Option<i64>>,
    {
        Ok(statements.collect())
    }

    /// `Stmt -> Expr ';'`
    fn statement(&mut self, value: i64) -> Result<Option<i64>, CalcError> {
        Ok(Some(value))
    }

    /// `Stmt -> error ';'`
    fn recovered(&mut self) -> Option<i64> {
        None
    }

    /// `Expr -> Expr '+' Term`
    fn add(&mut self, lhs: i64, rhs: i64) -> Result<i64, CalcError>;

    /// `Expr -> Expr '-' Term`
    fn sub(&mut self, lhs: i64, rhs: i64) -> Result<i64, CalcError>;

    /// `Term -> Term '*' Factor`
    fn mul(&mut self, lhs: i64, rhs: i64) -> Result<i64, CalcError>;

    /// `Term -> Term '/' Factor`
    fn div(&mut self, lhs: i64, rhs: i64) -> Result<i64, CalcError>;

    /// `Factor -> '-' Factor`
    fn neg(&mut self, value: i64) -> Result<i64, CalcError>;

    /// `Factor -> ident '(' Expr / ',' ')'`
    fn call<I>(&mut self, name: &str, args: I) -> Result<i64, CalcError>
    where
        I: ExactSizeIterator<Item = Result<i64, CalcError>>;
}

/// Bridges the engine's [`SemanticActions`] interface to a [`CalcActions`]
/// implementation.
///
/// Besides dispatching reductions, the driver records a [`Diagnostic`] for
/// every syntax error, positioned at the span of the token being posted, and
/// keeps the [`CalcError`] behind a failed action so that the caller gets it
/// back unchanged.
pub struct CalcDriver<E> {
    actions: E,
    span: Range<usize>,
    diagnostics: Vec<Diagnostic>,
    failure: Option<CalcError>,
}

impl<E> CalcDriver<E> {
    pub fn new(actions: E) -> Self {
        Self {
            actions,
            span: 0..0,
            diagnostics: Vec::new(),
            failure: None,
        }
    }

    pub fn actions(&self) -> &E {
        &self.actions
    }

    /// Syntax errors recorded so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    fn begin(&mut self) {
        self.span = 0..0;
        self.diagnostics.clear();
        self.failure = None;
    }
}

impl<E: CalcActions> CalcDriver<E> {
    fn eval(&mut self, prod_id: ProdID, args: &Args<'_, Self>) -> Result<CalcValue, CalcError> {
        let num = |i: usize| args.get(i).number();
        let value = match prod_id {
            ProdID::Program => {
                // Program -> StmtSeq
                let statements = args
                    .sequence(0)
                    .into_iter()
                    .filter_map(CalcValue::statement);
                CalcValue::Program(self.actions.program(statements)?)
            }
            ProdID::Stmt1 => {
                // Stmt -> Expr ;
                CalcValue::Stmt(self.actions.statement(num(0)?)?)
            }
            ProdID::Stmt2 => {
                // Stmt -> error ;
                CalcValue::Stmt(self.actions.recovered())
            }
            ProdID::Expr1 => CalcValue::Number(self.actions.add(num(0)?, num(2)?)?),
            ProdID::Expr2 => CalcValue::Number(self.actions.sub(num(0)?, num(2)?)?),
            ProdID::Term1 => CalcValue::Number(self.actions.mul(num(0)?, num(2)?)?),
            ProdID::Term2 => CalcValue::Number(self.actions.div(num(0)?, num(2)?)?),
            ProdID::Factor3 => CalcValue::Number(self.actions.neg(num(1)?)?),
            ProdID::Expr3 | ProdID::Term3 | ProdID::Factor1 => args.get(0).clone(),
            ProdID::Factor2 => {
                // Factor -> ( Expr )
                args.get(1).clone()
            }
            ProdID::Factor4 => {
                // Factor -> ident ( ArgSeq )
                let CalcValue::Ident(name) = args.get(0) else {
                    return Err(CalcError::TypeMismatch {
                        expected: "identifier",
                        found: args.get(0).kind(),
                    });
                };
                let call_args = args.sequence(2).into_iter().map(CalcValue::number);
                CalcValue::Number(self.actions.call(name, call_args)?)
            }
            ProdID::Start
            | ProdID::StmtSeq1
            | ProdID::StmtSeq2
            | ProdID::Stmt3
            | ProdID::ArgSeq1
            | ProdID::ArgSeq2 => {
                // structural rules never reach the action provider
                unreachable!()
            }
        };
        Ok(value)
    }
}

impl<E: CalcActions> SemanticActions for CalcDriver<E> {
    type ParserData = ParData;
    type Value = CalcValue;

    fn reduce(&mut self, prod_id: ProdID, args: &Args<'_, Self>) -> Result<CalcValue, EngineError> {
        self.eval(prod_id, args).map_err(|err| {
            let engine_err = EngineError::from_err(err.to_string());
            self.failure = Some(err);
            engine_err
        })
    }

    fn syntax_error(&mut self, err: &SyntaxErrorOf<Self>) {
        let expected: Vec<&str> = err.expected.iter().map(TokenID::label).collect();
        let message = format!(
            "unexpected {}, expected one of: {}",
            err.token.label(),
            expected.join(" ")
        );
        log::debug!("{}..{}: {}", self.span.start, self.span.end, message);
        self.diagnostics.push(Diagnostic {
            span: self.span.clone(),
            message: message.as_str().into(),
        });
    }

    fn stack_overflow(&mut self) {
        log::warn!("parser stack overflow at {}..{}", self.span.start, self.span.end);
        self.diagnostics.push(Diagnostic {
            span: self.span.clone(),
            message: "expression nested too deeply".into(),
        });
    }
}

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcOutcome {
    /// One entry per non-empty statement: its value, or `None` if the
    /// statement was skipped by error recovery.
    pub results: Vec<Option<i64>>,
    /// Syntax errors that recovery got past.
    pub diagnostics: Vec<Diagnostic>,
}

/// The calculator parser: a [`CalcLexer`] feeding an [`Engine`] driven by a
/// [`CalcDriver`].
///
/// # Example
///
/// ```rust
/// # use pushlr_calc::CalcParser;
/// let mut parser = CalcParser::new();
/// let outcome = parser.parse("1 + 2 * 3; max(4, -1, 9);").unwrap();
/// assert_eq!(outcome.results, vec![Some(7), Some(9)]);
///
/// // a broken statement is skipped up to the next ';'
/// let outcome = parser.parse("1 + ; 2;").unwrap();
/// assert_eq!(outcome.results, vec![None, Some(2)]);
/// assert_eq!(outcome.diagnostics.len(), 1);
/// ```
pub struct CalcParser<E = Evaluator>
where
    E: CalcActions,
{
    engine: Engine<CalcDriver<E>>,
}

impl CalcParser<Evaluator> {
    /// EBNF and error recovery on, unbounded stack.
    pub fn new() -> Self {
        Self::with_config(Evaluator, Self::default_config())
    }
}

impl Default for CalcParser<Evaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> CalcParser<E>
where
    E: CalcActions,
{
    pub fn default_config() -> EngineConfig<TokenID> {
        EngineConfig::from_data::<ParData>().with_ebnf(true)
    }

    pub fn with_config(actions: E, config: EngineConfig<TokenID>) -> Self {
        Self {
            engine: Engine::new(CalcDriver::new(actions), config),
        }
    }

    pub fn engine(&self) -> &Engine<CalcDriver<E>> {
        &self.engine
    }

    /// Parses and evaluates `source`.
    ///
    /// Syntax errors that recovery gets past are returned in
    /// [`CalcOutcome::diagnostics`]; if the input is rejected for good the
    /// result is [`CalcError::Rejected`]. Lexical and evaluation errors end
    /// the parse immediately.
    pub fn parse(&mut self, source: &str) -> Result<CalcOutcome, CalcError> {
        self.engine.reset();
        self.engine.actions_mut().begin();

        for token in CalcLexer::new(source) {
            let token = token?;
            log::trace!("{:?} at {:?}", token.token_id, token.span);
            self.engine.actions_mut().span = token.span;
            match self.engine.post(token.token_id, token.value) {
                Ok(true) => break,
                Ok(false) => {}
                Err(err) => {
                    return Err(match self.engine.actions_mut().failure.take() {
                        Some(failure) => failure,
                        None => CalcError::Engine(err),
                    });
                }
            }
        }

        let diagnostics = std::mem::take(&mut self.engine.actions_mut().diagnostics);
        match self.engine.take_accepted() {
            Some(CalcValue::Program(results)) => Ok(CalcOutcome {
                results,
                diagnostics,
            }),
            Some(other) => Err(CalcError::TypeMismatch {
                expected: "program",
                found: other.kind(),
            }),
            None => Err(CalcError::Rejected { diagnostics }),
        }
    }
}
