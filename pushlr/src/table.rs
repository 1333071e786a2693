//! Read-only parsing table contract.
//!
//! A table is produced ahead of time by a grammar analyser and handed to the
//! engine as a type implementing [`ParserData`]. Its states, terminals,
//! nonterminals and productions are small `Copy` identifiers, usually
//! `#[repr]` enums or newtypes over `u8`/`u16`.

use std::fmt::Debug;

/// Decision of a state's token function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParserAction<US, UP>
where
    US: ParserStateID,
    UP: ParserProdID,
{
    Error,
    Accept,
    Shift(US),
    Reduce(UP),
}

pub trait ParserStateID: Copy + Debug + Eq + Into<usize> {
    const COUNT: usize;
}

/// Terminal identifiers. `TryFrom<usize>` lets the engine enumerate the
/// terminals `0..COUNT` when it reports what a state would have accepted.
pub trait ParserTokenID: Copy + Debug + Eq + Into<usize> + TryFrom<usize> {
    const COUNT: usize;
}

pub trait ParserNonTermID: Copy + Debug + Eq + Into<usize> {
    const COUNT: usize;
}

/// Production identifiers together with the per-rule metadata the engine
/// needs to reduce.
pub trait ParserProdID: Copy + Debug + Eq + Into<usize> {
    type NonTermID: ParserNonTermID;

    const COUNT: usize;

    fn label(&self) -> &'static str;
    /// Left-hand nonterminal.
    fn lhs(&self) -> Self::NonTermID;
    /// Right-hand side length.
    fn size(&self) -> usize;
    fn reduction(&self) -> Reduction;
}

/// What a reduction does besides popping its right-hand side.
///
/// Repetition and optionality (`X*`, `X+`, `X?`, `X / sep`) are lowered into
/// plain rules tagged with one of the sequence kinds below. Those rules keep
/// their elements on the stack under an accumulator frame instead of building
/// a container; the rule that finally consumes the accumulator reads the
/// elements through a [`Sequence`](crate::Sequence) or
/// [`Optional`](crate::Optional) view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reduction {
    /// Pop and push a default value; no user code runs.
    Nothing,
    /// Call [`SemanticActions::reduce`](crate::SemanticActions::reduce).
    Action,
    /// First rule of `X*` (0 symbols) or `X+` (1 symbol): push an
    /// accumulator covering the symbols already on the stack.
    SeqHead,
    /// `acc X`: fold the new element under the accumulator.
    SeqTrail,
    /// `acc sep X`: drop the separator, then fold like [`Reduction::SeqTrail`].
    SeqTrail2,
    /// Empty alternative of `X?`.
    OptNothing,
    /// Present alternative of `X?`.
    OptJust,
}

impl Reduction {
    pub fn is_ebnf(self) -> bool {
        !matches!(self, Reduction::Nothing | Reduction::Action)
    }

    pub fn label(self) -> &'static str {
        match self {
            Reduction::Nothing => "nothing",
            Reduction::Action => "action",
            Reduction::SeqHead => "seq_head",
            Reduction::SeqTrail => "seq_trail",
            Reduction::SeqTrail2 => "seq_trail2",
            Reduction::OptNothing => "opt_nothing",
            Reduction::OptJust => "opt_just",
        }
    }

    /// Whether a rule of length `size` may carry this reduction.
    pub fn accepts_size(self, size: usize) -> bool {
        match self {
            Reduction::Nothing | Reduction::Action => true,
            Reduction::SeqHead => size <= 1,
            Reduction::SeqTrail => size == 2,
            Reduction::SeqTrail2 => size == 3,
            Reduction::OptNothing => size == 0,
            Reduction::OptJust => size == 1,
        }
    }
}

/// A precomputed, already disambiguated LR table.
///
/// Every function is pure: for a given state and symbol the answer never
/// changes, and at most one action exists per `(state, token)`.
pub trait ParserData {
    type StateID: ParserStateID;
    type TokenID: ParserTokenID;
    type NonTermID: ParserNonTermID;
    type ProdID: ParserProdID<NonTermID = Self::NonTermID>;

    fn start_state() -> Self::StateID;

    /// The state's token decision.
    fn lookup(
        state_id: Self::StateID,
        token_id: Self::TokenID,
    ) -> ParserAction<Self::StateID, Self::ProdID>;

    /// The state's nonterminal decision.
    fn goto(state_id: Self::StateID, nonterm_id: Self::NonTermID) -> Option<Self::StateID>;

    /// Whether the state is a resynchronisation point for error recovery,
    /// i.e. it can shift the error token.
    fn handles_error(state_id: Self::StateID) -> bool;

    /// The end-of-input terminal.
    fn end_token() -> Self::TokenID;

    /// The distinguished error terminal, if the grammar declares one.
    fn error_token() -> Option<Self::TokenID> {
        None
    }

    /// Every terminal with a non-error action in `state_id`.
    fn expected(state_id: Self::StateID) -> Vec<Self::TokenID> {
        (0..<Self::TokenID as ParserTokenID>::COUNT)
            .filter_map(|i| Self::TokenID::try_from(i).ok())
            .filter(|&t| !matches!(Self::lookup(state_id, t), ParserAction::Error))
            .collect()
    }
}

/// Whether `id` is below the `COUNT` its identifier type declares.
pub(crate) fn in_range<I: Into<usize>>(id: I, count: usize) -> bool {
    id.into() < count
}
