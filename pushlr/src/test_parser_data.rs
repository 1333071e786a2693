//! Hand-built tables for the engine tests.
//!
//! All grammars share one terminal alphabet, one nonterminal alphabet and one
//! value type; each grammar has its own productions and `ParData`.

use crate::table::{
    ParserAction, ParserData, ParserNonTermID, ParserProdID, ParserStateID, ParserTokenID,
    Reduction,
};
use num_enum::{IntoPrimitive, TryFromPrimitive};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Value {
    #[default]
    None,
    Int(i64),
    List(Vec<i64>),
    Maybe(Option<i64>),
}

impl Value {
    pub fn int(&self) -> i64 {
        match self {
            Value::Int(n) => *n,
            other => panic!("not an int: {other:?}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateID(pub u8);
impl ParserStateID for StateID {
    const COUNT: usize = 7;
}

impl From<StateID> for usize {
    fn from(s: StateID) -> Self {
        s.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(usize)]
pub enum TokenID {
    Int = 0,
    Plus = 1,
    Comma = 2,
    End = 3,
    Error = 4,
}

impl ParserTokenID for TokenID {
    const COUNT: usize = 5;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(usize)]
pub enum NonTermID {
    Start = 0,
    S = 1,
    E = 2,
    L = 3,
    O = 4,
}

impl ParserNonTermID for NonTermID {
    const COUNT: usize = 5;
}

const N_TOKENS: usize = TokenID::COUNT;
const N_NONTERMS: usize = NonTermID::COUNT;

type Goto = Option<StateID>;

const fn to(s: u8) -> Goto {
    Some(StateID(s))
}

/// `S -> E`, `E -> E '+' E | int | error`, left associative.
pub mod sum {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
    #[repr(usize)]
    pub enum ProdID {
        Start = 0,
        SExpr = 1,
        EAdd = 2,
        EInt = 3,
        EError = 4,
    }

    impl ParserProdID for ProdID {
        type NonTermID = NonTermID;

        const COUNT: usize = 5;

        fn label(&self) -> &'static str {
            ProdID::LABELS[Into::<usize>::into(*self)]
        }
        fn lhs(&self) -> NonTermID {
            ProdID::LHS[Into::<usize>::into(*self)]
        }
        fn size(&self) -> usize {
            ProdID::SIZES[Into::<usize>::into(*self)]
        }
        fn reduction(&self) -> Reduction {
            match self {
                ProdID::Start => Reduction::Nothing,
                _ => Reduction::Action,
            }
        }
    }

    impl ProdID {
        const LABELS: &'static [&'static str] = &["start", "s_expr", "e_add", "e_int", "e_error"];
        const LHS: &'static [NonTermID] = &[
            NonTermID::Start,
            NonTermID::S,
            NonTermID::E,
            NonTermID::E,
            NonTermID::E,
        ];
        const SIZES: &'static [usize] = &[1, 1, 3, 1, 1];
    }

    pub type Action = ParserAction<StateID, ProdID>;

    pub struct ParData;
    impl ParData {
        const TAB: [[Action; N_TOKENS]; 7] = [
            /* STATE 0 */
            [
                Action::Shift(StateID(3)), /* int */
                Action::Error,             /* + */
                Action::Error,             /* , */
                Action::Error,             /* end */
                Action::Shift(StateID(6)), /* error */
            ],
            /* STATE 1 */
            [
                Action::Error,
                Action::Error,
                Action::Error,
                Action::Accept,
                Action::Error,
            ],
            /* STATE 2 */
            [
                Action::Error,
                Action::Shift(StateID(4)),
                Action::Error,
                Action::Reduce(ProdID::SExpr),
                Action::Error,
            ],
            /* STATE 3 */
            [
                Action::Error,
                Action::Reduce(ProdID::EInt),
                Action::Error,
                Action::Reduce(ProdID::EInt),
                Action::Error,
            ],
            /* STATE 4 */
            [
                Action::Shift(StateID(3)),
                Action::Error,
                Action::Error,
                Action::Error,
                Action::Shift(StateID(6)),
            ],
            /* STATE 5 */
            [
                Action::Error,
                Action::Reduce(ProdID::EAdd),
                Action::Error,
                Action::Reduce(ProdID::EAdd),
                Action::Error,
            ],
            /* STATE 6 */
            [
                Action::Error,
                Action::Reduce(ProdID::EError),
                Action::Error,
                Action::Reduce(ProdID::EError),
                Action::Error,
            ],
        ];

        const GOTO: [[Goto; N_NONTERMS]; 7] = [
            /* STATE 0 */ [None, to(1), to(2), None, None],
            /* STATE 1 */ [None; N_NONTERMS],
            /* STATE 2 */ [None; N_NONTERMS],
            /* STATE 3 */ [None; N_NONTERMS],
            /* STATE 4 */ [None, None, to(5), None, None],
            /* STATE 5 */ [None; N_NONTERMS],
            /* STATE 6 */ [None; N_NONTERMS],
        ];
    }

    impl ParserData for ParData {
        type StateID = StateID;
        type TokenID = TokenID;
        type NonTermID = NonTermID;
        type ProdID = ProdID;

        fn start_state() -> StateID {
            StateID(0)
        }
        fn lookup(state_id: StateID, token_id: TokenID) -> Action {
            Self::TAB[Into::<usize>::into(state_id)][Into::<usize>::into(token_id)]
        }
        fn goto(state_id: StateID, nonterm_id: NonTermID) -> Goto {
            Self::GOTO[Into::<usize>::into(state_id)][Into::<usize>::into(nonterm_id)]
        }
        fn handles_error(state_id: StateID) -> bool {
            matches!(state_id, StateID(0) | StateID(4))
        }
        fn end_token() -> TokenID {
            TokenID::End
        }
        fn error_token() -> Option<TokenID> {
            Some(TokenID::Error)
        }
    }

    /// Same automaton with no resynchronisation state.
    pub struct NoRecoveryPoints;
    impl ParserData for NoRecoveryPoints {
        type StateID = StateID;
        type TokenID = TokenID;
        type NonTermID = NonTermID;
        type ProdID = ProdID;

        fn start_state() -> StateID {
            ParData::start_state()
        }
        fn lookup(state_id: StateID, token_id: TokenID) -> Action {
            ParData::lookup(state_id, token_id)
        }
        fn goto(state_id: StateID, nonterm_id: NonTermID) -> Goto {
            ParData::goto(state_id, nonterm_id)
        }
        fn handles_error(_state_id: StateID) -> bool {
            false
        }
        fn end_token() -> TokenID {
            TokenID::End
        }
        fn error_token() -> Option<TokenID> {
            Some(TokenID::Error)
        }
    }

    /// Same automaton, except that `E -> error` must be followed by `'+'`.
    pub struct ErrorNeedsOperator;
    impl ParserData for ErrorNeedsOperator {
        type StateID = StateID;
        type TokenID = TokenID;
        type NonTermID = NonTermID;
        type ProdID = ProdID;

        fn start_state() -> StateID {
            ParData::start_state()
        }
        fn lookup(state_id: StateID, token_id: TokenID) -> Action {
            match (state_id, token_id) {
                (StateID(6), TokenID::End) => Action::Error,
                _ => ParData::lookup(state_id, token_id),
            }
        }
        fn goto(state_id: StateID, nonterm_id: NonTermID) -> Goto {
            ParData::goto(state_id, nonterm_id)
        }
        fn handles_error(state_id: StateID) -> bool {
            ParData::handles_error(state_id)
        }
        fn end_token() -> TokenID {
            TokenID::End
        }
        fn error_token() -> Option<TokenID> {
            Some(TokenID::Error)
        }
    }

    /// Same automaton with a goto past the last state.
    pub struct GotoOutOfRange;
    impl ParserData for GotoOutOfRange {
        type StateID = StateID;
        type TokenID = TokenID;
        type NonTermID = NonTermID;
        type ProdID = ProdID;

        fn start_state() -> StateID {
            ParData::start_state()
        }
        fn lookup(state_id: StateID, token_id: TokenID) -> Action {
            ParData::lookup(state_id, token_id)
        }
        fn goto(state_id: StateID, nonterm_id: NonTermID) -> Goto {
            match (state_id, nonterm_id) {
                (StateID(0), NonTermID::E) => Some(StateID(StateID::COUNT as u8)),
                _ => ParData::goto(state_id, nonterm_id),
            }
        }
        fn handles_error(state_id: StateID) -> bool {
            ParData::handles_error(state_id)
        }
        fn end_token() -> TokenID {
            TokenID::End
        }
    }
}

/// `S -> L`, `L -> int*` lowered to `L -> ε (seq_head) | L int (seq_trail)`.
pub mod star {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
    #[repr(usize)]
    pub enum ProdID {
        Start = 0,
        SList = 1,
        LEmpty = 2,
        LMore = 3,
    }

    impl ParserProdID for ProdID {
        type NonTermID = NonTermID;

        const COUNT: usize = 4;

        fn label(&self) -> &'static str {
            ["start", "s_list", "l_empty", "l_more"][Into::<usize>::into(*self)]
        }
        fn lhs(&self) -> NonTermID {
            match self {
                ProdID::Start => NonTermID::Start,
                ProdID::SList => NonTermID::S,
                ProdID::LEmpty | ProdID::LMore => NonTermID::L,
            }
        }
        fn size(&self) -> usize {
            [1, 1, 0, 2][Into::<usize>::into(*self)]
        }
        fn reduction(&self) -> Reduction {
            match self {
                ProdID::Start => Reduction::Nothing,
                ProdID::SList => Reduction::Action,
                ProdID::LEmpty => Reduction::SeqHead,
                ProdID::LMore => Reduction::SeqTrail,
            }
        }
    }

    pub type Action = ParserAction<StateID, ProdID>;

    pub struct ParData;
    impl ParData {
        const TAB: [[Action; N_TOKENS]; 4] = [
            /* STATE 0 */
            [
                Action::Reduce(ProdID::LEmpty),
                Action::Error,
                Action::Error,
                Action::Reduce(ProdID::LEmpty),
                Action::Error,
            ],
            /* STATE 1 */
            [
                Action::Error,
                Action::Error,
                Action::Error,
                Action::Accept,
                Action::Error,
            ],
            /* STATE 2 */
            [
                Action::Shift(StateID(3)),
                Action::Error,
                Action::Error,
                Action::Reduce(ProdID::SList),
                Action::Error,
            ],
            /* STATE 3 */
            [
                Action::Reduce(ProdID::LMore),
                Action::Error,
                Action::Error,
                Action::Reduce(ProdID::LMore),
                Action::Error,
            ],
        ];

        const GOTO: [[Goto; N_NONTERMS]; 4] = [
            /* STATE 0 */ [None, to(1), None, to(2), None],
            /* STATE 1 */ [None; N_NONTERMS],
            /* STATE 2 */ [None; N_NONTERMS],
            /* STATE 3 */ [None; N_NONTERMS],
        ];
    }

    impl ParserData for ParData {
        type StateID = StateID;
        type TokenID = TokenID;
        type NonTermID = NonTermID;
        type ProdID = ProdID;

        fn start_state() -> StateID {
            StateID(0)
        }
        fn lookup(state_id: StateID, token_id: TokenID) -> Action {
            Self::TAB[Into::<usize>::into(state_id)][Into::<usize>::into(token_id)]
        }
        fn goto(state_id: StateID, nonterm_id: NonTermID) -> Goto {
            Self::GOTO[Into::<usize>::into(state_id)][Into::<usize>::into(nonterm_id)]
        }
        fn handles_error(_state_id: StateID) -> bool {
            false
        }
        fn end_token() -> TokenID {
            TokenID::End
        }
    }
}

/// `S -> L`, `L -> int / ','` lowered to
/// `L -> int (seq_head) | L ',' int (seq_trail2)`.
pub mod slash {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
    #[repr(usize)]
    pub enum ProdID {
        Start = 0,
        SList = 1,
        LFirst = 2,
        LNext = 3,
    }

    impl ParserProdID for ProdID {
        type NonTermID = NonTermID;

        const COUNT: usize = 4;

        fn label(&self) -> &'static str {
            ["start", "s_list", "l_first", "l_next"][Into::<usize>::into(*self)]
        }
        fn lhs(&self) -> NonTermID {
            match self {
                ProdID::Start => NonTermID::Start,
                ProdID::SList => NonTermID::S,
                ProdID::LFirst | ProdID::LNext => NonTermID::L,
            }
        }
        fn size(&self) -> usize {
            [1, 1, 1, 3][Into::<usize>::into(*self)]
        }
        fn reduction(&self) -> Reduction {
            match self {
                ProdID::Start => Reduction::Nothing,
                ProdID::SList => Reduction::Action,
                ProdID::LFirst => Reduction::SeqHead,
                ProdID::LNext => Reduction::SeqTrail2,
            }
        }
    }

    pub type Action = ParserAction<StateID, ProdID>;

    pub struct ParData;
    impl ParData {
        const TAB: [[Action; N_TOKENS]; 6] = [
            /* STATE 0 */
            [
                Action::Shift(StateID(3)),
                Action::Error,
                Action::Error,
                Action::Error,
                Action::Error,
            ],
            /* STATE 1 */
            [
                Action::Error,
                Action::Error,
                Action::Error,
                Action::Accept,
                Action::Error,
            ],
            /* STATE 2 */
            [
                Action::Error,
                Action::Error,
                Action::Shift(StateID(4)),
                Action::Reduce(ProdID::SList),
                Action::Error,
            ],
            /* STATE 3 */
            [
                Action::Error,
                Action::Error,
                Action::Reduce(ProdID::LFirst),
                Action::Reduce(ProdID::LFirst),
                Action::Error,
            ],
            /* STATE 4 */
            [
                Action::Shift(StateID(5)),
                Action::Error,
                Action::Error,
                Action::Error,
                Action::Error,
            ],
            /* STATE 5 */
            [
                Action::Error,
                Action::Error,
                Action::Reduce(ProdID::LNext),
                Action::Reduce(ProdID::LNext),
                Action::Error,
            ],
        ];

        const GOTO: [[Goto; N_NONTERMS]; 6] = [
            /* STATE 0 */ [None, to(1), None, to(2), None],
            /* STATE 1 */ [None; N_NONTERMS],
            /* STATE 2 */ [None; N_NONTERMS],
            /* STATE 3 */ [None; N_NONTERMS],
            /* STATE 4 */ [None; N_NONTERMS],
            /* STATE 5 */ [None; N_NONTERMS],
        ];
    }

    impl ParserData for ParData {
        type StateID = StateID;
        type TokenID = TokenID;
        type NonTermID = NonTermID;
        type ProdID = ProdID;

        fn start_state() -> StateID {
            StateID(0)
        }
        fn lookup(state_id: StateID, token_id: TokenID) -> Action {
            Self::TAB[Into::<usize>::into(state_id)][Into::<usize>::into(token_id)]
        }
        fn goto(state_id: StateID, nonterm_id: NonTermID) -> Goto {
            Self::GOTO[Into::<usize>::into(state_id)][Into::<usize>::into(nonterm_id)]
        }
        fn handles_error(_state_id: StateID) -> bool {
            false
        }
        fn end_token() -> TokenID {
            TokenID::End
        }
    }

    /// Same automaton, resynchronising below the list: `error` in state 0
    /// jumps straight to state 1.
    ///
    /// States 3 and 5 are the states of folded elements. They also claim to
    /// resynchronise but reject the error token, so a recovery that exposes
    /// folded elements instead of popping them with their accumulator fails
    /// for good.
    pub struct Resync;
    impl ParserData for Resync {
        type StateID = StateID;
        type TokenID = TokenID;
        type NonTermID = NonTermID;
        type ProdID = ProdID;

        fn start_state() -> StateID {
            ParData::start_state()
        }
        fn lookup(state_id: StateID, token_id: TokenID) -> Action {
            match (state_id, token_id) {
                (StateID(0), TokenID::Error) => Action::Shift(StateID(1)),
                _ => ParData::lookup(state_id, token_id),
            }
        }
        fn goto(state_id: StateID, nonterm_id: NonTermID) -> Goto {
            ParData::goto(state_id, nonterm_id)
        }
        fn handles_error(state_id: StateID) -> bool {
            matches!(state_id, StateID(0) | StateID(3) | StateID(5))
        }
        fn end_token() -> TokenID {
            TokenID::End
        }
        fn error_token() -> Option<TokenID> {
            Some(TokenID::Error)
        }
    }
}

/// `S -> O`, `O -> int?` lowered to `O -> ε (opt_nothing) | int (opt_just)`.
pub mod opt {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
    #[repr(usize)]
    pub enum ProdID {
        Start = 0,
        SOpt = 1,
        ONone = 2,
        OSome = 3,
    }

    impl ParserProdID for ProdID {
        type NonTermID = NonTermID;

        const COUNT: usize = 4;

        fn label(&self) -> &'static str {
            ["start", "s_opt", "o_none", "o_some"][Into::<usize>::into(*self)]
        }
        fn lhs(&self) -> NonTermID {
            match self {
                ProdID::Start => NonTermID::Start,
                ProdID::SOpt => NonTermID::S,
                ProdID::ONone | ProdID::OSome => NonTermID::O,
            }
        }
        fn size(&self) -> usize {
            [1, 1, 0, 1][Into::<usize>::into(*self)]
        }
        fn reduction(&self) -> Reduction {
            match self {
                ProdID::Start => Reduction::Nothing,
                ProdID::SOpt => Reduction::Action,
                ProdID::ONone => Reduction::OptNothing,
                ProdID::OSome => Reduction::OptJust,
            }
        }
    }

    pub type Action = ParserAction<StateID, ProdID>;

    pub struct ParData;
    impl ParData {
        const TAB: [[Action; N_TOKENS]; 4] = [
            /* STATE 0 */
            [
                Action::Shift(StateID(3)),
                Action::Error,
                Action::Error,
                Action::Reduce(ProdID::ONone),
                Action::Error,
            ],
            /* STATE 1 */
            [
                Action::Error,
                Action::Error,
                Action::Error,
                Action::Accept,
                Action::Error,
            ],
            /* STATE 2 */
            [
                Action::Error,
                Action::Error,
                Action::Error,
                Action::Reduce(ProdID::SOpt),
                Action::Error,
            ],
            /* STATE 3 */
            [
                Action::Error,
                Action::Error,
                Action::Error,
                Action::Reduce(ProdID::OSome),
                Action::Error,
            ],
        ];

        const GOTO: [[Goto; N_NONTERMS]; 4] = [
            /* STATE 0 */ [None, to(1), None, None, to(2)],
            /* STATE 1 */ [None; N_NONTERMS],
            /* STATE 2 */ [None; N_NONTERMS],
            /* STATE 3 */ [None; N_NONTERMS],
        ];
    }

    impl ParserData for ParData {
        type StateID = StateID;
        type TokenID = TokenID;
        type NonTermID = NonTermID;
        type ProdID = ProdID;

        fn start_state() -> StateID {
            StateID(0)
        }
        fn lookup(state_id: StateID, token_id: TokenID) -> Action {
            Self::TAB[Into::<usize>::into(state_id)][Into::<usize>::into(token_id)]
        }
        fn goto(state_id: StateID, nonterm_id: NonTermID) -> Goto {
            Self::GOTO[Into::<usize>::into(state_id)][Into::<usize>::into(nonterm_id)]
        }
        fn handles_error(_state_id: StateID) -> bool {
            false
        }
        fn end_token() -> TokenID {
            TokenID::End
        }
    }
}
