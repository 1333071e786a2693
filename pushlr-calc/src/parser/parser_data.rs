//! SLR(1) automaton for the calculator grammar.
//!
//! ```text
//!  0  Start -> Program               Nothing
//!  1  Program -> StmtSeq             Action
//!  2  StmtSeq ->                     SeqHead
//!  3  StmtSeq -> StmtSeq Stmt        SeqTrail
//!  4  Stmt -> Expr ;                 Action
//!  5  Stmt -> error ;                Action
//!  6  Expr -> Expr + Term            Action
//!  7  Expr -> Expr - Term            Action
//!  8  Expr -> Term                   Action
//!  9  Term -> Term * Factor          Action
//! 10  Term -> Term / Factor          Action
//! 11  Term -> Factor                 Action
//! 12  Factor -> int                  Action
//! 13  Factor -> ( Expr )             Action
//! 14  Factor -> - Factor             Action
//! 15  Factor -> ident ( ArgSeq )     Action
//! 16  ArgSeq -> Expr                 SeqHead
//! 17  ArgSeq -> ArgSeq , Expr        SeqTrail2
//! 18  Stmt -> ;                      Nothing
//! ```

use num_enum::{IntoPrimitive, TryFromPrimitive};
use pushlr::{
    ParserAction, ParserData, ParserNonTermID, ParserProdID, ParserStateID, ParserTokenID,
    Reduction,
};

pub const N_TERMINALS: usize = 12;
pub const N_NONTERMINALS: usize = 8;
pub const N_PRODUCTIONS: usize = 19;
pub const N_STATES: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(usize)]
pub enum TokenID {
    Int = 0,
    Ident = 1,
    Plus = 2,
    Minus = 3,
    Asterisk = 4,
    Slash = 5,
    LeftParen = 6,
    RightParen = 7,
    Comma = 8,
    Semicolon = 9,
    End = 10,
    Error = 11,
}

impl ParserTokenID for TokenID {
    const COUNT: usize = N_TERMINALS;
}

impl TokenID {
    pub const LABELS: [&'static str; N_TERMINALS] = [
        "int", // 0
        "ident", // 1
        "+", // 2
        "-", // 3
        "*", // 4
        "/", // 5
        "(", // 6
        ")", // 7
        ",", // 8
        ";", // 9
        "end", // 10
        "error", // 11
    ];

    pub fn label(&self) -> &'static str {
        Self::LABELS[Into::<usize>::into(*self)]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(usize)]
pub enum NonTermID {
    Start = 0,
    Program = 1,
    StmtSeq = 2,
    Stmt = 3,
    Expr = 4,
    Term = 5,
    Factor = 6,
    ArgSeq = 7,
}

impl ParserNonTermID for NonTermID {
    const COUNT: usize = N_NONTERMINALS;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(usize)]
pub enum ProdID {
    Start = 0,
    Program = 1,
    StmtSeq1 = 2,
    StmtSeq2 = 3,
    Stmt1 = 4,
    Stmt2 = 5,
    Expr1 = 6,
    Expr2 = 7,
    Expr3 = 8,
    Term1 = 9,
    Term2 = 10,
    Term3 = 11,
    Factor1 = 12,
    Factor2 = 13,
    Factor3 = 14,
    Factor4 = 15,
    ArgSeq1 = 16,
    ArgSeq2 = 17,
    Stmt3 = 18,
}

#[derive(Clone, Copy, Debug)]
pub struct Prod(
    pub NonTermID, // left-hand side
    pub usize,     // RHS size
    pub Reduction,
    pub &'static str, // label
);

pub const PRODS: [Prod; N_PRODUCTIONS] = [
    Prod(NonTermID::Start, 1, Reduction::Nothing, "start"), // 0
    Prod(NonTermID::Program, 1, Reduction::Action, "program"), // 1
    Prod(NonTermID::StmtSeq, 0, Reduction::SeqHead, "stmt_seq1"), // 2
    Prod(NonTermID::StmtSeq, 2, Reduction::SeqTrail, "stmt_seq2"), // 3
    Prod(NonTermID::Stmt, 2, Reduction::Action, "stmt1"), // 4
    Prod(NonTermID::Stmt, 2, Reduction::Action, "stmt2"), // 5
    Prod(NonTermID::Expr, 3, Reduction::Action, "expr1"), // 6
    Prod(NonTermID::Expr, 3, Reduction::Action, "expr2"), // 7
    Prod(NonTermID::Expr, 1, Reduction::Action, "expr3"), // 8
    Prod(NonTermID::Term, 3, Reduction::Action, "term1"), // 9
    Prod(NonTermID::Term, 3, Reduction::Action, "term2"), // 10
    Prod(NonTermID::Term, 1, Reduction::Action, "term3"), // 11
    Prod(NonTermID::Factor, 1, Reduction::Action, "factor1"), // 12
    Prod(NonTermID::Factor, 3, Reduction::Action, "factor2"), // 13
    Prod(NonTermID::Factor, 2, Reduction::Action, "factor3"), // 14
    Prod(NonTermID::Factor, 4, Reduction::Action, "factor4"), // 15
    Prod(NonTermID::ArgSeq, 1, Reduction::SeqHead, "arg_seq1"), // 16
    Prod(NonTermID::ArgSeq, 3, Reduction::SeqTrail2, "arg_seq2"), // 17
    Prod(NonTermID::Stmt, 1, Reduction::Nothing, "stmt3"), // 18
];

impl ParserProdID for ProdID {
    type NonTermID = NonTermID;

    const COUNT: usize = N_PRODUCTIONS;

    fn label(&self) -> &'static str {
        PRODS[Into::<usize>::into(*self)].3
    }
    fn lhs(&self) -> NonTermID {
        PRODS[Into::<usize>::into(*self)].0
    }
    fn size(&self) -> usize {
        PRODS[Into::<usize>::into(*self)].1
    }
    fn reduction(&self) -> Reduction {
        PRODS[Into::<usize>::into(*self)].2
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateID(u8);

impl ParserStateID for StateID {
    const COUNT: usize = N_STATES;
}

impl From<StateID> for usize {
    fn from(s: StateID) -> Self {
        s.0 as usize
    }
}

pub type Action = ParserAction<StateID, ProdID>;

pub struct ParData;

impl ParData {
    const TAB: [[Action; N_TERMINALS]; N_STATES] = [
        /* STATE 0 */ [
            Action::Reduce(ProdID::StmtSeq1), /* 0(int) */
            Action::Reduce(ProdID::StmtSeq1), /* 1(ident) */
            Action::Error, /* 2(+) */
            Action::Reduce(ProdID::StmtSeq1), /* 3(-) */
            Action::Error, /* 4(*) */
            Action::Error, /* 5(/) */
            Action::Reduce(ProdID::StmtSeq1), /* 6(() */
            Action::Error, /* 7()) */
            Action::Error, /* 8(,) */
            Action::Reduce(ProdID::StmtSeq1), /* 9(;) */
            Action::Reduce(ProdID::StmtSeq1), /* 10(end) */
            Action::Reduce(ProdID::StmtSeq1), /* 11(error) */
        ],
        /* STATE 1 */ [
            Action::Error, /* 0(int) */
            Action::Error, /* 1(ident) */
            Action::Error, /* 2(+) */
            Action::Error, /* 3(-) */
            Action::Error, /* 4(*) */
            Action::Error, /* 5(/) */
            Action::Error, /* 6(() */
            Action::Error, /* 7()) */
            Action::Error, /* 8(,) */
            Action::Error, /* 9(;) */
            Action::Accept, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 2 */ [
            Action::Shift(StateID(5)), /* 0(int) */
            Action::Shift(StateID(8)), /* 1(ident) */
            Action::Error, /* 2(+) */
            Action::Shift(StateID(7)), /* 3(-) */
            Action::Error, /* 4(*) */
            Action::Error, /* 5(/) */
            Action::Shift(StateID(6)), /* 6(() */
            Action::Error, /* 7()) */
            Action::Error, /* 8(,) */
            Action::Shift(StateID(4)), /* 9(;) */
            Action::Reduce(ProdID::Program), /* 10(end) */
            Action::Shift(StateID(3)), /* 11(error) */
        ],
        /* STATE 3 */ [
            Action::Error, /* 0(int) */
            Action::Error, /* 1(ident) */
            Action::Error, /* 2(+) */
            Action::Error, /* 3(-) */
            Action::Error, /* 4(*) */
            Action::Error, /* 5(/) */
            Action::Error, /* 6(() */
            Action::Error, /* 7()) */
            Action::Error, /* 8(,) */
            Action::Shift(StateID(13)), /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 4 */ [
            Action::Reduce(ProdID::Stmt3), /* 0(int) */
            Action::Reduce(ProdID::Stmt3), /* 1(ident) */
            Action::Error, /* 2(+) */
            Action::Reduce(ProdID::Stmt3), /* 3(-) */
            Action::Error, /* 4(*) */
            Action::Error, /* 5(/) */
            Action::Reduce(ProdID::Stmt3), /* 6(() */
            Action::Error, /* 7()) */
            Action::Error, /* 8(,) */
            Action::Reduce(ProdID::Stmt3), /* 9(;) */
            Action::Reduce(ProdID::Stmt3), /* 10(end) */
            Action::Reduce(ProdID::Stmt3), /* 11(error) */
        ],
        /* STATE 5 */ [
            Action::Error, /* 0(int) */
            Action::Error, /* 1(ident) */
            Action::Reduce(ProdID::Factor1), /* 2(+) */
            Action::Reduce(ProdID::Factor1), /* 3(-) */
            Action::Reduce(ProdID::Factor1), /* 4(*) */
            Action::Reduce(ProdID::Factor1), /* 5(/) */
            Action::Error, /* 6(() */
            Action::Reduce(ProdID::Factor1), /* 7()) */
            Action::Reduce(ProdID::Factor1), /* 8(,) */
            Action::Reduce(ProdID::Factor1), /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 6 */ [
            Action::Shift(StateID(5)), /* 0(int) */
            Action::Shift(StateID(8)), /* 1(ident) */
            Action::Error, /* 2(+) */
            Action::Shift(StateID(7)), /* 3(-) */
            Action::Error, /* 4(*) */
            Action::Error, /* 5(/) */
            Action::Shift(StateID(6)), /* 6(() */
            Action::Error, /* 7()) */
            Action::Error, /* 8(,) */
            Action::Error, /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 7 */ [
            Action::Shift(StateID(5)), /* 0(int) */
            Action::Shift(StateID(8)), /* 1(ident) */
            Action::Error, /* 2(+) */
            Action::Shift(StateID(7)), /* 3(-) */
            Action::Error, /* 4(*) */
            Action::Error, /* 5(/) */
            Action::Shift(StateID(6)), /* 6(() */
            Action::Error, /* 7()) */
            Action::Error, /* 8(,) */
            Action::Error, /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 8 */ [
            Action::Error, /* 0(int) */
            Action::Error, /* 1(ident) */
            Action::Error, /* 2(+) */
            Action::Error, /* 3(-) */
            Action::Error, /* 4(*) */
            Action::Error, /* 5(/) */
            Action::Shift(StateID(16)), /* 6(() */
            Action::Error, /* 7()) */
            Action::Error, /* 8(,) */
            Action::Error, /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 9 */ [
            Action::Reduce(ProdID::StmtSeq2), /* 0(int) */
            Action::Reduce(ProdID::StmtSeq2), /* 1(ident) */
            Action::Error, /* 2(+) */
            Action::Reduce(ProdID::StmtSeq2), /* 3(-) */
            Action::Error, /* 4(*) */
            Action::Error, /* 5(/) */
            Action::Reduce(ProdID::StmtSeq2), /* 6(() */
            Action::Error, /* 7()) */
            Action::Error, /* 8(,) */
            Action::Reduce(ProdID::StmtSeq2), /* 9(;) */
            Action::Reduce(ProdID::StmtSeq2), /* 10(end) */
            Action::Reduce(ProdID::StmtSeq2), /* 11(error) */
        ],
        /* STATE 10 */ [
            Action::Error, /* 0(int) */
            Action::Error, /* 1(ident) */
            Action::Shift(StateID(18)), /* 2(+) */
            Action::Shift(StateID(19)), /* 3(-) */
            Action::Error, /* 4(*) */
            Action::Error, /* 5(/) */
            Action::Error, /* 6(() */
            Action::Error, /* 7()) */
            Action::Error, /* 8(,) */
            Action::Shift(StateID(17)), /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 11 */ [
            Action::Error, /* 0(int) */
            Action::Error, /* 1(ident) */
            Action::Reduce(ProdID::Expr3), /* 2(+) */
            Action::Reduce(ProdID::Expr3), /* 3(-) */
            Action::Shift(StateID(20)), /* 4(*) */
            Action::Shift(StateID(21)), /* 5(/) */
            Action::Error, /* 6(() */
            Action::Reduce(ProdID::Expr3), /* 7()) */
            Action::Reduce(ProdID::Expr3), /* 8(,) */
            Action::Reduce(ProdID::Expr3), /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 12 */ [
            Action::Error, /* 0(int) */
            Action::Error, /* 1(ident) */
            Action::Reduce(ProdID::Term3), /* 2(+) */
            Action::Reduce(ProdID::Term3), /* 3(-) */
            Action::Reduce(ProdID::Term3), /* 4(*) */
            Action::Reduce(ProdID::Term3), /* 5(/) */
            Action::Error, /* 6(() */
            Action::Reduce(ProdID::Term3), /* 7()) */
            Action::Reduce(ProdID::Term3), /* 8(,) */
            Action::Reduce(ProdID::Term3), /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 13 */ [
            Action::Reduce(ProdID::Stmt2), /* 0(int) */
            Action::Reduce(ProdID::Stmt2), /* 1(ident) */
            Action::Error, /* 2(+) */
            Action::Reduce(ProdID::Stmt2), /* 3(-) */
            Action::Error, /* 4(*) */
            Action::Error, /* 5(/) */
            Action::Reduce(ProdID::Stmt2), /* 6(() */
            Action::Error, /* 7()) */
            Action::Error, /* 8(,) */
            Action::Reduce(ProdID::Stmt2), /* 9(;) */
            Action::Reduce(ProdID::Stmt2), /* 10(end) */
            Action::Reduce(ProdID::Stmt2), /* 11(error) */
        ],
        /* STATE 14 */ [
            Action::Error, /* 0(int) */
            Action::Error, /* 1(ident) */
            Action::Shift(StateID(18)), /* 2(+) */
            Action::Shift(StateID(19)), /* 3(-) */
            Action::Error, /* 4(*) */
            Action::Error, /* 5(/) */
            Action::Error, /* 6(() */
            Action::Shift(StateID(22)), /* 7()) */
            Action::Error, /* 8(,) */
            Action::Error, /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 15 */ [
            Action::Error, /* 0(int) */
            Action::Error, /* 1(ident) */
            Action::Reduce(ProdID::Factor3), /* 2(+) */
            Action::Reduce(ProdID::Factor3), /* 3(-) */
            Action::Reduce(ProdID::Factor3), /* 4(*) */
            Action::Reduce(ProdID::Factor3), /* 5(/) */
            Action::Error, /* 6(() */
            Action::Reduce(ProdID::Factor3), /* 7()) */
            Action::Reduce(ProdID::Factor3), /* 8(,) */
            Action::Reduce(ProdID::Factor3), /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 16 */ [
            Action::Shift(StateID(5)), /* 0(int) */
            Action::Shift(StateID(8)), /* 1(ident) */
            Action::Error, /* 2(+) */
            Action::Shift(StateID(7)), /* 3(-) */
            Action::Error, /* 4(*) */
            Action::Error, /* 5(/) */
            Action::Shift(StateID(6)), /* 6(() */
            Action::Error, /* 7()) */
            Action::Error, /* 8(,) */
            Action::Error, /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 17 */ [
            Action::Reduce(ProdID::Stmt1), /* 0(int) */
            Action::Reduce(ProdID::Stmt1), /* 1(ident) */
            Action::Error, /* 2(+) */
            Action::Reduce(ProdID::Stmt1), /* 3(-) */
            Action::Error, /* 4(*) */
            Action::Error, /* 5(/) */
            Action::Reduce(ProdID::Stmt1), /* 6(() */
            Action::Error, /* 7()) */
            Action::Error, /* 8(,) */
            Action::Reduce(ProdID::Stmt1), /* 9(;) */
            Action::Reduce(ProdID::Stmt1), /* 10(end) */
            Action::Reduce(ProdID::Stmt1), /* 11(error) */
        ],
        /* STATE 18 */ [
            Action::Shift(StateID(5)), /* 0(int) */
            Action::Shift(StateID(8)), /* 1(ident) */
            Action::Error, /* 2(+) */
            Action::Shift(StateID(7)), /* 3(-) */
            Action::Error, /* 4(*) */
            Action::Error, /* 5(/) */
            Action::Shift(StateID(6)), /* 6(() */
            Action::Error, /* 7()) */
            Action::Error, /* 8(,) */
            Action::Error, /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 19 */ [
            Action::Shift(StateID(5)), /* 0(int) */
            Action::Shift(StateID(8)), /* 1(ident) */
            Action::Error, /* 2(+) */
            Action::Shift(StateID(7)), /* 3(-) */
            Action::Error, /* 4(*) */
            Action::Error, /* 5(/) */
            Action::Shift(StateID(6)), /* 6(() */
            Action::Error, /* 7()) */
            Action::Error, /* 8(,) */
            Action::Error, /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 20 */ [
            Action::Shift(StateID(5)), /* 0(int) */
            Action::Shift(StateID(8)), /* 1(ident) */
            Action::Error, /* 2(+) */
            Action::Shift(StateID(7)), /* 3(-) */
            Action::Error, /* 4(*) */
            Action::Error, /* 5(/) */
            Action::Shift(StateID(6)), /* 6(() */
            Action::Error, /* 7()) */
            Action::Error, /* 8(,) */
            Action::Error, /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 21 */ [
            Action::Shift(StateID(5)), /* 0(int) */
            Action::Shift(StateID(8)), /* 1(ident) */
            Action::Error, /* 2(+) */
            Action::Shift(StateID(7)), /* 3(-) */
            Action::Error, /* 4(*) */
            Action::Error, /* 5(/) */
            Action::Shift(StateID(6)), /* 6(() */
            Action::Error, /* 7()) */
            Action::Error, /* 8(,) */
            Action::Error, /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 22 */ [
            Action::Error, /* 0(int) */
            Action::Error, /* 1(ident) */
            Action::Reduce(ProdID::Factor2), /* 2(+) */
            Action::Reduce(ProdID::Factor2), /* 3(-) */
            Action::Reduce(ProdID::Factor2), /* 4(*) */
            Action::Reduce(ProdID::Factor2), /* 5(/) */
            Action::Error, /* 6(() */
            Action::Reduce(ProdID::Factor2), /* 7()) */
            Action::Reduce(ProdID::Factor2), /* 8(,) */
            Action::Reduce(ProdID::Factor2), /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 23 */ [
            Action::Error, /* 0(int) */
            Action::Error, /* 1(ident) */
            Action::Error, /* 2(+) */
            Action::Error, /* 3(-) */
            Action::Error, /* 4(*) */
            Action::Error, /* 5(/) */
            Action::Error, /* 6(() */
            Action::Shift(StateID(29)), /* 7()) */
            Action::Shift(StateID(30)), /* 8(,) */
            Action::Error, /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 24 */ [
            Action::Error, /* 0(int) */
            Action::Error, /* 1(ident) */
            Action::Shift(StateID(18)), /* 2(+) */
            Action::Shift(StateID(19)), /* 3(-) */
            Action::Error, /* 4(*) */
            Action::Error, /* 5(/) */
            Action::Error, /* 6(() */
            Action::Reduce(ProdID::ArgSeq1), /* 7()) */
            Action::Reduce(ProdID::ArgSeq1), /* 8(,) */
            Action::Error, /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 25 */ [
            Action::Error, /* 0(int) */
            Action::Error, /* 1(ident) */
            Action::Reduce(ProdID::Expr1), /* 2(+) */
            Action::Reduce(ProdID::Expr1), /* 3(-) */
            Action::Shift(StateID(20)), /* 4(*) */
            Action::Shift(StateID(21)), /* 5(/) */
            Action::Error, /* 6(() */
            Action::Reduce(ProdID::Expr1), /* 7()) */
            Action::Reduce(ProdID::Expr1), /* 8(,) */
            Action::Reduce(ProdID::Expr1), /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 26 */ [
            Action::Error, /* 0(int) */
            Action::Error, /* 1(ident) */
            Action::Reduce(ProdID::Expr2), /* 2(+) */
            Action::Reduce(ProdID::Expr2), /* 3(-) */
            Action::Shift(StateID(20)), /* 4(*) */
            Action::Shift(StateID(21)), /* 5(/) */
            Action::Error, /* 6(() */
            Action::Reduce(ProdID::Expr2), /* 7()) */
            Action::Reduce(ProdID::Expr2), /* 8(,) */
            Action::Reduce(ProdID::Expr2), /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 27 */ [
            Action::Error, /* 0(int) */
            Action::Error, /* 1(ident) */
            Action::Reduce(ProdID::Term1), /* 2(+) */
            Action::Reduce(ProdID::Term1), /* 3(-) */
            Action::Reduce(ProdID::Term1), /* 4(*) */
            Action::Reduce(ProdID::Term1), /* 5(/) */
            Action::Error, /* 6(() */
            Action::Reduce(ProdID::Term1), /* 7()) */
            Action::Reduce(ProdID::Term1), /* 8(,) */
            Action::Reduce(ProdID::Term1), /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 28 */ [
            Action::Error, /* 0(int) */
            Action::Error, /* 1(ident) */
            Action::Reduce(ProdID::Term2), /* 2(+) */
            Action::Reduce(ProdID::Term2), /* 3(-) */
            Action::Reduce(ProdID::Term2), /* 4(*) */
            Action::Reduce(ProdID::Term2), /* 5(/) */
            Action::Error, /* 6(() */
            Action::Reduce(ProdID::Term2), /* 7()) */
            Action::Reduce(ProdID::Term2), /* 8(,) */
            Action::Reduce(ProdID::Term2), /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 29 */ [
            Action::Error, /* 0(int) */
            Action::Error, /* 1(ident) */
            Action::Reduce(ProdID::Factor4), /* 2(+) */
            Action::Reduce(ProdID::Factor4), /* 3(-) */
            Action::Reduce(ProdID::Factor4), /* 4(*) */
            Action::Reduce(ProdID::Factor4), /* 5(/) */
            Action::Error, /* 6(() */
            Action::Reduce(ProdID::Factor4), /* 7()) */
            Action::Reduce(ProdID::Factor4), /* 8(,) */
            Action::Reduce(ProdID::Factor4), /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 30 */ [
            Action::Shift(StateID(5)), /* 0(int) */
            Action::Shift(StateID(8)), /* 1(ident) */
            Action::Error, /* 2(+) */
            Action::Shift(StateID(7)), /* 3(-) */
            Action::Error, /* 4(*) */
            Action::Error, /* 5(/) */
            Action::Shift(StateID(6)), /* 6(() */
            Action::Error, /* 7()) */
            Action::Error, /* 8(,) */
            Action::Error, /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
        /* STATE 31 */ [
            Action::Error, /* 0(int) */
            Action::Error, /* 1(ident) */
            Action::Shift(StateID(18)), /* 2(+) */
            Action::Shift(StateID(19)), /* 3(-) */
            Action::Error, /* 4(*) */
            Action::Error, /* 5(/) */
            Action::Error, /* 6(() */
            Action::Reduce(ProdID::ArgSeq2), /* 7()) */
            Action::Reduce(ProdID::ArgSeq2), /* 8(,) */
            Action::Error, /* 9(;) */
            Action::Error, /* 10(end) */
            Action::Error, /* 11(error) */
        ],
    ];

    const GOTO: [[Option<StateID>; N_NONTERMINALS]; N_STATES] = [
        /* STATE 0 */ [None, Some(StateID(1)), Some(StateID(2)), None, None, None, None, None],
        /* STATE 1 */ [None, None, None, None, None, None, None, None],
        /* STATE 2 */ [None, None, None, Some(StateID(9)), Some(StateID(10)), Some(StateID(11)), Some(StateID(12)), None],
        /* STATE 3 */ [None, None, None, None, None, None, None, None],
        /* STATE 4 */ [None, None, None, None, None, None, None, None],
        /* STATE 5 */ [None, None, None, None, None, None, None, None],
        /* STATE 6 */ [None, None, None, None, Some(StateID(14)), Some(StateID(11)), Some(StateID(12)), None],
        /* STATE 7 */ [None, None, None, None, None, None, Some(StateID(15)), None],
        /* STATE 8 */ [None, None, None, None, None, None, None, None],
        /* STATE 9 */ [None, None, None, None, None, None, None, None],
        /* STATE 10 */ [None, None, None, None, None, None, None, None],
        /* STATE 11 */ [None, None, None, None, None, None, None, None],
        /* STATE 12 */ [None, None, None, None, None, None, None, None],
        /* STATE 13 */ [None, None, None, None, None, None, None, None],
        /* STATE 14 */ [None, None, None, None, None, None, None, None],
        /* STATE 15 */ [None, None, None, None, None, None, None, None],
        /* STATE 16 */ [None, None, None, None, Some(StateID(24)), Some(StateID(11)), Some(StateID(12)), Some(StateID(23))],
        /* STATE 17 */ [None, None, None, None, None, None, None, None],
        /* STATE 18 */ [None, None, None, None, None, Some(StateID(25)), Some(StateID(12)), None],
        /* STATE 19 */ [None, None, None, None, None, Some(StateID(26)), Some(StateID(12)), None],
        /* STATE 20 */ [None, None, None, None, None, None, Some(StateID(27)), None],
        /* STATE 21 */ [None, None, None, None, None, None, Some(StateID(28)), None],
        /* STATE 22 */ [None, None, None, None, None, None, None, None],
        /* STATE 23 */ [None, None, None, None, None, None, None, None],
        /* STATE 24 */ [None, None, None, None, None, None, None, None],
        /* STATE 25 */ [None, None, None, None, None, None, None, None],
        /* STATE 26 */ [None, None, None, None, None, None, None, None],
        /* STATE 27 */ [None, None, None, None, None, None, None, None],
        /* STATE 28 */ [None, None, None, None, None, None, None, None],
        /* STATE 29 */ [None, None, None, None, None, None, None, None],
        /* STATE 30 */ [None, None, None, None, Some(StateID(31)), Some(StateID(11)), Some(StateID(12)), None],
        /* STATE 31 */ [None, None, None, None, None, None, None, None],
    ];
}

impl ParserData for ParData {
    type StateID = StateID;
    type TokenID = TokenID;
    type NonTermID = NonTermID;
    type ProdID = ProdID;

    #[inline]
    fn start_state() -> StateID {
        StateID(0)
    }
    #[inline]
    fn lookup(state_id: StateID, token_id: TokenID) -> Action {
        Self::TAB[Into::<usize>::into(state_id)][Into::<usize>::into(token_id)]
    }
    #[inline]
    fn goto(state_id: StateID, nonterm_id: NonTermID) -> Option<StateID> {
        Self::GOTO[Into::<usize>::into(state_id)][Into::<usize>::into(nonterm_id)]
    }
    #[inline]
    fn handles_error(state_id: StateID) -> bool {
        matches!(Self::lookup(state_id, TokenID::Error), Action::Shift(_))
    }
    fn end_token() -> TokenID {
        TokenID::End
    }
    fn error_token() -> Option<TokenID> {
        Some(TokenID::Error)
    }
}
