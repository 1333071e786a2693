use crate::ebnf::ReduceArgs;
use crate::error::{EngineError, SyntaxError};
use crate::table::ParserData;
use std::fmt::Debug;

pub(crate) type StateOf<A> = <<A as SemanticActions>::ParserData as ParserData>::StateID;
pub(crate) type TokenOf<A> = <<A as SemanticActions>::ParserData as ParserData>::TokenID;
pub(crate) type ProdOf<A> = <<A as SemanticActions>::ParserData as ParserData>::ProdID;

/// Arguments handed to [`SemanticActions::reduce`].
pub type Args<'a, A> = ReduceArgs<'a, StateOf<A>, <A as SemanticActions>::Value>;

/// Syntax error context handed to [`SemanticActions::syntax_error`].
pub type SyntaxErrorOf<A> = SyntaxError<StateOf<A>, TokenOf<A>>;

/// User code driven by the [`Engine`](crate::Engine).
///
/// `Value` is the single type stored in every stack frame. Grammars whose
/// symbols carry different payloads use an enum here and match on it inside
/// [`reduce`](Self::reduce).
pub trait SemanticActions {
    type ParserData: ParserData;
    type Value: Clone + Default + Debug;

    /// Computes the value of production `prod_id` from its arguments.
    ///
    /// Called only for productions whose reduction is
    /// [`Reduction::Action`](crate::Reduction::Action). An `Err` aborts the
    /// post: pending frames are discarded and the session is marked failed.
    fn reduce(
        &mut self,
        prod_id: ProdOf<Self>,
        args: &Args<'_, Self>,
    ) -> Result<Self::Value, EngineError>;

    /// The table has no action for the incoming token.
    fn syntax_error(&mut self, err: &SyntaxErrorOf<Self>) {
        log::warn!("syntax error: {}", err);
    }

    /// A push would have exceeded the configured stack capacity.
    fn stack_overflow(&mut self) {
        log::error!("parser stack overflow");
    }
}
