//! The push-driven LR engine.
//!
//! The caller feeds one `(token, value)` pair at a time through
//! [`Engine::post`]. Each post runs as one stack transaction: the whole chain
//! of reductions ending in a shift, accept or error is applied to the pending
//! region of the [`Stack`] and committed only if no error occurred.

use crate::actions::{ProdOf, SemanticActions, StateOf, TokenOf};
use crate::config::EngineConfig;
use crate::ebnf::{ReduceArgs, nth_top, seq_get_range};
use crate::error::{EngineError, StackError, SyntaxError};
use crate::stack::Stack;
use crate::table::{
    ParserAction, ParserData, ParserNonTermID, ParserProdID, ParserStateID, Reduction, in_range,
};
use smartstring::alias::String;

/// One parse stack entry.
///
/// `sequence_length` is nonzero only for accumulator frames and counts the
/// elements folded directly beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame<S, V> {
    pub state: S,
    pub value: V,
    pub sequence_length: usize,
}

type Frame<A> = StackFrame<StateOf<A>, <A as SemanticActions>::Value>;
type Data<A> = <A as SemanticActions>::ParserData;

/// Counters collected over one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserStats {
    pub tokens: usize,
    pub shifts: usize,
    pub reductions: usize,
    pub errors: usize,
    pub recoveries: usize,
    pub discarded: usize,
}

pub struct Engine<A>
where
    A: SemanticActions,
{
    config: EngineConfig<TokenOf<A>>,
    stack: Stack<Frame<A>>,
    actions: A,
    accepted: bool,
    error: bool,
    accepted_value: Option<A::Value>,
    stats: ParserStats,
}

impl<A> Engine<A>
where
    A: SemanticActions,
{
    /// Creates an engine with a fresh session.
    pub fn new(actions: A, config: EngineConfig<TokenOf<A>>) -> Self {
        let mut engine = Self {
            config,
            stack: Stack::new(config.stack_capacity),
            actions,
            accepted: false,
            error: false,
            accepted_value: None,
            stats: ParserStats::default(),
        };
        engine.reset();
        engine
    }

    /// Starts a new session. Stack storage is reused.
    pub fn reset(&mut self) {
        self.accepted = false;
        self.error = false;
        self.accepted_value = None;
        self.stats = ParserStats::default();
        self.stack.clear();
        self.stack.rollback_tmp();
        self.push_frame(<Data<A> as ParserData>::start_state(), A::Value::default(), 0);
        self.stack.commit_tmp();
    }

    /// Feeds one token.
    ///
    /// Returns `Ok(true)` once the session is finished, either accepted or
    /// failed; the caller should stop posting then. Syntax errors and stack
    /// overflows are reported through the provider and [`is_error`](Self::is_error),
    /// not as `Err`.
    pub fn post(&mut self, token: TokenOf<A>, value: A::Value) -> Result<bool, EngineError> {
        if self.accepted || self.error {
            return Err(EngineError::SessionClosed);
        }
        self.stats.tokens += 1;
        self.stack.rollback_tmp();
        if let Err(err) = self.drive(token, &value) {
            return Err(self.fail(err));
        }
        if !self.error {
            self.stack.commit_tmp();
        } else if let Some(recovery_token) = self.config.recovery_token {
            if let Err(err) = self.recover(token, &value, recovery_token) {
                return Err(self.fail(err));
            }
        } else {
            self.stack.rollback_tmp();
        }
        Ok(self.accepted || self.error)
    }

    /// Feeds a token that carries no payload.
    pub fn post_token(&mut self, token: TokenOf<A>) -> Result<bool, EngineError> {
        self.post(token, A::Value::default())
    }

    /// Feeds tokens until the session finishes or the input runs out.
    /// Returns whether the session finished.
    pub fn post_all<I>(&mut self, tokens: I) -> Result<bool, EngineError>
    where
        I: IntoIterator<Item = (TokenOf<A>, A::Value)>,
    {
        for (token, value) in tokens {
            if self.post(token, value)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Runs a whole session over `tokens` and returns the accepted value.
    pub fn parse<I>(&mut self, tokens: I) -> Result<Option<A::Value>, EngineError>
    where
        I: IntoIterator<Item = (TokenOf<A>, A::Value)>,
    {
        self.reset();
        self.post_all(tokens)?;
        Ok(self.take_accepted())
    }

    /// The root value, once accepted and provided no error followed.
    pub fn accept(&self) -> Option<&A::Value> {
        if self.accepted && !self.error {
            self.accepted_value.as_ref()
        } else {
            None
        }
    }

    pub fn take_accepted(&mut self) -> Option<A::Value> {
        if self.accepted && !self.error {
            self.accepted_value.take()
        } else {
            None
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    pub fn stats(&self) -> ParserStats {
        self.stats.clone()
    }

    pub fn config(&self) -> &EngineConfig<TokenOf<A>> {
        &self.config
    }

    pub fn stack(&self) -> &Stack<Frame<A>> {
        &self.stack
    }

    pub fn actions(&self) -> &A {
        &self.actions
    }

    pub fn actions_mut(&mut self) -> &mut A {
        &mut self.actions
    }

    pub fn into_actions(self) -> A {
        self.actions
    }

    fn fail(&mut self, err: EngineError) -> EngineError {
        log::debug!("post aborted: {}", err);
        self.stack.rollback_tmp();
        self.error = true;
        err
    }

    /// Runs the automaton on `token` until it is shifted, accepted or
    /// rejected. Everything lands in the pending region.
    fn drive(&mut self, token: TokenOf<A>, value: &A::Value) -> Result<(), EngineError> {
        loop {
            if log::log_enabled!(log::Level::Trace) {
                self.dump_state(token);
            }
            let state = self.top_state()?;
            match <Data<A> as ParserData>::lookup(state, token) {
                ParserAction::Shift(next) => {
                    log::trace!("Shift {:?}", next);
                    self.stats.shifts += 1;
                    self.push_frame(next, value.clone(), 0);
                    return Ok(());
                }

                ParserAction::Reduce(prod_id) => {
                    log::trace!("Reduce {:?}({})", prod_id, prod_id.label());
                    self.reduce(prod_id)?;
                    self.stats.reductions += 1;
                    if self.error {
                        return Ok(());
                    }
                }

                ParserAction::Accept => {
                    log::trace!("Accept");
                    self.accepted = true;
                    self.accepted_value = self.stack.top().map(|frame| frame.value.clone());
                    return Ok(());
                }

                ParserAction::Error => {
                    log::trace!("Error on {:?} in {:?}", token, state);
                    self.stats.errors += 1;
                    let err = SyntaxError {
                        state,
                        token,
                        expected: <Data<A> as ParserData>::expected(state),
                    };
                    self.actions.syntax_error(&err);
                    self.error = true;
                    return Ok(());
                }
            }
        }
    }

    fn reduce(&mut self, prod_id: ProdOf<A>) -> Result<(), EngineError> {
        debug_assert!(
            in_range(prod_id, <ProdOf<A> as ParserProdID>::COUNT),
            "production {:?} out of range",
            prod_id
        );
        let reduction = prod_id.reduction();
        let size = prod_id.size();
        if reduction.is_ebnf() && !self.config.ebnf {
            return Err(EngineError::EbnfDisabled {
                prod: prod_id.label(),
            });
        }
        if !reduction.accepts_size(size) {
            return Err(EngineError::BadArity {
                prod: prod_id.label(),
                reduction: reduction.label(),
                size,
            });
        }
        if size > 0 && seq_get_range(&self.stack, size, 0).is_none() {
            return Err(self.underflow(size));
        }

        match reduction {
            Reduction::Action => {
                let value = {
                    let args = ReduceArgs::new(&self.stack, size);
                    self.actions.reduce(prod_id, &args)?
                };
                self.pop_frames(size)?;
                self.goto_push(prod_id.lhs(), value)
            }

            Reduction::Nothing => {
                self.pop_frames(size)?;
                self.goto_push(prod_id.lhs(), A::Value::default())
            }

            Reduction::SeqHead | Reduction::OptNothing | Reduction::OptJust => {
                // The accumulator goes on top of the `size` elements it covers.
                let below = nth_top(&self.stack, size).ok_or_else(|| self.underflow(size + 1))?;
                let next = Self::goto(self.stack.nth(below).state, prod_id.lhs())?;
                self.push_frame(next, A::Value::default(), size);
                Ok(())
            }

            Reduction::SeqTrail => {
                // acc x -> x acc
                self.stack.swap_top_and_second()?;
                self.bump_sequence()
            }

            Reduction::SeqTrail2 => {
                // acc sep x -> acc x sep -> acc x -> x acc
                self.stack.swap_top_and_second()?;
                self.stack.pop(1)?;
                self.stack.swap_top_and_second()?;
                self.bump_sequence()
            }
        }
    }

    fn recover(
        &mut self,
        token: TokenOf<A>,
        value: &A::Value,
        recovery_token: TokenOf<A>,
    ) -> Result<(), EngineError> {
        self.stats.recoveries += 1;
        self.stack.rollback_tmp();
        self.error = false;

        loop {
            match self.stack.top() {
                None => {
                    log::debug!("recovery: no state accepts {:?}", recovery_token);
                    self.stack.rollback_tmp();
                    self.error = true;
                    return Ok(());
                }
                Some(frame) if <Data<A> as ParserData>::handles_error(frame.state) => {
                    log::debug!("recovery: resynchronising in {:?}", frame.state);
                    break;
                }
                Some(_) => self.pop_frames(1)?,
            }
        }

        self.drive(recovery_token, &A::Value::default())?;
        if self.error {
            log::debug!("recovery: {:?} rejected", recovery_token);
            self.stack.rollback_tmp();
            return Ok(());
        }
        self.stack.commit_tmp();

        log::debug!("recovery: re-posting {:?}", token);
        self.drive(token, value)?;
        if !self.error {
            self.stack.commit_tmp();
            return Ok(());
        }
        self.stack.rollback_tmp();
        if token != self.config.eof_token {
            log::debug!("recovery: discarding {:?}", token);
            self.stats.discarded += 1;
            self.error = false;
        } else {
            log::debug!("recovery: end of input cannot be discarded");
        }
        Ok(())
    }

    /// Pushes a frame, turning an overflow into the provider notification
    /// and the sticky error flag.
    fn push_frame(&mut self, state: StateOf<A>, value: A::Value, sequence_length: usize) {
        debug_assert!(
            in_range(state, <StateOf<A> as ParserStateID>::COUNT),
            "state {:?} out of range",
            state
        );
        let frame = StackFrame {
            state,
            value,
            sequence_length,
        };
        if let Err(err) = self.stack.push(frame) {
            log::debug!("{}", err);
            self.actions.stack_overflow();
            self.error = true;
        }
    }

    /// Pops `count` logical elements, each accumulator together with what it
    /// has folded.
    fn pop_frames(&mut self, count: usize) -> Result<(), EngineError> {
        for _ in 0..count {
            let folded = match self.stack.top() {
                Some(frame) => frame.sequence_length,
                None => return Err(self.underflow(1)),
            };
            self.stack.pop(1 + folded)?;
        }
        Ok(())
    }

    fn goto_push(
        &mut self,
        lhs: <Data<A> as ParserData>::NonTermID,
        value: A::Value,
    ) -> Result<(), EngineError> {
        let next = Self::goto(self.top_state()?, lhs)?;
        self.push_frame(next, value, 0);
        Ok(())
    }

    fn goto(
        state: StateOf<A>,
        lhs: <Data<A> as ParserData>::NonTermID,
    ) -> Result<StateOf<A>, EngineError> {
        debug_assert!(
            in_range(lhs, <<Data<A> as ParserData>::NonTermID as ParserNonTermID>::COUNT),
            "nonterminal {:?} out of range",
            lhs
        );
        match <Data<A> as ParserData>::goto(state, lhs) {
            Some(next) => {
                log::trace!("Goto {:?}", next);
                Ok(next)
            }
            None => Err(EngineError::MissingGoto {
                state: state.into(),
                nonterminal: String::from(format!("{:?}", lhs).as_str()),
            }),
        }
    }

    fn bump_sequence(&mut self) -> Result<(), EngineError> {
        match self.stack.top_mut() {
            Some(frame) => {
                frame.sequence_length += 1;
                Ok(())
            }
            None => Err(self.underflow(1)),
        }
    }

    fn top_state(&self) -> Result<StateOf<A>, EngineError> {
        match self.stack.top() {
            Some(frame) => Ok(frame.state),
            None => Err(self.underflow(1)),
        }
    }

    fn underflow(&self, requested: usize) -> EngineError {
        StackError::Underflow {
            requested,
            depth: self.stack.depth(),
        }
        .into()
    }

    fn dump_state(&self, incoming: TokenOf<A>) {
        let gap = self.stack.depth() - self.stack.pending_len();
        let mut output = String::new();
        for (i, frame) in self.stack.iter().enumerate() {
            if i == gap {
                output.push_str("| ");
            }
            output.push_str(&format!("<{:?}> {:?}", frame.state, frame.value));
            if frame.sequence_length > 0 {
                output.push_str(&format!("[{}]", frame.sequence_length));
            }
            output.push_str("  ");
        }
        log::trace!("{}<-  {:?}", output, incoming);
    }
}
