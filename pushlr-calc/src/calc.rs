//! # Evaluation
//!
//! [`Evaluator`] is the stock implementation of [`CalcActions`]: it folds
//! every expression to an `i64` as soon as it is reduced, with checked
//! arithmetic, and provides the built-in functions.
//!
//! | Function | Arguments | Result |
//! |----------|-----------|--------|
//! | `abs`    | 1         | absolute value |
//! | `min`    | 1 or more | smallest argument |
//! | `max`    | 1 or more | largest argument |
//! | `sum`    | 1 or more | sum of the arguments |
use crate::CalcError;
use crate::parser::CalcActions;

/// Evaluates statements eagerly.
///
/// # Example
/// ```rust
/// # use pushlr_calc::{CalcActions, Evaluator};
/// let mut eval = Evaluator::default();
/// assert_eq!(eval.add(2, 3).unwrap(), 5);
/// let args = [Ok(4), Ok(-9), Ok(7)];
/// assert_eq!(eval.call("min", args.into_iter()).unwrap(), -9);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl CalcActions for Evaluator {
    fn add(&mut self, lhs: i64, rhs: i64) -> Result<i64, CalcError> {
        lhs.checked_add(rhs).ok_or(CalcError::Overflow)
    }

    fn sub(&mut self, lhs: i64, rhs: i64) -> Result<i64, CalcError> {
        lhs.checked_sub(rhs).ok_or(CalcError::Overflow)
    }

    fn mul(&mut self, lhs: i64, rhs: i64) -> Result<i64, CalcError> {
        lhs.checked_mul(rhs).ok_or(CalcError::Overflow)
    }

    fn div(&mut self, lhs: i64, rhs: i64) -> Result<i64, CalcError> {
        if rhs == 0 {
            return Err(CalcError::DivisionByZero);
        }
        lhs.checked_div(rhs).ok_or(CalcError::Overflow)
    }

    fn neg(&mut self, value: i64) -> Result<i64, CalcError> {
        value.checked_neg().ok_or(CalcError::Overflow)
    }

    fn call<I>(&mut self, name: &str, args: I) -> Result<i64, CalcError>
    where
        I: ExactSizeIterator<Item = Result<i64, CalcError>>,
    {
        let got = args.len();
        let arity = |expected| CalcError::Arity {
            name: name.into(),
            expected,
            got,
        };
        match name {
            "abs" => {
                if got != 1 {
                    return Err(arity("1"));
                }
                let mut args = args;
                match args.next() {
                    Some(x) => x?.checked_abs().ok_or(CalcError::Overflow),
                    None => Err(arity("1")),
                }
            }
            "min" | "max" => {
                let mut best: Option<i64> = None;
                for x in args {
                    let x = x?;
                    best = Some(match best {
                        None => x,
                        Some(b) if name == "min" => b.min(x),
                        Some(b) => b.max(x),
                    });
                }
                best.ok_or_else(|| arity("at least 1"))
            }
            "sum" => {
                if got == 0 {
                    return Err(arity("at least 1"));
                }
                let mut args = args;
                args.try_fold(0i64, |acc, x| acc.checked_add(x?).ok_or(CalcError::Overflow))
            }
            _ => Err(CalcError::UnknownFunction(name.into())),
        }
    }
}
