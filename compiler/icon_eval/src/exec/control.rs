//! Control flow evaluation (`if`, `while`, `until`, `repeat`).
//!
//! Conditions test success, not truth: `if x < 3 then ...` takes the
//! `then` branch because the comparison succeeds. Loops catch `break` and
//! `next`; every other signal passes through to the enclosing procedure.

use icon_ir::Expr;

use crate::{ControlAction, EvalResult, Outcome, Value};

/// What a loop does with a signal raised by its condition or body.
pub enum LoopAction {
    /// Go on with the next iteration.
    Continue,
    /// Leave the loop, which then succeeds with `&null`.
    Break,
    /// Not the loop's business: re-raise it.
    Propagate(ControlAction),
}

/// Classify a signal raised inside a loop.
pub fn to_loop_action(signal: ControlAction) -> LoopAction {
    match signal {
        ControlAction::Break => {
            tracing::trace!("loop break");
            LoopAction::Break
        }
        ControlAction::Next => {
            tracing::trace!("loop next");
            LoopAction::Continue
        }
        other => LoopAction::Propagate(other),
    }
}

/// Which condition outcome keeps a conditional loop going.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopKind {
    /// Repeat while the condition succeeds.
    While,
    /// Repeat while the condition fails.
    Until,
}

/// `if cond then a [else b]`.
///
/// Without an `else`, a failing condition is the result, reason included.
pub fn eval_if<'e, F>(
    cond: &'e Expr,
    then_branch: &'e Expr,
    else_branch: Option<&'e Expr>,
    mut eval_fn: F,
) -> EvalResult
where
    F: FnMut(&'e Expr) -> EvalResult,
{
    match eval_fn(cond)? {
        Outcome::Success(_) => eval_fn(then_branch),
        Outcome::Failure(failure) => match else_branch {
            Some(else_expr) => eval_fn(else_expr),
            None => Ok(Outcome::Failure(failure)),
        },
    }
}

/// `while cond do body` and `until cond do body`.
///
/// The loop produces `&null` however it ends, whether the condition
/// stopped it or a `break` did.
pub fn eval_conditional_loop<'e, F>(
    kind: LoopKind,
    cond: &'e Expr,
    body: Option<&'e Expr>,
    mut eval_fn: F,
) -> EvalResult
where
    F: FnMut(&'e Expr) -> EvalResult,
{
    loop {
        let keep_going = match eval_fn(cond) {
            Ok(outcome) => outcome.is_success() == (kind == LoopKind::While),
            Err(signal) => match to_loop_action(signal) {
                LoopAction::Continue => continue,
                LoopAction::Break => break,
                LoopAction::Propagate(signal) => return Err(signal),
            },
        };
        if !keep_going {
            break;
        }

        let Some(body) = body else { continue };
        if let Err(signal) = eval_fn(body) {
            match to_loop_action(signal) {
                LoopAction::Continue => {}
                LoopAction::Break => break,
                LoopAction::Propagate(signal) => return Err(signal),
            }
        }
    }
    Ok(Outcome::Success(Value::Null))
}

/// `repeat body`: runs until something leaves the loop.
pub fn eval_repeat<'e, F>(body: &'e Expr, mut eval_fn: F) -> EvalResult
where
    F: FnMut(&'e Expr) -> EvalResult,
{
    loop {
        if let Err(signal) = eval_fn(body) {
            match to_loop_action(signal) {
                LoopAction::Continue => {}
                LoopAction::Break => return Ok(Outcome::Success(Value::Null)),
                LoopAction::Propagate(signal) => return Err(signal),
            }
        }
    }
}
