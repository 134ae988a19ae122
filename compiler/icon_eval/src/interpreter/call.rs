//! Procedure calls.

use std::rc::Rc;

use icon_ir::{Expr, ExprKind, Procedure};

use super::Interpreter;
use crate::errors::{not_callable, recursion_limit, stray_control};
use crate::outcome::succeed;
use crate::{ControlAction, EvalResult, Outcome, Value};

impl Interpreter<'_> {
    /// `callee(args)`. The callee and every argument are evaluated, left
    /// to right, before anything is invoked; the first failure among them
    /// is the call's result.
    pub(super) fn eval_call(&mut self, callee: &Expr, args: &[Option<Expr>]) -> EvalResult {
        let function = self.eval(callee)?;
        let values = self.eval_all(args.iter().map(Option::as_ref))?;
        let (function, values) = succeed!(function.zip(values));
        self.apply(&function, &values, callee)
    }

    /// Invoke an already-evaluated callee.
    pub(crate) fn apply(&mut self, function: &Value, args: &[Value], callee: &Expr) -> EvalResult {
        match function {
            Value::Builtin(builtin) => builtin.call(self, args),
            Value::Procedure(procedure) => self.invoke_procedure(procedure, args),
            Value::Integer(i) => Ok(select_argument(*i, args)),
            other => {
                let name = match &callee.kind {
                    ExprKind::Ident(name) => name.clone(),
                    _ => other.image(),
                };
                Err(not_callable(name).into())
            }
        }
    }

    /// Run a user procedure in a fresh frame.
    ///
    /// Parameters without a matching argument are `&null`; extra arguments
    /// are dropped. The `initial` block runs on the first call only.
    pub(crate) fn invoke_procedure(
        &mut self,
        procedure: &Rc<Procedure>,
        args: &[Value],
    ) -> EvalResult {
        if let Some(limit) = self.config.max_call_depth {
            if self.env.depth() >= limit {
                return Err(recursion_limit(limit)
                    .with_note(format!("while calling procedure {}", procedure.name))
                    .into());
            }
        }

        tracing::debug!(procedure = %procedure.name, args = args.len(), "enter");
        let (mut frame, first_call) = self.enter_call(procedure);
        for (i, param) in procedure.params.iter().enumerate() {
            frame
                .env
                .define(param, args.get(i).cloned().unwrap_or_default());
        }

        let result = match frame.run_body(procedure, first_call) {
            // Falling off the end is failure; a failing last statement
            // keeps its reason.
            Ok(Outcome::Success(_)) | Err(ControlAction::Fail) => Ok(Outcome::fail()),
            Ok(failure @ Outcome::Failure(_)) => Ok(failure),
            Err(ControlAction::Return(outcome)) => Ok(outcome),
            Err(signal @ (ControlAction::Break | ControlAction::Next)) => Err(stray_control(
                signal.keyword(),
            )
            .with_note(format!("in procedure {}", procedure.name))
            .into()),
            Err(other) => Err(other),
        };
        drop(frame);

        tracing::debug!(
            procedure = %procedure.name,
            succeeded = matches!(result, Ok(Outcome::Success(_))),
            "exit"
        );
        result
    }

    /// The `initial` block, when due, then the body.
    ///
    /// The body is a fold: each statement sees the outcome of the one
    /// before it, and a call statement following a failure is skipped,
    /// passing that failure on.
    fn run_body(&mut self, procedure: &Procedure, first_call: bool) -> EvalResult {
        if first_call {
            if let Some(initial) = &procedure.initial {
                tracing::debug!(procedure = %procedure.name, "initial block");
                let _ = self.eval(initial)?;
            }
        }

        let mut last = Outcome::Success(Value::Null);
        for statement in &procedure.body {
            last = match (&statement.kind, last) {
                (ExprKind::Call { .. }, failure @ Outcome::Failure(_)) => failure,
                _ => self.eval(statement)?,
            };
        }
        Ok(last)
    }
}

/// `i(e1, ..., en)`: the i-th argument. Negative `i` counts from the end,
/// so `-1` is the last.
fn select_argument(i: i64, args: &[Value]) -> Outcome<Value> {
    let len = args.len() as i64;
    let index = match i {
        0 => return Outcome::fail(),
        i if i > 0 => i - 1,
        i => len + i,
    };
    usize::try_from(index)
        .ok()
        .and_then(|index| args.get(index))
        .cloned()
        .into()
}
