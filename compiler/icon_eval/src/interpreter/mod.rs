//! Tree-walking interpreter.
//!
//! [`Interpreter::eval`] is the single entry point for expressions: it
//! grows the stack when needed, dispatches on the node kind, and stamps
//! the node's span onto any fatal error that does not have one yet.
//!
//! Helper modules:
//!
//! - `call`: procedure invocation, argument evaluation, the body fold
//! - `assign`: assignable places and the `:=` family
//! - `call_guard`: RAII frame cleanup
//! - `builder`: construction and global scope seeding

mod assign;
mod builder;
mod call;
mod call_guard;

pub use builder::InterpreterBuilder;
pub use call_guard::CallGuard;

use icon_ir::{BinaryOp, Expr, ExprKind, Program};
use icon_stack::ensure_sufficient_stack;
use smallvec::SmallVec;

use crate::config::InterpreterConfig;
use crate::errors::{stray_control, unimplemented_feature, RunError};
use crate::exec::control::{eval_conditional_loop, eval_if, eval_repeat, LoopKind};
use crate::host::SharedHost;
use crate::outcome::succeed;
use crate::value::{char_at, resolve_index, to_integer, to_string, Cset};
use crate::{
    evaluate_binary, evaluate_unary, ControlAction, Environment, EvalResult, Outcome, Value,
};

/// Evaluated arguments of one call.
pub type Args = SmallVec<[Value; 4]>;

/// Evaluates one program.
///
/// Each interpreter owns its environment, so separate runs never share
/// globals, statics or `initial` flags.
pub struct Interpreter<'p> {
    pub(crate) program: &'p Program,
    pub(crate) env: Environment,
    pub(crate) host: SharedHost,
    pub(crate) config: InterpreterConfig,
}

impl<'p> Interpreter<'p> {
    pub fn builder(program: &'p Program) -> InterpreterBuilder<'p> {
        InterpreterBuilder::new(program)
    }

    /// Interpreter over the process's standard streams.
    pub fn new(program: &'p Program) -> Self {
        InterpreterBuilder::new(program).build()
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn host(&self) -> &SharedHost {
        &self.host
    }

    /// Invoke `main` with no arguments.
    ///
    /// Falling off the end of `main`, or failing without a reason, is a
    /// normal completion. A failure that carries a reason is reported as a
    /// runtime error.
    pub fn run(&mut self) -> Result<(), RunError> {
        let Some(main) = self.program.procedure("main").cloned() else {
            tracing::debug!("no main procedure");
            return Ok(());
        };

        match self.invoke_procedure(&main, &[]) {
            Ok(Outcome::Success(_)) => Ok(()),
            Ok(Outcome::Failure(failure)) => match failure.reason {
                None => Ok(()),
                Some(reason) => Err(RunError::RuntimeFailure(reason)),
            },
            Err(ControlAction::Exit(0)) => Ok(()),
            Err(ControlAction::Exit(code)) => Err(RunError::Exit(code)),
            Err(ControlAction::Error(err)) => {
                tracing::debug!(error = %err, "fatal error");
                Err(RunError::Fatal(*err))
            }
            Err(signal) => Err(RunError::Fatal(stray_control(signal.keyword()))),
        }
    }

    /// Evaluate an expression.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn eval(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr))
            .map_err(|signal| signal.with_span_if_error(expr.span))
    }

    fn eval_inner(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Integer(n) => Ok(Outcome::Success(Value::Integer(*n))),
            ExprKind::Real(r) => Ok(Outcome::Success(Value::Real(*r))),
            ExprKind::Str(s) => Ok(Outcome::Success(Value::string(s.as_str()))),
            ExprKind::Cset(s) => Ok(Outcome::Success(Value::Cset(Cset::new(s)))),
            ExprKind::List(items) => Ok(self
                .eval_all(items.iter().map(Some))?
                .map(|values| Value::list(values.into_vec()))),

            ExprKind::Ident(name) => Ok(Outcome::Success(self.env.lookup(name))),
            ExprKind::Keyword(name) if name == "&fail" => Ok(Outcome::fail()),
            ExprKind::Keyword(name) => Ok(Outcome::Success(self.env.lookup(name))),

            ExprKind::Grouping(inner) => self.eval(inner),
            ExprKind::Compound(exprs) => self.eval_compound(exprs),

            ExprKind::Call { callee, args } => self.eval_call(callee, args),
            ExprKind::Subscript { target, index } => {
                let target = self.eval(target)?;
                let index = self.eval(index)?;
                let (target, index) = succeed!(target.zip(index));
                Ok(subscript(&target, &index))
            }

            ExprKind::Binary { op, left, right } => self.eval_binary(*op, left, right),
            ExprKind::AugAssign { op, target, value } => self.eval_aug_assign(*op, target, value),
            ExprKind::Unary { op, operand } => {
                let value = succeed!(self.eval(operand)?);
                Ok(evaluate_unary(*op, &value)?)
            }

            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => eval_if(cond, then_branch, else_branch.as_deref(), |e| self.eval(e)),
            ExprKind::While { cond, body } => {
                eval_conditional_loop(LoopKind::While, cond, body.as_deref(), |e| self.eval(e))
            }
            ExprKind::Until { cond, body } => {
                eval_conditional_loop(LoopKind::Until, cond, body.as_deref(), |e| self.eval(e))
            }
            ExprKind::Repeat(body) => eval_repeat(body, |e| self.eval(e)),
            ExprKind::Not(inner) => Ok(match self.eval(inner)? {
                Outcome::Success(_) => Outcome::fail(),
                Outcome::Failure(_) => Outcome::Success(Value::Null),
            }),

            ExprKind::Break => Err(ControlAction::Break),
            ExprKind::Next => Err(ControlAction::Next),
            ExprKind::Fail => Err(ControlAction::Fail),
            ExprKind::Return(None) => Err(ControlAction::Return(Outcome::Success(Value::Null))),
            ExprKind::Return(Some(value)) => {
                let outcome = self.eval(value)?;
                Err(ControlAction::Return(outcome))
            }

            ExprKind::Unsupported(feature) => Err(unimplemented_feature(*feature).into()),
        }
    }

    /// `{ e1; e2; ... }`: every expression runs regardless of the others'
    /// failure; the block's result is the last one's.
    fn eval_compound(&mut self, exprs: &[Expr]) -> EvalResult {
        let mut last = Outcome::Success(Value::Null);
        for expr in exprs {
            last = self.eval(expr)?;
        }
        Ok(last)
    }

    /// Evaluate every expression left to right, keeping the first failure.
    /// Missing expressions (elided arguments) are `&null`.
    pub(crate) fn eval_all<'e>(
        &mut self,
        exprs: impl Iterator<Item = Option<&'e Expr>>,
    ) -> Result<Outcome<Args>, ControlAction> {
        let mut values = Outcome::Success(Args::new());
        for expr in exprs {
            let outcome = match expr {
                Some(expr) => self.eval(expr)?,
                None => Outcome::Success(Value::Null),
            };
            values = values.zip(outcome).map(|(mut values, value)| {
                values.push(value);
                values
            });
        }
        Ok(values)
    }

    fn eval_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr) -> EvalResult {
        match op {
            BinaryOp::And => {
                succeed!(self.eval(left)?);
                self.eval(right)
            }
            BinaryOp::Assign => self.eval_assign(left, right),
            BinaryOp::Swap => self.eval_swap(left, right),
            BinaryOp::RevAssign | BinaryOp::RevSwap | BinaryOp::Alt => Err(unimplemented_feature(
                format!("operator {}", op.as_symbol()),
            )
            .into()),
            _ => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                let (a, b) = succeed!(left.zip(right));
                Ok(evaluate_binary(op, &a, &b)?)
            }
        }
    }
}

/// `x[i]` on a value. Strings and lists use 1-based positions with `0`
/// meaning the last element; tables look the key up.
pub(crate) fn subscript(target: &Value, index: &Value) -> Outcome<Value> {
    match target {
        Value::List(items) => to_integer(index).and_then(|i| {
            let items = items.borrow();
            resolve_index(i, items.len())
                .map(|slot| items[slot].clone())
                .into()
        }),
        Value::Table(table) => Outcome::Success(table.borrow().get(index)),
        _ => to_string(target)
            .zip(to_integer(index))
            .and_then(|(s, i)| char_at(&s, i).map(Value::string).into()),
    }
}
