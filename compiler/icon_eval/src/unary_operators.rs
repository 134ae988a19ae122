//! Prefix operators over an already-evaluated operand.
//!
//! `/x` and `\x` are the null tests: they succeed with the operand (or
//! `&null`) and fail otherwise. The generator and co-expression operators
//! are recognised but not supported.

use icon_ir::UnaryOp;

use crate::errors::unimplemented_feature;
use crate::operators::OperatorResult;
use crate::value::{to_cset, to_number, Number, Value};
use crate::Outcome;

pub fn evaluate_unary(op: UnaryOp, value: &Value) -> OperatorResult {
    let outcome = match op {
        UnaryOp::Neg => to_number(value).and_then(|n| match n {
            Number::Integer(i) => i.checked_neg().map_or_else(
                || Outcome::fail_with("integer overflow"),
                |i| Outcome::Success(Value::Integer(i)),
            ),
            Number::Real(r) => Outcome::Success(Value::Real(-r)),
        }),
        UnaryOp::Plus => to_number(value).map(Value::from),
        UnaryOp::Size => size(value),
        UnaryOp::NonNull if value.is_null() => Outcome::fail(),
        UnaryOp::NonNull | UnaryOp::Deref => Outcome::Success(value.clone()),
        UnaryOp::IsNull if value.is_null() => Outcome::Success(Value::Null),
        UnaryOp::IsNull => Outcome::fail(),
        UnaryOp::Complement => to_cset(value).map(|c| Value::Cset(c.complement())),
        UnaryOp::Bang
        | UnaryOp::Random
        | UnaryOp::Tab
        | UnaryOp::Activate
        | UnaryOp::Refresh => {
            return Err(unimplemented_feature(format!(
                "unary operator {}",
                op.as_symbol()
            )));
        }
    };
    Ok(outcome)
}

/// `*x`: length of a string, cset, list or table.
fn size(value: &Value) -> Outcome<Value> {
    match value.size() {
        Some(n) => Outcome::Success(Value::Integer(n as i64)),
        None => Outcome::fail_with(format!(
            "size undefined for type {}\noffending value: {}",
            value.type_name(),
            value.image()
        )),
    }
}
