//! Binary operators over already-evaluated operands.
//!
//! Operands are coerced on demand. Arithmetic follows the mixed-mode rule:
//! two integers give an integer, anything involving a real gives a real.
//! Comparisons succeed with their right operand, not a boolean.
//!
//! Assignment, `&` and the generator operators need unevaluated operands
//! and are handled by the interpreter itself.

use std::cmp::Ordering;

use icon_ir::BinaryOp;

use crate::errors::{unimplemented_feature, EvalError};
use crate::value::{
    expected, to_cset, to_number, to_numbers, to_string, Number, NumberPair, Value,
};
use crate::Outcome;

/// Outcome of a binary operator. `Err` only for operators that cannot be
/// applied to plain values.
pub type OperatorResult = Result<Outcome<Value>, EvalError>;

#[cold]
fn integer_overflow<T>() -> Outcome<T> {
    Outcome::fail_with("integer overflow")
}

#[cold]
fn division_by_zero<T>() -> Outcome<T> {
    Outcome::fail_with("division by zero")
}

fn integer(result: Option<i64>) -> Outcome<Value> {
    result.map_or_else(integer_overflow, |n| Outcome::Success(Value::Integer(n)))
}

/// Apply `op` to two operand values.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> OperatorResult {
    match op {
        BinaryOp::Add
        | BinaryOp::Sub
        | BinaryOp::Mul
        | BinaryOp::Div
        | BinaryOp::Mod
        | BinaryOp::Pow => Ok(arithmetic(op, left, right)),

        BinaryOp::Union | BinaryOp::Diff | BinaryOp::Inter => Ok(cset_op(op, left, right)),

        BinaryOp::Concat => Ok(to_string(left)
            .zip(to_string(right))
            .map(|(a, b)| Value::string(format!("{a}{b}")))),
        BinaryOp::ListConcat => Ok(list_concat(left, right)),

        BinaryOp::NumEq
        | BinaryOp::NumNe
        | BinaryOp::NumLt
        | BinaryOp::NumLe
        | BinaryOp::NumGt
        | BinaryOp::NumGe => Ok(numeric_compare(op, left, right)),

        BinaryOp::StrEq
        | BinaryOp::StrNe
        | BinaryOp::StrLt
        | BinaryOp::StrLe
        | BinaryOp::StrGt
        | BinaryOp::StrGe => Ok(string_compare(op, left, right)),

        BinaryOp::Same => Ok(relation(left.same(right), right)),
        BinaryOp::NotSame => Ok(relation(!left.same(right), right)),

        BinaryOp::And
        | BinaryOp::Assign
        | BinaryOp::Swap
        | BinaryOp::RevAssign
        | BinaryOp::RevSwap
        | BinaryOp::Alt => Err(unimplemented_feature(format!(
            "operator {} on values",
            op.as_symbol()
        ))),
    }
}

fn relation(holds: bool, right: &Value) -> Outcome<Value> {
    if holds {
        Outcome::Success(right.clone())
    } else {
        Outcome::fail()
    }
}

fn arithmetic(op: BinaryOp, left: &Value, right: &Value) -> Outcome<Value> {
    to_numbers(left, right).and_then(|pair| match pair {
        NumberPair::Integers(a, b) => integer_arithmetic(op, a, b),
        NumberPair::Reals(a, b) => real_arithmetic(op, a, b),
    })
}

fn integer_arithmetic(op: BinaryOp, a: i64, b: i64) -> Outcome<Value> {
    match op {
        BinaryOp::Add => integer(a.checked_add(b)),
        BinaryOp::Sub => integer(a.checked_sub(b)),
        BinaryOp::Mul => integer(a.checked_mul(b)),
        BinaryOp::Div if b == 0 => division_by_zero(),
        BinaryOp::Div => integer(a.checked_div(b)),
        BinaryOp::Mod if b == 0 => division_by_zero(),
        BinaryOp::Mod => integer(a.checked_rem(b)),
        _ => integer_power(a, b),
    }
}

/// Integer `^`. A negative exponent keeps the result integral: it is the
/// truncated reciprocal, so only bases of 1 and -1 give a non-zero answer.
fn integer_power(base: i64, exponent: i64) -> Outcome<Value> {
    let n = match base {
        1 => 1,
        -1 if exponent % 2 == 0 => 1,
        -1 => -1,
        0 if exponent < 0 => return division_by_zero(),
        0 if exponent == 0 => 1,
        0 => 0,
        _ if exponent < 0 => 0,
        _ => {
            return u32::try_from(exponent)
                .ok()
                .and_then(|e| base.checked_pow(e))
                .map_or_else(integer_overflow, |n| Outcome::Success(Value::Integer(n)));
        }
    };
    Outcome::Success(Value::Integer(n))
}

fn real_arithmetic(op: BinaryOp, a: f64, b: f64) -> Outcome<Value> {
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div | BinaryOp::Mod if b == 0.0 => return division_by_zero(),
        BinaryOp::Div => a / b,
        BinaryOp::Mod => a % b,
        _ => a.powf(b),
    };
    Outcome::Success(Value::Real(result))
}

fn ordering_holds(op: BinaryOp, ordering: Ordering) -> bool {
    match op {
        BinaryOp::NumEq | BinaryOp::StrEq => ordering == Ordering::Equal,
        BinaryOp::NumNe | BinaryOp::StrNe => ordering != Ordering::Equal,
        BinaryOp::NumLt | BinaryOp::StrLt => ordering == Ordering::Less,
        BinaryOp::NumLe | BinaryOp::StrLe => ordering != Ordering::Greater,
        BinaryOp::NumGt | BinaryOp::StrGt => ordering == Ordering::Greater,
        _ => ordering != Ordering::Less,
    }
}

/// `=`, `<` and friends. The result is the right operand as a number, so
/// `"5" < 10` produces the integer `10`.
fn numeric_compare(op: BinaryOp, left: &Value, right: &Value) -> Outcome<Value> {
    to_number(left)
        .zip(to_number(right))
        .and_then(|(a, b)| {
            let ordering = match (a, b) {
                (Number::Integer(x), Number::Integer(y)) => Some(x.cmp(&y)),
                _ => a.as_f64().partial_cmp(&b.as_f64()),
            };
            match ordering {
                Some(ordering) if ordering_holds(op, ordering) => Outcome::Success(b.into()),
                _ => Outcome::fail(),
            }
        })
}

/// `==`, `<<` and friends, over the string images of both operands.
fn string_compare(op: BinaryOp, left: &Value, right: &Value) -> Outcome<Value> {
    to_string(left).zip(to_string(right)).and_then(|(a, b)| {
        if ordering_holds(op, a.cmp(&b)) {
            Outcome::Success(Value::String(b))
        } else {
            Outcome::fail()
        }
    })
}

fn cset_op(op: BinaryOp, left: &Value, right: &Value) -> Outcome<Value> {
    to_cset(left).zip(to_cset(right)).map(|(a, b)| {
        Value::Cset(match op {
            BinaryOp::Union => a.union(&b),
            BinaryOp::Diff => a.difference(&b),
            _ => a.intersection(&b),
        })
    })
}

/// `|||`: a new list holding the elements of both.
fn list_concat(left: &Value, right: &Value) -> Outcome<Value> {
    let (Value::List(a), Value::List(b)) = (left, right) else {
        let offending = if matches!(left, Value::List(_)) { right } else { left };
        return expected("list", offending);
    };
    let mut items = a.borrow().clone();
    items.extend(b.borrow().iter().cloned());
    Outcome::Success(Value::list(items))
}

