//! Numeric functions.

use crate::value::{to_integer, to_number, to_real, Number};
use crate::{EvalResult, Interpreter, Outcome, Value};

use super::arg;

fn real_fn(args: &[Value], f: impl FnOnce(f64) -> f64) -> EvalResult {
    Ok(to_real(&arg(args, 0)).map(|x| Value::Real(f(x))))
}

/// Real-valued function defined only on part of the number line.
fn partial_real_fn(
    args: &[Value],
    domain: impl FnOnce(f64) -> bool,
    f: impl FnOnce(f64) -> f64,
) -> EvalResult {
    let x = arg(args, 0);
    Ok(to_real(&x).and_then(|r| {
        if domain(r) {
            Outcome::Success(Value::Real(f(r)))
        } else {
            Outcome::fail_with(format!("argument out of range\noffending value: {}", x.image()))
        }
    }))
}

fn integer_fn(args: &[Value], f: impl FnOnce(i64, i64) -> i64) -> EvalResult {
    Ok(to_integer(&arg(args, 0))
        .zip(to_integer(&arg(args, 1)))
        .map(|(a, b)| Value::Integer(f(a, b))))
}

pub fn abs(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    Ok(to_number(&arg(args, 0)).and_then(|n| match n {
        Number::Integer(i) => i.checked_abs().map_or_else(
            || Outcome::fail_with("integer overflow"),
            |i| Outcome::Success(Value::Integer(i)),
        ),
        Number::Real(r) => Outcome::Success(Value::Real(r.abs())),
    }))
}

pub fn sqrt(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    partial_real_fn(args, |x| x >= 0.0, f64::sqrt)
}

pub fn exp(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    real_fn(args, f64::exp)
}

/// `log(x, b)`: logarithm of `x` to base `b`, natural when `b` is omitted.
pub fn log(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let base = arg(args, 1);
    if base.is_null() {
        return partial_real_fn(args, |x| x > 0.0, f64::ln);
    }
    let base = match to_real(&base) {
        Outcome::Success(b) if b > 0.0 && b != 1.0 => b,
        Outcome::Success(_) => {
            return Ok(Outcome::fail_with(format!(
                "argument out of range\noffending value: {}",
                base.image()
            )))
        }
        Outcome::Failure(failure) => return Ok(Outcome::Failure(failure)),
    };
    partial_real_fn(args, |x| x > 0.0, |x| x.log(base))
}

pub fn sin(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    real_fn(args, f64::sin)
}

pub fn cos(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    real_fn(args, f64::cos)
}

pub fn tan(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    real_fn(args, f64::tan)
}

pub fn asin(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    partial_real_fn(args, |x| (-1.0..=1.0).contains(&x), f64::asin)
}

pub fn acos(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    partial_real_fn(args, |x| (-1.0..=1.0).contains(&x), f64::acos)
}

/// `atan(y, x)`: arc tangent of `y / x`, using the signs of both to pick
/// the quadrant. With `x` omitted, plain arc tangent of `y`.
pub fn atan(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let x = arg(args, 1);
    if x.is_null() {
        return real_fn(args, f64::atan);
    }
    Ok(to_real(&arg(args, 0))
        .zip(to_real(&x))
        .map(|(y, x)| Value::Real(y.atan2(x))))
}

pub fn dtor(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    real_fn(args, f64::to_radians)
}

pub fn rtod(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    real_fn(args, f64::to_degrees)
}

pub fn iand(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    integer_fn(args, |a, b| a & b)
}

pub fn ior(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    integer_fn(args, |a, b| a | b)
}

pub fn ixor(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    integer_fn(args, |a, b| a ^ b)
}

pub fn icom(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    Ok(to_integer(&arg(args, 0)).map(|i| Value::Integer(!i)))
}

/// `ishift(i, j)`: `i` shifted left by `j` bits, or right (arithmetic)
/// when `j` is negative.
pub fn ishift(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    integer_fn(args, |i, j| {
        let amount = u32::try_from(j.unsigned_abs()).unwrap_or(u32::MAX);
        if j >= 0 {
            i.checked_shl(amount).unwrap_or(0)
        } else {
            i.checked_shr(amount).unwrap_or(if i < 0 { -1 } else { 0 })
        }
    })
}
