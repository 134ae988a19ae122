//! Implicit type conversion.
//!
//! Icon converts operands on demand: `"3" + 4` is `7`, `12 || 3` is
//! `"123"`. A value that cannot be converted makes the operation fail with
//! a reason naming what was expected and what was found, e.g.
//!
//! ```text
//! numeric expected
//! offending value: &null
//! ```

use std::rc::Rc;

use super::{format_real, Cset, Value};
use crate::Outcome;

/// A value after numeric coercion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Real(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Integer(n) => n as f64,
            Number::Real(r) => r,
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Integer(i) => Value::Integer(i),
            Number::Real(r) => Value::Real(r),
        }
    }
}

/// Two operands coerced to a common numeric type.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NumberPair {
    Integers(i64, i64),
    Reals(f64, f64),
}

/// Failure reporting that `value` could not be used as `what`.
#[cold]
pub(crate) fn expected<T>(what: &str, value: &Value) -> Outcome<T> {
    Outcome::fail_with(format!("{what} expected\noffending value: {}", value.image()))
}

/// Integer, real, or a string that parses as either.
pub fn to_number(value: &Value) -> Outcome<Number> {
    match value {
        Value::Integer(n) => Outcome::Success(Number::Integer(*n)),
        Value::Real(r) => Outcome::Success(Number::Real(*r)),
        Value::String(s) => numeric_text(s, value),
        Value::Cset(c) => numeric_text(c.as_str(), value),
        _ => expected("numeric", value),
    }
}

fn numeric_text(text: &str, value: &Value) -> Outcome<Number> {
    parse_number(text).map_or_else(|| expected("numeric", value), Outcome::Success)
}

/// Coerce both operands; if either is real, both become real.
pub fn to_numbers(left: &Value, right: &Value) -> Outcome<NumberPair> {
    to_number(left).zip(to_number(right)).map(|pair| match pair {
        (Number::Integer(a), Number::Integer(b)) => NumberPair::Integers(a, b),
        (a, b) => NumberPair::Reals(a.as_f64(), b.as_f64()),
    })
}

/// Reals truncate toward zero.
pub fn to_integer(value: &Value) -> Outcome<i64> {
    to_number(value).and_then(|n| match n {
        Number::Integer(i) => Outcome::Success(i),
        Number::Real(r) if r.is_finite() && r.abs() < 9.2e18 => Outcome::Success(r.trunc() as i64),
        Number::Real(_) => expected("integer", value),
    })
}

pub fn to_real(value: &Value) -> Outcome<f64> {
    to_number(value).map(Number::as_f64)
}

pub fn to_string(value: &Value) -> Outcome<Rc<String>> {
    match value {
        Value::String(s) => Outcome::Success(Rc::clone(s)),
        Value::Integer(n) => Outcome::Success(Rc::new(n.to_string())),
        Value::Real(r) => Outcome::Success(Rc::new(format_real(*r))),
        Value::Cset(c) => Outcome::Success(Rc::new(c.as_str().to_string())),
        _ => expected("string", value),
    }
}

pub fn to_cset(value: &Value) -> Outcome<Cset> {
    match value {
        Value::Cset(c) => Outcome::Success(c.clone()),
        _ => to_string(value)
            .cata(|s| Outcome::Success(Cset::new(&s)), |_| expected("cset", value)),
    }
}

/// Parse numeric text the way Icon literals are written, with surrounding
/// whitespace and a leading sign allowed.
///
/// Whether the result is an integer or a real depends on the text, not
/// the value: `"3"` is an integer, `"3.0"` and `"3e0"` are reals.
/// Radix integers (`"16rff"`) are accepted.
pub fn parse_number(text: &str) -> Option<Number> {
    let text = text.trim();
    let (negative, body) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    if body.is_empty() {
        return None;
    }

    if let Some((radix, digits)) = body.split_once(['r', 'R']) {
        let radix: u32 = radix.parse().ok()?;
        if !(2..=36).contains(&radix) || digits.is_empty() {
            return None;
        }
        let n = i64::from_str_radix(digits, radix).ok()?;
        return Some(Number::Integer(if negative { n.checked_neg()? } else { n }));
    }

    if body.bytes().all(|b| b.is_ascii_digit()) {
        let signed = if negative {
            format!("-{body}")
        } else {
            body.to_string()
        };
        // Too large for an integer: fall back to a real.
        return Some(match signed.parse::<i64>() {
            Ok(n) => Number::Integer(n),
            Err(_) => Number::Real(signed.parse().ok()?),
        });
    }

    if !is_real_literal(body) {
        return None;
    }
    let r: f64 = body.parse().ok()?;
    Some(Number::Real(if negative { -r } else { r }))
}

/// `digits[.digits][e[+-]digits]` with at least one mantissa digit.
fn is_real_literal(body: &str) -> bool {
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(at) => (&body[..at], Some(&body[at + 1..])),
        None => (body, None),
    };
    let mut dots = 0;
    let mut digits = 0;
    for b in mantissa.bytes() {
        match b {
            b'.' => dots += 1,
            b'0'..=b'9' => digits += 1,
            _ => return false,
        }
    }
    if dots > 1 || digits == 0 {
        return false;
    }
    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && exp.bytes().all(|b| b.is_ascii_digit())
        }
    }
}
