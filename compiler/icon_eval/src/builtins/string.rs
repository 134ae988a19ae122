//! String functions: replication, reversal, padding, trimming, mapping.

use std::rc::Rc;

use crate::outcome::succeed;
use crate::value::{to_cset, to_integer, to_string, Cset};
use crate::{EvalResult, Interpreter, Outcome, Value};

use super::{arg, within_limit};

/// Argument `i` as a string, or `default` when omitted.
fn string_or(args: &[Value], i: usize, default: &str) -> Outcome<Rc<String>> {
    match arg(args, i) {
        Value::Null => Outcome::Success(Rc::new(default.to_string())),
        value => to_string(&value),
    }
}

/// A non-negative integer argument.
fn width(args: &[Value], i: usize) -> Outcome<usize> {
    let value = arg(args, i);
    to_integer(&value).and_then(|n| {
        usize::try_from(n).map_or_else(
            |_| {
                Outcome::fail_with(format!(
                    "non-negative integer expected\noffending value: {}",
                    value.image()
                ))
            },
            Outcome::Success,
        )
    })
}

/// `count` characters of `pad` repeated, aligned to the start of `pad`.
fn fill_left(pad: &str, count: usize) -> String {
    pad.chars().cycle().take(count).collect()
}

/// `count` characters of `pad` repeated, aligned so the last character
/// of the fill is the last character of `pad`.
fn fill_right(pad: &[char], count: usize) -> String {
    if pad.is_empty() {
        return String::new();
    }
    let offset = (pad.len() - count % pad.len()) % pad.len();
    pad.iter().cycle().skip(offset).take(count).collect()
}

/// Shared arguments of `left`, `right` and `center`.
fn padding_args(args: &[Value]) -> Outcome<(Vec<char>, usize, Rc<String>)> {
    to_string(&arg(args, 0))
        .zip(width(args, 1).and_then(|n| within_limit(Some(n))))
        .zip(string_or(args, 2, " "))
        .map(|((s, n), pad)| (s.chars().collect(), n, pad))
}

/// `repl(s, i)`: `i` copies of `s`.
pub fn repl(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let (s, n) = succeed!(to_string(&arg(args, 0)).zip(width(args, 1)));
    succeed!(within_limit(s.len().checked_mul(n)));
    Ok(Outcome::Success(Value::string(s.repeat(n))))
}

pub fn reverse(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    Ok(to_string(&arg(args, 0)).map(|s| Value::string(s.chars().rev().collect::<String>())))
}

/// `left(s, i, p)`: `s` at the left of a field of width `i`, padded on
/// the right with `p`, truncated on the right if too long.
pub fn left(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let (chars, n, pad) = succeed!(padding_args(args));
    let mut out: String = chars.iter().take(n).collect();
    let pad: Vec<char> = pad.chars().collect();
    out.push_str(&fill_right(&pad, n.saturating_sub(chars.len())));
    Ok(Outcome::Success(Value::string(out)))
}

/// `right(s, i, p)`: `s` at the right of a field of width `i`, padded on
/// the left with `p`, truncated on the left if too long.
pub fn right(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let (chars, n, pad) = succeed!(padding_args(args));
    let mut out = fill_left(&pad, n.saturating_sub(chars.len()));
    out.extend(chars.iter().skip(chars.len().saturating_sub(n)));
    Ok(Outcome::Success(Value::string(out)))
}

/// `center(s, i, p)`: `s` centred in a field of width `i`. Truncation
/// removes characters from both ends.
pub fn center(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let (chars, n, pad) = succeed!(padding_args(args));
    if chars.len() >= n {
        let start = (chars.len() - n) / 2;
        return Ok(Outcome::Success(Value::string(
            chars[start..start + n].iter().collect::<String>(),
        )));
    }
    let total = n - chars.len();
    let before = total / 2;
    let pad_chars: Vec<char> = pad.chars().collect();
    let mut out = fill_left(&pad, before);
    out.extend(chars.iter());
    out.push_str(&fill_right(&pad_chars, total - before));
    Ok(Outcome::Success(Value::string(out)))
}

/// `trim(s, c)`: `s` without trailing characters in `c` (default blank).
pub fn trim(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let set = match arg(args, 1) {
        Value::Null => Outcome::Success(Cset::new(" ")),
        value => to_cset(&value),
    };
    Ok(to_string(&arg(args, 0))
        .zip(set)
        .map(|(s, set)| Value::string(s.trim_end_matches(|c| set.contains(c)))))
}

/// `map(s, from, to)`: `s` with each character found in `from` replaced
/// by the character at the same position in `to`.
pub fn map(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let (s, (from, to)) = succeed!(to_string(&arg(args, 0))
        .zip(to_string(&arg(args, 1)).zip(to_string(&arg(args, 2)))));
    let from: Vec<char> = from.chars().collect();
    let to: Vec<char> = to.chars().collect();
    if from.len() != to.len() {
        return Ok(Outcome::fail_with(
            "map: second and third arguments differ in length",
        ));
    }
    let mapped = s
        .chars()
        .map(|c| {
            // The last occurrence in `from` wins.
            from.iter()
                .rposition(|&f| f == c)
                .map_or(c, |i| to[i])
        })
        .collect::<String>();
    Ok(Outcome::Success(Value::string(mapped)))
}
