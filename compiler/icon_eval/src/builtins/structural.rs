//! Type conversion, inspection and structure functions.

use std::cell::RefCell;
use std::rc::Rc;

use crate::outcome::succeed;
use crate::value::{
    expected, sort_order, to_cset, to_integer, to_number, to_real, to_string, ListRef, TableRef,
};
use crate::{EvalResult, Interpreter, Outcome, Value};

use super::{arg, within_limit};

fn list_arg(args: &[Value], i: usize) -> Outcome<ListRef> {
    match arg(args, i) {
        Value::List(items) => Outcome::Success(items),
        other => expected("list", &other),
    }
}

fn table_arg(args: &[Value], i: usize) -> Outcome<TableRef> {
    match arg(args, i) {
        Value::Table(table) => Outcome::Success(table),
        other => expected("table", &other),
    }
}

/// `type(x)`: name of the type of `x`.
pub fn type_of(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    Ok(Outcome::Success(Value::string(arg(args, 0).type_name())))
}

pub fn image(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    Ok(Outcome::Success(Value::string(arg(args, 0).image())))
}

/// `copy(x)`: a new list or table with the same elements; any other
/// value is returned as is.
pub fn copy(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let copied = match arg(args, 0) {
        Value::List(items) => Value::list(items.borrow().clone()),
        Value::Table(table) => Value::Table(Rc::new(RefCell::new(table.borrow().clone()))),
        other => other,
    };
    Ok(Outcome::Success(copied))
}

/// `char(i)`: the one-character string with code `i`.
pub fn character(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let value = arg(args, 0);
    Ok(to_integer(&value).and_then(|i| {
        u8::try_from(i).map_or_else(
            |_| expected("character code", &value),
            |code| Outcome::Success(Value::string(char::from(code))),
        )
    }))
}

/// `ord(s)`: the code of the single character in `s`.
pub fn ord(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let value = arg(args, 0);
    Ok(to_string(&value).and_then(|s| {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Outcome::Success(Value::Integer(i64::from(u32::from(c)))),
            _ => expected("one-character string", &value),
        }
    }))
}

// Conversion functions fail silently: `integer("abc")` is an ordinary
// failure for the program to test, not a diagnostic.

pub fn integer(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    Ok(to_integer(&arg(args, 0)).success().map(Value::Integer).into())
}

pub fn real(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    Ok(to_real(&arg(args, 0)).success().map(Value::Real).into())
}

pub fn numeric(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    Ok(to_number(&arg(args, 0)).success().map(Value::from).into())
}

pub fn string(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    Ok(to_string(&arg(args, 0)).success().map(Value::String).into())
}

pub fn cset(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    Ok(to_cset(&arg(args, 0)).success().map(Value::Cset).into())
}

/// `list(i, x)`: a list of `i` copies of `x`.
pub fn list(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let size = match arg(args, 0) {
        Value::Null => 0,
        value => {
            let n = succeed!(to_integer(&value));
            succeed!(usize::try_from(n)
                .map_or_else(|_| expected("non-negative integer", &value), Outcome::Success))
        }
    };
    succeed!(within_limit(Some(size)));
    Ok(Outcome::Success(Value::list(vec![arg(args, 1); size])))
}

/// `table(x)`: an empty table whose default value is `x`.
pub fn table(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    Ok(Outcome::Success(Value::table(arg(args, 0))))
}

/// `insert(T, k, x)`: set `T[k]` to `x`. Produces `T`.
pub fn insert(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let table = succeed!(table_arg(args, 0));
    table.borrow_mut().insert(arg(args, 1), arg(args, 2));
    Ok(Outcome::Success(Value::Table(table)))
}

/// `delete(T, k)`: remove key `k`. Produces `T`.
pub fn delete(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let table = succeed!(table_arg(args, 0));
    table.borrow_mut().remove(&arg(args, 1));
    Ok(Outcome::Success(Value::Table(table)))
}

/// `member(T, k)`: succeeds with `k` if `T` has that key.
pub fn member(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let table = succeed!(table_arg(args, 0));
    let key = arg(args, 1);
    let present = table.borrow().contains(&key);
    Ok(if present {
        Outcome::Success(key)
    } else {
        Outcome::fail()
    })
}

/// `get(L)` / `pop(L)`: remove and produce the first element; fails on an
/// empty list.
pub fn get(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let items = succeed!(list_arg(args, 0));
    let mut items = items.borrow_mut();
    Ok(if items.is_empty() {
        Outcome::fail()
    } else {
        Outcome::Success(items.remove(0))
    })
}

/// `pull(L)`: remove and produce the last element.
pub fn pull(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let items = succeed!(list_arg(args, 0));
    let last = items.borrow_mut().pop();
    Ok(last.into())
}

/// `push(L, x1, ..., xn)`: add each `x` to the front in turn, so `xn`
/// ends up first. Produces `L`.
pub fn push(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let items = succeed!(list_arg(args, 0));
    {
        let mut list = items.borrow_mut();
        for value in args.iter().skip(1) {
            list.insert(0, value.clone());
        }
    }
    Ok(Outcome::Success(Value::List(items)))
}

/// `put(L, x1, ..., xn)`: append each `x`. Produces `L`.
pub fn put(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let items = succeed!(list_arg(args, 0));
    items
        .borrow_mut()
        .extend(args.iter().skip(1).cloned());
    Ok(Outcome::Success(Value::List(items)))
}

/// `sort(X)`: a sorted list of the elements of list `X`, or of `[key,
/// value]` pairs of table `X` ordered by key.
pub fn sort(_: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
    let sorted = match arg(args, 0) {
        Value::List(items) => {
            let mut values = items.borrow().clone();
            values.sort_by(sort_order);
            values
        }
        Value::Table(table) => {
            let mut pairs: Vec<(Value, Value)> = table
                .borrow()
                .entries()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            pairs.sort_by(|a, b| sort_order(&a.0, &b.0));
            pairs
                .into_iter()
                .map(|(k, v)| Value::list(vec![k, v]))
                .collect()
        }
        other => return Ok(expected("list or table", &other)),
    };
    Ok(Outcome::Success(Value::list(sorted)))
}
