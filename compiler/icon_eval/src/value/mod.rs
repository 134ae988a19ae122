//! Runtime values.
//!
//! Scalars (`Integer`, `Real`, `String`, `Cset`) have value semantics:
//! assigning a string to two variables and then updating one through
//! `s[i] := c` leaves the other untouched (strings are copy-on-write).
//! Structures (`List`, `Table`) are shared references, so `l2 := l1`
//! aliases the same list, exactly as in Icon.

mod coerce;
mod cset;
mod file;
mod table;

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use icon_ir::Procedure;

use crate::builtins::Builtin;

pub use coerce::{
    parse_number, to_cset, to_integer, to_number, to_numbers, to_real, to_string, Number,
    NumberPair,
};
pub(crate) use coerce::expected;
pub use cset::Cset;
pub use file::{FileValue, LineReader};
pub use table::Table;

/// Shared, mutable list storage.
pub type ListRef = Rc<RefCell<Vec<Value>>>;

/// Shared, mutable table storage.
pub type TableRef = Rc<RefCell<Table>>;

#[derive(Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Integer(i64),
    Real(f64),
    String(Rc<String>),
    Cset(Cset),
    List(ListRef),
    Table(TableRef),
    /// A user procedure. Calls get a fresh frame each time; nothing is
    /// captured.
    Procedure(Rc<Procedure>),
    Builtin(Builtin),
    File(FileValue),
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Rc::new(s.into()))
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Rc::new(RefCell::new(items)))
    }

    /// Empty table whose missing keys read as `default`.
    pub fn table(default: Value) -> Self {
        Value::Table(Rc::new(RefCell::new(Table::new(default))))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Name reported by `type(x)`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::String(_) => "string",
            Value::Cset(_) => "cset",
            Value::List(_) => "list",
            Value::Table(_) => "table",
            Value::Procedure(_) | Value::Builtin(_) => "procedure",
            Value::File(_) => "file",
        }
    }

    /// Identity as tested by `===`: same type and same value, with
    /// structures compared by reference.
    pub fn same(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Real(a), Value::Real(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Cset(a), Value::Cset(b)) => a == b,
            (Value::List(a), Value::List(b)) => Rc::ptr_eq(a, b),
            (Value::Table(a), Value::Table(b)) => Rc::ptr_eq(a, b),
            (Value::Procedure(a), Value::Procedure(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            (Value::File(a), Value::File(b)) => a == b,
            _ => false,
        }
    }

    /// Number of elements, for `*x`. `None` for types without a size.
    pub fn size(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.chars().count()),
            Value::Cset(c) => Some(c.len()),
            Value::List(l) => Some(l.borrow().len()),
            Value::Table(t) => Some(t.borrow().len()),
            _ => None,
        }
    }

    /// Printable representation, as produced by `image(x)`.
    pub fn image(&self) -> String {
        match self {
            Value::Null => "&null".to_string(),
            Value::Integer(n) => n.to_string(),
            Value::Real(r) => format_real(*r),
            Value::String(s) => format!("\"{}\"", escape(s, '"')),
            Value::Cset(c) => format!("'{}'", escape(c.as_str(), '\'')),
            Value::List(l) => format!("list({})", l.borrow().len()),
            Value::Table(t) => format!("table({})", t.borrow().len()),
            Value::Procedure(p) => format!("procedure {}", p.name),
            Value::Builtin(b) => format!("function {}", b.name),
            Value::File(f) => f.name().to_string(),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.image())
    }
}

/// Reals always show a decimal point: `7.0`, not `7`.
pub fn format_real(r: f64) -> String {
    let text = r.to_string();
    if r.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

fn escape(text: &str, quote: char) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out
}

/// Map a 1-based Icon position onto a 0-based index.
///
/// Positive `i` counts from the front. Zero is the last element and
/// negative values count back from it, so `-1` is the second-to-last.
/// Positions that cannot be represented are out of range.
pub fn resolve_index(i: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let idx = if i > 0 {
        i - 1
    } else {
        (len - 1).checked_add(i)?
    };
    if (0..len).contains(&idx) {
        usize::try_from(idx).ok()
    } else {
        None
    }
}

/// Character `i` of `s` as a one-character string.
pub fn char_at(s: &str, i: i64) -> Option<String> {
    let idx = resolve_index(i, s.chars().count())?;
    s.chars().nth(idx).map(String::from)
}

/// `s` with character `i` replaced by `with`, which may be any length.
pub fn replace_char(s: &mut Rc<String>, i: i64, with: &str) -> Option<()> {
    let idx = resolve_index(i, s.chars().count())?;
    let (start, c) = s.char_indices().nth(idx)?;
    Rc::make_mut(s).replace_range(start..start + c.len_utf8(), with);
    Some(())
}

/// Ordering used by `sort`: by type first, then by value.
pub fn sort_order(a: &Value, b: &Value) -> Ordering {
    fn rank(v: &Value) -> u8 {
        match v {
            Value::Null => 0,
            Value::Integer(_) => 1,
            Value::Real(_) => 2,
            Value::String(_) => 3,
            Value::Cset(_) => 4,
            Value::File(_) => 5,
            Value::Procedure(_) | Value::Builtin(_) => 6,
            Value::List(_) => 7,
            Value::Table(_) => 8,
        }
    }

    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => x.cmp(y),
        (Value::Real(x), Value::Real(y)) => x.total_cmp(y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Cset(x), Value::Cset(y)) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}
