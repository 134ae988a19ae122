//! Icon tables: maps from any value to any value, with a default.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::{Cset, FileValue, Value};

/// Hashable identity of a table key.
///
/// Scalars hash by value (`1`, `1.0` and `"1"` are three different keys);
/// structures hash by reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Key {
    Null,
    Integer(i64),
    Real(u64),
    String(String),
    Cset(Cset),
    Ref(usize),
    Named(&'static str),
}

impl Key {
    fn of(value: &Value) -> Key {
        match value {
            Value::Null => Key::Null,
            Value::Integer(n) => Key::Integer(*n),
            Value::Real(r) => Key::Real(r.to_bits()),
            Value::String(s) => Key::String(s.to_string()),
            Value::Cset(c) => Key::Cset(c.clone()),
            Value::List(l) => Key::Ref(Rc::as_ptr(l) as usize),
            Value::Table(t) => Key::Ref(Rc::as_ptr(t) as usize),
            Value::Procedure(p) => Key::Ref(Rc::as_ptr(p) as usize),
            Value::File(FileValue::Input(r)) => Key::Ref(Rc::as_ptr(r) as usize),
            Value::Builtin(b) => Key::Named(b.name),
            Value::File(f) => Key::Named(f.name()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    entries: FxHashMap<Key, (Value, Value)>,
    default: Value,
}

impl Table {
    pub fn new(default: Value) -> Self {
        Table {
            entries: FxHashMap::default(),
            default,
        }
    }

    /// Value stored under `key`, or the table's default.
    pub fn get(&self, key: &Value) -> Value {
        self.entries
            .get(&Key::of(key))
            .map_or_else(|| self.default.clone(), |(_, v)| v.clone())
    }

    pub fn insert(&mut self, key: Value, value: Value) {
        self.entries.insert(Key::of(&key), (key, value));
    }

    pub fn remove(&mut self, key: &Value) {
        self.entries.remove(&Key::of(key));
    }

    pub fn contains(&self, key: &Value) -> bool {
        self.entries.contains_key(&Key::of(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key/value pairs in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.values().map(|(k, v)| (k, v))
    }
}
