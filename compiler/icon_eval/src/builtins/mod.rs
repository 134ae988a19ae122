//! Built-in function table.
//!
//! Every built-in receives already-evaluated arguments; missing trailing
//! arguments read as `&null`. Built-ins fail the way Icon operations do:
//! a rejected conversion fails with its reason, an exhausted `read()`
//! fails silently. Names registered without an implementation fail with
//! an "unimplemented" reason instead of aborting the run.

mod number;
mod string;
mod structural;
mod system;

use std::fmt;

use crate::{Environment, EvalResult, Interpreter, Outcome, Value};

/// Native implementation of a built-in.
pub type BuiltinFn = fn(&mut Interpreter<'_>, &[Value]) -> EvalResult;

/// A built-in function value.
#[derive(Copy, Clone)]
pub struct Builtin {
    pub name: &'static str,
    func: Option<BuiltinFn>,
}

impl Builtin {
    const fn native(name: &'static str, func: BuiltinFn) -> Self {
        Builtin {
            name,
            func: Some(func),
        }
    }

    const fn missing(name: &'static str) -> Self {
        Builtin { name, func: None }
    }

    pub fn is_implemented(&self) -> bool {
        self.func.is_some()
    }

    pub fn call(&self, interpreter: &mut Interpreter<'_>, args: &[Value]) -> EvalResult {
        match self.func {
            Some(func) => func(interpreter, args),
            None => Ok(Outcome::fail_with(format!(
                "Unimplemented error: built-in function {}",
                self.name
            ))),
        }
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function {}", self.name)
    }
}

/// Largest string (in bytes) or list (in elements) a built-in will build.
pub(crate) const MAX_BUILT_SIZE: usize = 1 << 28;

/// `size` if a built-in may allocate that much, else a failure.
pub(crate) fn within_limit(size: Option<usize>) -> Outcome<usize> {
    match size {
        Some(size) if size <= MAX_BUILT_SIZE => Outcome::Success(size),
        _ => Outcome::fail_with(format!("result too large\nlimit: {MAX_BUILT_SIZE}")),
    }
}

/// Argument `i`, or `&null` when it was not supplied.
pub(crate) fn arg(args: &[Value], i: usize) -> Value {
    args.get(i).cloned().unwrap_or_default()
}

/// Every built-in, implemented or not.
pub const BUILTINS: &[Builtin] = &[
    // I/O
    Builtin::native("write", system::write),
    Builtin::native("writes", system::writes),
    Builtin::native("read", system::read),
    Builtin::native("stop", system::stop),
    Builtin::native("exit", system::exit),
    // Numeric
    Builtin::native("abs", number::abs),
    Builtin::native("sqrt", number::sqrt),
    Builtin::native("exp", number::exp),
    Builtin::native("log", number::log),
    Builtin::native("sin", number::sin),
    Builtin::native("cos", number::cos),
    Builtin::native("tan", number::tan),
    Builtin::native("asin", number::asin),
    Builtin::native("acos", number::acos),
    Builtin::native("atan", number::atan),
    Builtin::native("dtor", number::dtor),
    Builtin::native("rtod", number::rtod),
    Builtin::native("iand", number::iand),
    Builtin::native("ior", number::ior),
    Builtin::native("ixor", number::ixor),
    Builtin::native("icom", number::icom),
    Builtin::native("ishift", number::ishift),
    // String
    Builtin::native("repl", string::repl),
    Builtin::native("reverse", string::reverse),
    Builtin::native("left", string::left),
    Builtin::native("right", string::right),
    Builtin::native("center", string::center),
    Builtin::native("trim", string::trim),
    Builtin::native("map", string::map),
    // Structural
    Builtin::native("type", structural::type_of),
    Builtin::native("image", structural::image),
    Builtin::native("copy", structural::copy),
    Builtin::native("char", structural::character),
    Builtin::native("ord", structural::ord),
    Builtin::native("integer", structural::integer),
    Builtin::native("real", structural::real),
    Builtin::native("numeric", structural::numeric),
    Builtin::native("string", structural::string),
    Builtin::native("cset", structural::cset),
    Builtin::native("list", structural::list),
    Builtin::native("table", structural::table),
    Builtin::native("insert", structural::insert),
    Builtin::native("delete", structural::delete),
    Builtin::native("member", structural::member),
    Builtin::native("get", structural::get),
    Builtin::native("pop", structural::get),
    Builtin::native("pull", structural::pull),
    Builtin::native("push", structural::push),
    Builtin::native("put", structural::put),
    Builtin::native("sort", structural::sort),
    // String scanning and generators
    Builtin::missing("any"),
    Builtin::missing("bal"),
    Builtin::missing("detab"),
    Builtin::missing("entab"),
    Builtin::missing("find"),
    Builtin::missing("many"),
    Builtin::missing("match"),
    Builtin::missing("move"),
    Builtin::missing("pos"),
    Builtin::missing("tab"),
    Builtin::missing("upto"),
    Builtin::missing("seq"),
    Builtin::missing("set"),
    Builtin::missing("sortf"),
    Builtin::missing("key"),
    // System
    Builtin::missing("chdir"),
    Builtin::missing("close"),
    Builtin::missing("delay"),
    Builtin::missing("display"),
    Builtin::missing("flush"),
    Builtin::missing("function"),
    Builtin::missing("getch"),
    Builtin::missing("getche"),
    Builtin::missing("getenv"),
    Builtin::missing("kbhit"),
    Builtin::missing("open"),
    Builtin::missing("name"),
    Builtin::missing("reads"),
    Builtin::missing("remove"),
    Builtin::missing("rename"),
    Builtin::missing("seek"),
    Builtin::missing("system"),
    Builtin::missing("variable"),
    Builtin::missing("where"),
];

/// Bind every built-in in the global scope.
pub fn register(env: &mut Environment) {
    for builtin in BUILTINS {
        env.define_global(builtin.name, Value::Builtin(*builtin));
    }
}
