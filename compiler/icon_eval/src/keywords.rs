//! Keyword values seeded into the global scope.
//!
//! Keywords are ordinary global bindings whose names start with `&`.
//! `&fail` is not among them: the interpreter evaluates it directly.

use std::rc::Rc;

use crate::host::SharedHost;
use crate::value::{Cset, FileValue, LineReader};
use crate::{Environment, Value};

/// Golden ratio, `&phi`.
const PHI: f64 = 1.618_033_988_749_895;

pub fn version() -> String {
    format!("icon-rs {}", env!("CARGO_PKG_VERSION"))
}

/// Bind every keyword in the global scope. `&input` reads through `host`.
pub fn register(env: &mut Environment, host: &SharedHost) {
    let lcase = Cset::range(b'a', b'z');
    let ucase = Cset::range(b'A', b'Z');

    let keywords = [
        ("&null", Value::Null),
        ("&ascii", Value::Cset(Cset::range(0, 127))),
        ("&cset", Value::Cset(Cset::range(0, u8::MAX))),
        ("&digits", Value::Cset(Cset::range(b'0', b'9'))),
        ("&letters", Value::Cset(lcase.union(&ucase))),
        ("&lcase", Value::Cset(lcase)),
        ("&ucase", Value::Cset(ucase)),
        ("&pi", Value::Real(std::f64::consts::PI)),
        ("&e", Value::Real(std::f64::consts::E)),
        ("&phi", Value::Real(PHI)),
        ("&version", Value::string(version())),
        (
            "&input",
            Value::File(FileValue::Input(Rc::new(LineReader::new(host.clone())))),
        ),
        ("&output", Value::File(FileValue::Output)),
        ("&errout", Value::File(FileValue::Errout)),
    ];
    for (name, value) in keywords {
        env.define_global(name, value);
    }
}
