//! RAII frame cleanup for procedure calls.
//!
//! [`CallGuard`] holds `&mut Interpreter` and derefs to it, so the body of
//! a call is evaluated through the guard. Dropping the guard pops the call
//! frame on every exit path: normal completion, `return`, `fail`, a fatal
//! error carried by `?`, or unwinding.

use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use icon_ir::Procedure;

use super::Interpreter;

pub struct CallGuard<'guard, 'p> {
    interpreter: &'guard mut Interpreter<'p>,
}

impl Drop for CallGuard<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_call();
    }
}

impl<'p> Deref for CallGuard<'_, 'p> {
    type Target = Interpreter<'p>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for CallGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'p> Interpreter<'p> {
    /// Push a frame for `procedure`, returning the guard that pops it and
    /// whether this is the procedure's first call.
    pub fn enter_call(&mut self, procedure: &Rc<Procedure>) -> (CallGuard<'_, 'p>, bool) {
        let first_call = self.env.push_call(procedure);
        (CallGuard { interpreter: self }, first_call)
    }
}
