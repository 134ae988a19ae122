//! Variable storage: the global scope, call frames, statics and `initial`
//! bookkeeping.
//!
//! Every call gets a fresh frame scope whose parent is the global scope,
//! never the caller's frame. Names resolve as follows:
//!
//! 1. A parameter, `local` or `static` of the running procedure lives in
//!    the frame.
//! 2. Any other name that the global scope already binds is that global.
//! 3. Anything else is created in the frame on first use.
//!
//! Statics and the "initial block has run" flags are keyed by procedure
//! name and outlive every frame. A static is never copied into a frame:
//! every activation, however deeply nested, reads and writes the one
//! stored value.

mod scope;

use std::rc::Rc;

use icon_ir::Procedure;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::Value;

pub use scope::{LocalScope, Scope};

struct CallFrame {
    procedure: Rc<Procedure>,
    scope: LocalScope<Scope>,
}

pub struct Environment {
    global: LocalScope<Scope>,
    frames: Vec<CallFrame>,
    /// Procedure name -> static name -> last stored value.
    statics: FxHashMap<String, FxHashMap<String, Value>>,
    /// Procedures whose `initial` block has already run.
    initials: FxHashSet<String>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            global: LocalScope::new(Scope::new()),
            frames: Vec::new(),
            statics: FxHashMap::default(),
            initials: FxHashSet::default(),
        }
    }

    /// Bind a name in the global scope.
    pub fn define_global(&mut self, name: &str, value: Value) {
        self.global.borrow_mut().define(name, value);
    }

    /// Enter `procedure`: push a frame with its locals bound to `&null`.
    ///
    /// Returns `true` exactly once per procedure: the first time it is
    /// entered, when its `initial` block must run.
    pub fn push_call(&mut self, procedure: &Rc<Procedure>) -> bool {
        let mut scope = Scope::with_parent(self.global.clone());
        for name in &procedure.locals {
            scope.define(name, Value::Null);
        }

        self.frames.push(CallFrame {
            procedure: Rc::clone(procedure),
            scope: LocalScope::new(scope),
        });
        self.initials.insert(procedure.name.clone())
    }

    /// Leave the current procedure, discarding its frame.
    pub fn pop_call(&mut self) {
        self.frames.pop();
    }

    /// Number of active procedure calls.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn current_procedure(&self) -> Option<&Rc<Procedure>> {
        self.frames.last().map(|frame| &frame.procedure)
    }

    /// Procedure whose static `name` is, when the running procedure
    /// declares it static.
    fn static_owner(&self, name: &str) -> Option<&str> {
        self.frames
            .last()
            .filter(|frame| frame.procedure.is_static(name))
            .map(|frame| frame.procedure.name.as_str())
    }

    /// Scope that `name` resolves to from the current frame.
    fn target(&self, name: &str) -> &LocalScope<Scope> {
        match self.frames.last() {
            Some(frame)
                if frame.procedure.declares(name) || !self.global.borrow().contains(name) =>
            {
                &frame.scope
            }
            _ => &self.global,
        }
    }

    /// Current value of `name`. A name bound nowhere becomes `&null` in the
    /// scope that looked for it. A static never assigned reads as `&null`.
    pub fn lookup(&self, name: &str) -> Value {
        if let Some(owner) = self.static_owner(name) {
            return self
                .statics
                .get(owner)
                .and_then(|values| values.get(name))
                .cloned()
                .unwrap_or_default();
        }
        self.target(name).borrow_mut().lookup(name)
    }

    /// Assign `name`, returning the stored value.
    pub fn define(&mut self, name: &str, value: Value) -> Value {
        if let Some(owner) = self.static_owner(name) {
            let owner = owner.to_string();
            self.statics
                .entry(owner)
                .or_default()
                .insert(name.to_string(), value.clone());
            return value;
        }
        self.target(name).borrow_mut().define(name, value)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
