//! Top-level declarations.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::expr::Expr;
use crate::Span;

/// `procedure name(params) ... end`
#[derive(Clone, Debug, PartialEq)]
pub struct Procedure {
    pub name: String,
    pub params: Vec<String>,
    pub locals: Vec<String>,
    pub statics: Vec<String>,
    pub initial: Option<Expr>,
    pub body: Vec<Expr>,
    pub span: Span,
}

impl Procedure {
    /// Parameters, `local`s and `static`s all live in the frame scope.
    pub fn declares(&self, name: &str) -> bool {
        self.params.iter().any(|p| p == name)
            || self.locals.iter().any(|l| l == name)
            || self.is_static(name)
    }

    pub fn is_static(&self, name: &str) -> bool {
        self.statics.iter().any(|s| s == name)
    }
}

/// A parsed source file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub procedures: FxHashMap<String, Rc<Procedure>>,
    pub globals: Vec<String>,
}

impl Program {
    pub fn procedure(&self, name: &str) -> Option<&Rc<Procedure>> {
        self.procedures.get(name)
    }
}
