//! Expression nodes.

use std::fmt;

use super::operators::{BinaryOp, UnaryOp};
use crate::Span;

/// Expression node.
#[derive(Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    pub fn boxed(self) -> Box<Expr> {
        Box::new(self)
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Expression variants.
///
/// Every construct is an expression: control structures produce an outcome
/// like any operator does.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    // Literals
    Integer(i64),
    Real(f64),
    /// `"..."` with escapes already processed.
    Str(String),
    /// `'...'` with escapes already processed; not yet canonicalized.
    Cset(String),
    /// `[a, b, c]`
    List(Vec<Expr>),

    // Names
    Ident(String),
    /// `&name`, stored with its leading `&`.
    Keyword(String),

    /// `( e )`
    Grouping(Box<Expr>),
    /// `{ e1; e2; ... }`
    Compound(Vec<Expr>),

    /// `f(a, , c)`: elided arguments are `None`.
    Call {
        callee: Box<Expr>,
        args: Vec<Option<Expr>>,
    },
    /// `e[i]`
    Subscript {
        target: Box<Expr>,
        index: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `x op:= e`
    AugAssign {
        op: BinaryOp,
        target: Box<Expr>,
        value: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },

    // Control structures
    If {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Option<Box<Expr>>,
    },
    While {
        cond: Box<Expr>,
        body: Option<Box<Expr>>,
    },
    Until {
        cond: Box<Expr>,
        body: Option<Box<Expr>>,
    },
    Repeat(Box<Expr>),
    Not(Box<Expr>),
    Break,
    Next,
    Fail,
    Return(Option<Box<Expr>>),

    /// A construct the parser recognises but the evaluator cannot run
    /// (`every`, `suspend`, `case`, `create`, `to`-`by`).
    Unsupported(&'static str),
}
