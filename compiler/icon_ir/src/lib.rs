//! Icon IR - spans and syntax tree.
//!
//! - [`Span`], [`LineIndex`]: byte ranges and their line/column positions
//! - [`ast`]: `Program`, `Procedure`, `Expr` and the operator enums
//!
//! The tree is built once by the parser and never mutated afterwards.
//! Procedures are reference-counted so runtime procedure values can point
//! back at their declaration.

pub mod ast;
mod span;

pub use ast::{BinaryOp, Expr, ExprKind, Procedure, Program, UnaryOp};
pub use span::{LineCol, LineIndex, Span};
