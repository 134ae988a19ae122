//! Syntax tree produced by `icon_parse` and walked by `icon_eval`.

mod expr;
mod items;
mod operators;

pub use expr::{Expr, ExprKind};
pub use items::{Procedure, Program};
pub use operators::{BinaryOp, UnaryOp};
