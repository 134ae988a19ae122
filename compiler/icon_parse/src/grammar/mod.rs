//! Grammar productions, split by syntactic category.
//!
//! - `items`: `global` and `procedure` declarations
//! - `expr`: precedence climbing, prefix operators, calls, subscripts
//! - `primary`: literals, names, bracketed forms, control structures

mod expr;
mod items;
mod primary;
