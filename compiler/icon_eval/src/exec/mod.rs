//! Evaluation helpers the `Interpreter` delegates to.
//!
//! - `control`: conditionals and loops, with the loop signal handling
//!   for `break` and `next`.

pub mod control;
