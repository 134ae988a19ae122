//! Icon Eval - goal-directed evaluator for Icon programs.
//!
//! Every expression either succeeds with a value or fails. The evaluator
//! threads that outcome through the tree instead of using booleans.
//!
//! # Architecture
//!
//! - [`Outcome`]: the success/failure algebra every expression returns
//! - [`Value`]: runtime values, with coercions in [`value`]
//! - [`Environment`]: global scope, call frames, statics
//! - [`evaluate_binary`] / [`evaluate_unary`]: operators on values
//! - [`BUILTINS`]: the built-in function table
//! - [`Interpreter`]: the tree walker and procedure calls
//!
//! Fatal conditions (unimplemented constructs, invalid assignment
//! targets, runaway recursion) travel as [`ControlAction::Error`] and end
//! the run with [`RunError::Fatal`].

mod builtins;
mod config;
mod environment;
pub mod errors;
pub mod exec;
pub mod host;
pub mod interpreter;
mod keywords;
mod operators;
mod outcome;
mod unary_operators;
pub mod value;

pub use builtins::{Builtin, BuiltinFn, BUILTINS};
pub use config::{InterpreterConfig, DEFAULT_MAX_CALL_DEPTH};
pub use environment::{Environment, LocalScope, Scope};
pub use errors::{ControlAction, EvalError, EvalErrorKind, EvalResult, RunError};
pub use host::{buffer_host, silent_host, stdio_host, HostIo, SharedHost};
pub use interpreter::{CallGuard, Interpreter, InterpreterBuilder};
pub use keywords::version;
pub use operators::{evaluate_binary, OperatorResult};
pub use outcome::{Failure, Outcome};
pub use unary_operators::evaluate_unary;
pub use value::Value;

/// Parse and run `source` with `host` as its standard streams.
pub fn run_source(source: &str, host: SharedHost) -> Result<(), RunError> {
    let program = icon_parse::parse(source)?;
    run_program(&program, host, InterpreterConfig::default())
}

/// Run an already-parsed program.
pub fn run_program(
    program: &icon_ir::Program,
    host: SharedHost,
    config: InterpreterConfig,
) -> Result<(), RunError> {
    Interpreter::builder(program)
        .host(host)
        .config(config)
        .build()
        .run()
}

#[cfg(test)]
mod tests;
