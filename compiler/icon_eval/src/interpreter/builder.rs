//! `InterpreterBuilder` for creating Interpreter instances.

use icon_ir::Program;

use super::Interpreter;
use crate::config::InterpreterConfig;
use crate::host::{stdio_host, SharedHost};
use crate::{builtins, keywords, Environment, Value};

/// Builder for [`Interpreter`].
///
/// Defaults: the process's standard streams and
/// [`InterpreterConfig::default`].
pub struct InterpreterBuilder<'p> {
    program: &'p Program,
    host: Option<SharedHost>,
    config: InterpreterConfig,
}

impl<'p> InterpreterBuilder<'p> {
    pub fn new(program: &'p Program) -> Self {
        InterpreterBuilder {
            program,
            host: None,
            config: InterpreterConfig::default(),
        }
    }

    /// Route `read`, `write` and friends through `host`.
    #[must_use]
    pub fn host(mut self, host: SharedHost) -> Self {
        self.host = Some(host);
        self
    }

    #[must_use]
    pub fn config(mut self, config: InterpreterConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the interpreter with its global scope seeded: built-in
    /// functions, keywords, declared globals (`&null`) and procedures, in
    /// that order, so a procedure may replace a built-in of the same name.
    pub fn build(self) -> Interpreter<'p> {
        let host = self.host.unwrap_or_else(stdio_host);
        let mut env = Environment::new();

        builtins::register(&mut env);
        keywords::register(&mut env, &host);
        for name in &self.program.globals {
            env.define_global(name, Value::Null);
        }
        for (name, procedure) in &self.program.procedures {
            env.define_global(name, Value::Procedure(procedure.clone()));
        }

        Interpreter {
            program: self.program,
            env,
            host,
            config: self.config,
        }
    }
}
