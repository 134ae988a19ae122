//! Interpreter configuration.

/// Default limit on nested procedure calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Tunables for one interpreter run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Calls nested deeper than this escalate as a fatal error. `None`
    /// removes the limit.
    pub max_call_depth: Option<usize>,
}

impl InterpreterConfig {
    #[must_use]
    pub fn with_max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }
}
