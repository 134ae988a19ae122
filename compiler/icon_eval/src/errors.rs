//! Fatal errors and evaluator control signals.
//!
//! Two channels leave an expression:
//!
//! - `Ok(Outcome)`: the expression succeeded or failed. Failure is data.
//! - `Err(ControlAction)`: a non-local exit (`break`, `next`, `return`,
//!   `fail`, `exit()`) or a fatal error. `?` carries these past every
//!   construct that does not handle them.
//!
//! Error values are built by the `#[cold]` factory functions at the bottom
//! of this file so message wording lives in one place.

use icon_ir::Span;
use icon_parse::ParseError;
use thiserror::Error;

use crate::{Outcome, Value};

/// Result of evaluating one expression.
pub type EvalResult = Result<Outcome<Value>, ControlAction>;

/// What went wrong, without location.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    /// A construct the evaluator recognises but cannot run.
    #[error("Unimplemented error: {feature}")]
    Unimplemented { feature: String },

    /// Invocation of a value that is neither a procedure, a built-in nor
    /// an integer.
    #[error("Unimplemented procedure call to {name}")]
    NotCallable { name: String },

    #[error("invalid assignment target: {target}")]
    InvalidAssignment { target: String },

    /// `break`/`next` that escaped every loop.
    #[error("`{keyword}` outside of a loop")]
    StrayControl { keyword: &'static str },

    #[error("maximum call depth exceeded (limit: {depth})")]
    RecursionLimit { depth: usize },

    #[error("I/O error: {message}")]
    Io { message: String },
}

/// A fatal evaluation error: aborts the whole run.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Innermost expression being evaluated when the error arose.
    pub span: Option<Span>,
    /// Extra context, e.g. the procedure that was running.
    pub notes: Vec<String>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            span: None,
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// Non-local exits and fatal errors, carried in `Err`.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    /// Leave the innermost loop; the loop produces `&null`.
    Break,
    /// Start the innermost loop's next iteration.
    Next,
    /// Leave the current procedure with this outcome.
    Return(Outcome<Value>),
    /// Leave the current procedure, failing.
    Fail,
    /// `exit(n)` or `stop(...)`: terminate the program.
    Exit(i32),
    Error(Box<EvalError>),
}

impl ControlAction {
    /// Attach a span to an error that doesn't have one yet.
    #[must_use]
    pub fn with_span_if_error(self, span: Span) -> Self {
        match self {
            ControlAction::Error(mut err) if err.span.is_none() => {
                err.span = Some(span);
                ControlAction::Error(err)
            }
            other => other,
        }
    }

    /// Keyword naming a loop signal, for diagnostics.
    pub fn keyword(&self) -> &'static str {
        match self {
            ControlAction::Break => "break",
            ControlAction::Next => "next",
            ControlAction::Return(_) => "return",
            ControlAction::Fail => "fail",
            ControlAction::Exit(_) => "exit",
            ControlAction::Error(_) => "error",
        }
    }
}

impl From<EvalError> for ControlAction {
    fn from(err: EvalError) -> Self {
        ControlAction::Error(Box::new(err))
    }
}

/// Why a whole run did not complete normally.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RunError {
    /// The source did not parse; nothing ran.
    #[error(transparent)]
    Syntax(#[from] ParseError),

    /// A fatal error escaped evaluation.
    #[error("{0}")]
    Fatal(EvalError),

    /// `main` failed with a reason attached.
    #[error("Runtime Error:\n{0}")]
    RuntimeFailure(String),

    /// `exit(n)` or `stop()` with a non-zero status.
    #[error("exited with status {0}")]
    Exit(i32),
}

impl RunError {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Exit(code) => *code,
            RunError::Syntax(_) | RunError::Fatal(_) | RunError::RuntimeFailure(_) => 1,
        }
    }
}

// Factories

#[cold]
pub fn unimplemented_feature(feature: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::Unimplemented {
        feature: feature.into(),
    })
}

#[cold]
pub fn not_callable(name: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::NotCallable { name: name.into() })
}

#[cold]
pub fn invalid_assignment(target: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidAssignment {
        target: target.into(),
    })
}

#[cold]
pub fn stray_control(keyword: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::StrayControl { keyword })
}

#[cold]
pub fn recursion_limit(depth: usize) -> EvalError {
    EvalError::new(EvalErrorKind::RecursionLimit { depth })
}

#[cold]
pub fn io_error(err: &std::io::Error) -> EvalError {
    EvalError::new(EvalErrorKind::Io {
        message: err.to_string(),
    })
}
