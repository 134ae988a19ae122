//! Success/failure algebra.
//!
//! Every Icon expression either produces a value or fails. [`Outcome`] is
//! that two-case result. It is plain data: a failing comparison, an
//! exhausted `read()` and a rejected coercion are all `Outcome::Failure`,
//! while genuinely fatal conditions travel separately as
//! [`ControlAction::Error`](crate::ControlAction).
//!
//! The combinators mirror the usual functor/monad/applicative trio:
//!
//! | Combinator | Success(v) | Failure(f) |
//! |------------|------------|------------|
//! | `map(g)` | `Success(g(v))` | `Failure(f)` |
//! | `and_then(g)` | `g(v)` | `Failure(f)` |
//! | `ap(o)` | `o.map(v)` | `Failure(f)` |
//! | `cata(s, g)` | `s(v)` | `g(f)` |

/// A failed evaluation, optionally saying why.
///
/// Most failures carry no reason (`1 > 2` simply fails). Coercion
/// failures carry a diagnostic that is reported if it escapes `main`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Failure {
    pub reason: Option<String>,
}

impl Failure {
    /// A failure with no diagnostic.
    pub const fn silent() -> Self {
        Failure { reason: None }
    }

    pub fn because(reason: impl Into<String>) -> Self {
        Failure {
            reason: Some(reason.into()),
        }
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

/// Result of evaluating an Icon expression.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum Outcome<T> {
    Success(T),
    Failure(Failure),
}

impl<T> Outcome<T> {
    /// Fail without a reason.
    pub const fn fail() -> Self {
        Outcome::Failure(Failure::silent())
    }

    /// Fail with a diagnostic.
    pub fn fail_with(reason: impl Into<String>) -> Self {
        Outcome::Failure(Failure::because(reason))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Transform the success value; failures pass through untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(v) => Outcome::Success(f(v)),
            Outcome::Failure(fail) => Outcome::Failure(fail),
        }
    }

    /// Sequence a dependent computation that may itself fail.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Outcome::Success(v) => f(v),
            Outcome::Failure(fail) => Outcome::Failure(fail),
        }
    }

    /// Pair two independent outcomes. The first failure wins.
    pub fn zip<U>(self, other: Outcome<U>) -> Outcome<(T, U)> {
        self.map(|a| move |b: U| (a, b)).ap(other)
    }

    /// Handle both cases explicitly.
    pub fn cata<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(Failure) -> R,
    ) -> R {
        match self {
            Outcome::Success(v) => on_success(v),
            Outcome::Failure(fail) => on_failure(fail),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Success(v) => Outcome::Success(v),
            Outcome::Failure(fail) => Outcome::Failure(fail.clone()),
        }
    }

    /// The success value, discarding any failure.
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(v) => Some(v),
            Outcome::Failure(_) => None,
        }
    }
}

impl<F> Outcome<F> {
    /// Apply a wrapped function to a wrapped argument.
    ///
    /// If `self` is a failure it is returned verbatim; otherwise `arg`'s
    /// failure, if any, is returned verbatim.
    pub fn ap<U, V>(self, arg: Outcome<U>) -> Outcome<V>
    where
        F: FnOnce(U) -> V,
    {
        match self {
            Outcome::Success(f) => arg.map(f),
            Outcome::Failure(fail) => Outcome::Failure(fail),
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(opt: Option<T>) -> Self {
        opt.map_or_else(Outcome::fail, Outcome::Success)
    }
}

/// Unwrap a success, or return the failure from the enclosing function.
///
/// The enclosing function must return `Result<Outcome<_>, _>`.
macro_rules! succeed {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(failure) => {
                return Ok($crate::Outcome::Failure(failure));
            }
        }
    };
}

pub(crate) use succeed;
