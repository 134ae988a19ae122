//! Evaluator tests that span several modules.
//!
//! Unit tests of a single module sit next to it (`value/tests.rs`,
//! `environment/tests.rs`, ...). The files here drive whole programs
//! through the parser and a buffered host.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

mod coercion_tests;
mod operators_tests;
mod program_tests;

use crate::{buffer_host, run_source, RunError};

/// What one program run left behind.
pub(crate) struct Run {
    pub output: String,
    pub errors: String,
    pub result: Result<(), RunError>,
}

/// Run `source` with `input` as its standard input.
pub(crate) fn run_with_input(source: &str, input: &str) -> Run {
    let host = buffer_host(input);
    let result = run_source(source, host.clone());
    Run {
        output: host.output(),
        errors: host.errors(),
        result,
    }
}

pub(crate) fn run(source: &str) -> Run {
    run_with_input(source, "")
}

/// Output of a program whose `main` body is `body`. The run must succeed.
pub(crate) fn output_of(body: &str) -> String {
    let run = run(&format!("procedure main()\n{body}\nend\n"));
    assert_eq!(run.result, Ok(()), "program failed; output so far: {:?}", run.output);
    run.output
}

/// The error a `main` body ends with.
pub(crate) fn error_of(body: &str) -> RunError {
    run(&format!("procedure main()\n{body}\nend\n"))
        .result
        .unwrap_err()
}
