//! Terminal diagnostics for failed runs.
//!
//! Errors that point into the source (syntax errors, fatal evaluation
//! errors with a span) render as an `ariadne` report with the offending
//! text underlined. A runtime failure prints its reason under the
//! `Runtime Error:` header. `exit(n)` prints nothing.

use std::io::{self, Write};

use ariadne::{Config, IndexType, Label, Report, ReportKind, Source};
use icon_eval::RunError;
use icon_ir::Span;

pub struct Reporter<'a> {
    path: &'a str,
    source: &'a str,
    color: bool,
}

impl<'a> Reporter<'a> {
    pub fn new(path: &'a str, source: &'a str, color: bool) -> Self {
        Reporter {
            path,
            source,
            color,
        }
    }

    /// Write `err` to standard error.
    pub fn emit(&self, err: &RunError) {
        let mut stderr = io::stderr().lock();
        if let Err(io_err) = self.write(err, &mut stderr) {
            tracing::warn!(error = %io_err, "could not write diagnostic");
        }
    }

    pub fn write(&self, err: &RunError, out: &mut dyn Write) -> io::Result<()> {
        match err {
            RunError::Syntax(parse) => self.snippet(
                &format!("Parse error at line {}, column {}", parse.line, parse.column),
                parse.span,
                &parse.detail,
                &[],
                out,
            ),
            RunError::Fatal(fatal) => match fatal.span {
                Some(span) => self.snippet(
                    &fatal.kind.to_string(),
                    span,
                    "raised here",
                    &fatal.notes,
                    out,
                ),
                None => {
                    writeln!(out, "Error: {}", fatal.kind)?;
                    for note in &fatal.notes {
                        writeln!(out, "  note: {note}")?;
                    }
                    Ok(())
                }
            },
            RunError::RuntimeFailure(_) => writeln!(out, "{err}"),
            RunError::Exit(_) => Ok(()),
        }
    }

    fn snippet(
        &self,
        message: &str,
        span: Span,
        label: &str,
        notes: &[String],
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let range = self.clamp(span);
        let mut report = Report::build(ReportKind::Error, self.path, range.start)
            .with_message(message)
            .with_config(
                Config::default()
                    .with_color(self.color)
                    .with_index_type(IndexType::Byte),
            )
            .with_label(Label::new((self.path, range)).with_message(label));
        for note in notes {
            report = report.with_note(note);
        }
        report
            .finish()
            .write((self.path, Source::from(self.source)), out)
    }

    /// Byte range of `span`, kept inside the source so the report can
    /// always find a line to underline.
    fn clamp(&self, span: Span) -> std::ops::Range<usize> {
        let len = self.source.len();
        let range = span.to_range();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        start..end
    }
}
