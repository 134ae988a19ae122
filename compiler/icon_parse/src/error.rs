//! Syntax errors with source context.

use icon_ir::{LineIndex, Span};
use icon_lexer::LexError;
use thiserror::Error;

/// A lexical or syntax error. Fatal: the program never starts.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Parse error at line {line}, column {column}\n{detail}")]
pub struct ParseError {
    /// What went wrong, e.g. `Expected ")", but found "end"`.
    pub detail: String,
    pub line: u32,
    pub column: u32,
    pub span: Span,
    /// Surrounding source lines with a caret under the offending column.
    pub context: String,
}

impl ParseError {
    pub fn new(detail: impl Into<String>, span: Span, source: &str) -> Self {
        let pos = LineIndex::new(source).line_col(span.start);
        ParseError {
            detail: detail.into(),
            line: pos.line,
            column: pos.column,
            span,
            context: error_context(source, pos.line, pos.column),
        }
    }

    pub fn from_lex(err: &LexError, source: &str) -> Self {
        Self::new(format!("Syntax error: {err}"), err.span(), source)
    }

    /// Message followed by the context snippet.
    pub fn render(&self) -> String {
        format!("{self}\n\n{}\n", self.context)
    }
}

/// Previous line, offending line, caret line, next line.
fn error_context(source: &str, line: u32, column: u32) -> String {
    let lines: Vec<&str> = source.split('\n').collect();
    let idx = line.saturating_sub(1) as usize;
    let mut out: Vec<String> = Vec::with_capacity(4);

    if let Some(prev) = idx.checked_sub(1).and_then(|i| lines.get(i)) {
        out.push((*prev).to_string());
    }
    out.push(lines.get(idx).copied().unwrap_or_default().to_string());
    out.push(format!("{}^", " ".repeat(column.saturating_sub(1) as usize)));
    if let Some(next) = lines.get(idx + 1) {
        out.push((*next).to_string());
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn context_shows_neighbours_and_caret() {
        let source = "procedure main()\n  write(1 +)\nend";
        let err = ParseError::new("Expected expression, but found \")\"", Span::new(28, 29), source);
        assert_eq!(err.line, 2);
        assert_eq!(err.column, 12);
        assert_eq!(
            err.context,
            "procedure main()\n  write(1 +)\n           ^\nend"
        );
    }

    #[test]
    fn first_line_has_no_previous() {
        let err = ParseError::new("boom", Span::new(0, 1), "x\ny");
        assert_eq!(err.context, "x\n^\ny");
    }

    #[test]
    fn display_names_position() {
        let err = ParseError::new("boom", Span::new(2, 3), "abc");
        assert_eq!(err.to_string(), "Parse error at line 1, column 3\nboom");
    }
}
