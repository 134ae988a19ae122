//! Parser state and token access.

use icon_ir::Span;
use icon_lexer::{Token, TokenKind};

use crate::ParseError;

/// Recursive-descent parser over a token vector.
///
/// Grammar productions live in `grammar/`; this file only holds the
/// cursor and the helpers every production uses.
pub struct Parser<'src> {
    /// Original source, for error context.
    source: &'src str,
    /// Tokens from the lexer, ending in `Eof`.
    tokens: &'src [Token],
    /// Current token index.
    pos: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: &'src [Token]) -> Self {
        Parser {
            source,
            tokens,
            pos: 0,
        }
    }

    // ===== Token access =====

    pub(crate) fn current(&self) -> &Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.pos.min(last)]
    }

    pub(crate) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    pub(crate) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the token just consumed.
    pub(crate) fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(Span::DUMMY, |t| t.span)
    }

    pub(crate) fn at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.at_end() {
            self.pos += 1;
        }
        &self.tokens[self.pos.saturating_sub(1)]
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    /// Consume `kind` if present.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or fail with `Expected <what>, but found "<lexeme>"`.
    pub(crate) fn consume(&mut self, kind: &TokenKind, what: &str) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(self.expected(what))
        }
    }

    pub(crate) fn skip_semicolons(&mut self) {
        while self.eat(&TokenKind::Semicolon) {}
    }

    pub(crate) fn ident(&mut self, what: &str) -> Result<(String, Span), ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            let name = name.clone();
            let span = self.advance().span;
            Ok((name, span))
        } else {
            Err(self.expected(what))
        }
    }

    // ===== Errors =====

    pub(crate) fn expected(&self, what: &str) -> ParseError {
        let token = self.current();
        let found = if matches!(token.kind, TokenKind::Eof) {
            token.kind.describe().to_string()
        } else if token.span.is_empty() {
            // Inserted semicolons have no text.
            "end of line".to_string()
        } else {
            format!("\"{}\"", &self.source[token.span.to_range()])
        };
        self.error_at(format!("Expected {what}, but found {found}"), token.span)
    }

    pub(crate) fn error_at(&self, detail: impl Into<String>, span: Span) -> ParseError {
        ParseError::new(detail, span, self.source)
    }
}
