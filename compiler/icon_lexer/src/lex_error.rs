//! Lexical errors.

use icon_ir::Span;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    #[error("invalid or unexpected token \"{lexeme}\"")]
    Unexpected { lexeme: String, span: Span },

    #[error("unterminated string literal")]
    UnterminatedString { span: Span },

    #[error("malformed numeric literal \"{lexeme}\"")]
    BadNumber { lexeme: String, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            Self::Unexpected { span, .. }
            | Self::UnterminatedString { span }
            | Self::BadNumber { span, .. } => *span,
        }
    }
}
