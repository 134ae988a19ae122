//! Icon lexer built on logos.
//!
//! Produces a flat token vector terminated by `Eof`. Newlines are not
//! tokens; instead a line break between a token that can end an expression
//! and one that can begin an expression becomes a `Semicolon`, so
//!
//! ```text
//! x := 1
//! write(x)
//! ```
//!
//! lexes the same as `x := 1; write(x)`.

mod escape;
mod lex_error;
mod raw_token;
mod token;

use icon_ir::Span;
use logos::Logos;

pub use escape::unescape;
pub use lex_error::LexError;
use raw_token::RawToken;
pub use token::{Token, TokenKind};

/// Tokenize a whole source file.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).lex_all()
}

pub struct Lexer<'src> {
    source: &'src str,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer { source }
    }

    /// Lex every token, stopping at the first malformed one.
    pub fn lex_all(&self) -> Result<Vec<Token>, LexError> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut logos = RawToken::lexer(self.source);
        let mut saw_newline = false;

        while let Some(result) = logos.next() {
            let span = Span::from_range(logos.span());
            let slice = logos.slice();

            let raw = match result {
                Ok(raw) => raw,
                Err(()) => return Err(Self::classify_error(slice, span)),
            };

            let kind = match raw {
                RawToken::Newline => {
                    saw_newline = true;
                    continue;
                }
                RawToken::Unterminated => return Err(LexError::UnterminatedString { span }),
                other => Self::convert_token(other, slice),
            };

            if saw_newline {
                let ends = tokens.last().is_some_and(|t| t.kind.ends_expression());
                if ends && kind.begins_expression() {
                    tokens.push(Token::new(TokenKind::Semicolon, Span::point(span.start)));
                }
                saw_newline = false;
            }
            tokens.push(Token::new(kind, span));
        }

        let end = u32::try_from(self.source.len()).unwrap_or(u32::MAX);
        tokens.push(Token::new(TokenKind::Eof, Span::point(end)));
        Ok(tokens)
    }

    fn classify_error(slice: &str, span: Span) -> LexError {
        if slice.starts_with(|c: char| c.is_ascii_digit()) {
            LexError::BadNumber {
                lexeme: slice.to_string(),
                span,
            }
        } else {
            LexError::Unexpected {
                lexeme: slice.to_string(),
                span,
            }
        }
    }

    fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
        match raw {
            // Literals
            RawToken::Int(n) | RawToken::RadixInt(n) => TokenKind::Int(n),
            RawToken::Real(f) => TokenKind::Real(f),
            RawToken::Str => TokenKind::Str(unescape(&slice[1..slice.len() - 1])),
            RawToken::Cset => TokenKind::Cset(unescape(&slice[1..slice.len() - 1])),
            RawToken::Ident => TokenKind::Ident(slice.to_string()),
            RawToken::Keyword => TokenKind::Keyword(slice.to_string()),

            // Reserved words
            RawToken::Break => TokenKind::Break,
            RawToken::By => TokenKind::By,
            RawToken::Case => TokenKind::Case,
            RawToken::Create => TokenKind::Create,
            RawToken::Default => TokenKind::Default,
            RawToken::Do => TokenKind::Do,
            RawToken::Else => TokenKind::Else,
            RawToken::End => TokenKind::End,
            RawToken::Every => TokenKind::Every,
            RawToken::Fail => TokenKind::Fail,
            RawToken::Global => TokenKind::Global,
            RawToken::If => TokenKind::If,
            RawToken::Initial => TokenKind::Initial,
            RawToken::Invocable => TokenKind::Invocable,
            RawToken::Link => TokenKind::Link,
            RawToken::Local => TokenKind::Local,
            RawToken::Next => TokenKind::Next,
            RawToken::Not => TokenKind::Not,
            RawToken::Of => TokenKind::Of,
            RawToken::Procedure => TokenKind::Procedure,
            RawToken::Record => TokenKind::Record,
            RawToken::Repeat => TokenKind::Repeat,
            RawToken::Return => TokenKind::Return,
            RawToken::Static => TokenKind::Static,
            RawToken::Suspend => TokenKind::Suspend,
            RawToken::Then => TokenKind::Then,
            RawToken::To => TokenKind::To,
            RawToken::Until => TokenKind::Until,
            RawToken::While => TokenKind::While,

            // Punctuation
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Colon => TokenKind::Colon,

            // Assignment
            RawToken::Assign => TokenKind::Assign,
            RawToken::Swap => TokenKind::Swap,
            RawToken::RevAssign => TokenKind::RevAssign,
            RawToken::RevSwap => TokenKind::RevSwap,
            RawToken::AugAssign(op) => TokenKind::AugAssign(op),

            // Operators
            RawToken::Plus => TokenKind::Plus,
            RawToken::PlusPlus => TokenKind::PlusPlus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::MinusMinus => TokenKind::MinusMinus,
            RawToken::Star => TokenKind::Star,
            RawToken::StarStar => TokenKind::StarStar,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Percent => TokenKind::Percent,
            RawToken::Caret => TokenKind::Caret,
            RawToken::Backslash => TokenKind::Backslash,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Question => TokenKind::Question,
            RawToken::Tilde => TokenKind::Tilde,
            RawToken::Dot => TokenKind::Dot,
            RawToken::At => TokenKind::At,
            RawToken::Amp => TokenKind::Amp,
            RawToken::Pipe => TokenKind::Pipe,
            RawToken::PipePipe => TokenKind::PipePipe,
            RawToken::PipePipePipe => TokenKind::PipePipePipe,
            RawToken::Eq => TokenKind::Eq,
            RawToken::TildeEq => TokenKind::TildeEq,
            RawToken::Lt => TokenKind::Lt,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::Gt => TokenKind::Gt,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::TildeEqEq => TokenKind::TildeEqEq,
            RawToken::EqEqEq => TokenKind::EqEqEq,
            RawToken::TildeEqEqEq => TokenKind::TildeEqEqEq,
            RawToken::LtLt => TokenKind::LtLt,
            RawToken::LtLtEq => TokenKind::LtLtEq,
            RawToken::GtGt => TokenKind::GtGt,
            RawToken::GtGtEq => TokenKind::GtGtEq,

            // Handled in lex_all; comments never reach here.
            RawToken::Comment | RawToken::Newline | RawToken::Unterminated => TokenKind::Semicolon,
        }
    }
}
