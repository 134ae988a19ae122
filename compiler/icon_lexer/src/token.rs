//! Token types produced by the lexer.

use std::fmt;

use icon_ir::{BinaryOp, Span};

/// A token with its span in the source.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // === Literals ===
    Int(i64),
    Real(f64),
    /// String literal contents, escapes processed.
    Str(String),
    /// Cset literal contents, escapes processed.
    Cset(String),

    Ident(String),
    /// `&name`, including the ampersand.
    Keyword(String),

    // === Reserved words ===
    Break,
    By,
    Case,
    Create,
    Default,
    Do,
    Else,
    End,
    Every,
    Fail,
    Global,
    If,
    Initial,
    Invocable,
    Link,
    Local,
    Next,
    Not,
    Of,
    Procedure,
    Record,
    Repeat,
    Return,
    Static,
    Suspend,
    Then,
    To,
    Until,
    While,

    // === Punctuation ===
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    /// Written `;` or inserted at a line break.
    Semicolon,
    Colon,

    // === Assignment ===
    Assign,
    Swap,
    RevAssign,
    RevSwap,
    AugAssign(BinaryOp),

    // === Operators ===
    Plus,
    PlusPlus,
    Minus,
    MinusMinus,
    Star,
    StarStar,
    Slash,
    Percent,
    Caret,
    Backslash,
    Bang,
    Question,
    Tilde,
    Dot,
    At,
    Amp,
    Pipe,
    PipePipe,
    PipePipePipe,
    Eq,
    TildeEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    EqEq,
    TildeEqEq,
    EqEqEq,
    TildeEqEqEq,
    LtLt,
    LtLtEq,
    GtGt,
    GtGtEq,

    Eof,
}

impl TokenKind {
    /// Can this token end an expression? Used for semicolon insertion.
    pub fn ends_expression(&self) -> bool {
        matches!(
            self,
            Self::Int(_)
                | Self::Real(_)
                | Self::Str(_)
                | Self::Cset(_)
                | Self::Ident(_)
                | Self::Keyword(_)
                | Self::RParen
                | Self::RBracket
                | Self::RBrace
                | Self::Break
                | Self::End
                | Self::Fail
                | Self::Next
                | Self::Return
        )
    }

    /// Can this token begin an expression? Used for semicolon insertion.
    pub fn begins_expression(&self) -> bool {
        matches!(
            self,
            Self::Int(_)
                | Self::Real(_)
                | Self::Str(_)
                | Self::Cset(_)
                | Self::Ident(_)
                | Self::Keyword(_)
                | Self::LParen
                | Self::LBracket
                | Self::LBrace
                | Self::Plus
                | Self::PlusPlus
                | Self::Minus
                | Self::MinusMinus
                | Self::Star
                | Self::StarStar
                | Self::Slash
                | Self::Backslash
                | Self::Bang
                | Self::Question
                | Self::Tilde
                | Self::Dot
                | Self::At
                | Self::Caret
                | Self::Eq
                | Self::Break
                | Self::Case
                | Self::Create
                | Self::Every
                | Self::Fail
                | Self::If
                | Self::Next
                | Self::Not
                | Self::Repeat
                | Self::Return
                | Self::Suspend
                | Self::Until
                | Self::While
        )
    }

    /// Short description for "expected X, but found Y" messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer literal",
            Self::Real(_) => "real literal",
            Self::Str(_) => "string literal",
            Self::Cset(_) => "cset literal",
            Self::Ident(_) => "identifier",
            Self::Keyword(_) => "keyword",
            Self::Semicolon => "`;`",
            Self::Eof => "end of file",
            _ => "token",
        }
    }
}
