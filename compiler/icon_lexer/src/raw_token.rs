//! Raw tokens recognised by logos, before escape processing.

use icon_ir::BinaryOp;
use logos::{Lexer, Logos};

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\f]+")]
pub(crate) enum RawToken {
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,

    #[token("\n")]
    Newline,

    // === Reserved words ===
    #[token("break")]
    Break,
    #[token("by")]
    By,
    #[token("case")]
    Case,
    #[token("create")]
    Create,
    #[token("default")]
    Default,
    #[token("do")]
    Do,
    #[token("else")]
    Else,
    #[token("end")]
    End,
    #[token("every")]
    Every,
    #[token("fail")]
    Fail,
    #[token("global")]
    Global,
    #[token("if")]
    If,
    #[token("initial")]
    Initial,
    #[token("invocable")]
    Invocable,
    #[token("link")]
    Link,
    #[token("local")]
    Local,
    #[token("next")]
    Next,
    #[token("not")]
    Not,
    #[token("of")]
    Of,
    #[token("procedure")]
    Procedure,
    #[token("record")]
    Record,
    #[token("repeat")]
    Repeat,
    #[token("return")]
    Return,
    #[token("static")]
    Static,
    #[token("suspend")]
    Suspend,
    #[token("then")]
    Then,
    #[token("to")]
    To,
    #[token("until")]
    Until,
    #[token("while")]
    While,

    // === Punctuation ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,

    // === Assignment ===
    #[token(":=")]
    Assign,
    #[token(":=:")]
    Swap,
    #[token("<-")]
    RevAssign,
    #[token("<->")]
    RevSwap,
    #[regex(
        r"(\+|-|\*|/|%|\^|\+\+|--|\*\*|\|\||\|\|\||=|~=|<|<=|>|>=|==|~==|<<|<<=|>>|>>=|===|~===):=",
        augmented_op
    )]
    AugAssign(BinaryOp),

    // === Operators ===
    #[token("+")]
    Plus,
    #[token("++")]
    PlusPlus,
    #[token("-")]
    Minus,
    #[token("--")]
    MinusMinus,
    #[token("*")]
    Star,
    #[token("**")]
    StarStar,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("\\")]
    Backslash,
    #[token("!")]
    Bang,
    #[token("?")]
    Question,
    #[token("~")]
    Tilde,
    #[token(".")]
    Dot,
    #[token("@")]
    At,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("||")]
    PipePipe,
    #[token("|||")]
    PipePipePipe,
    #[token("=")]
    Eq,
    #[token("~=")]
    TildeEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("==")]
    EqEq,
    #[token("~==")]
    TildeEqEq,
    #[token("===")]
    EqEqEq,
    #[token("~===")]
    TildeEqEqEq,
    #[token("<<")]
    LtLt,
    #[token("<<=")]
    LtLtEq,
    #[token(">>")]
    GtGt,
    #[token(">>=")]
    GtGtEq,

    // === Literals ===
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),

    #[regex(r"[0-9]+[rR][0-9a-zA-Z]+", radix_int)]
    RadixInt(i64),

    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Real(f64),

    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    Str,

    #[regex(r"'([^'\\\n]|\\[^\n])*'")]
    Cset,

    #[regex(r#""([^"\\\n]|\\[^\n])*"#)]
    #[regex(r"'([^'\\\n]|\\[^\n])*")]
    Unterminated,

    #[regex(r"&[a-zA-Z_][a-zA-Z0-9_]*")]
    Keyword,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// `NrDIGITS`, with `2 <= N <= 36`.
fn radix_int(lex: &mut Lexer<'_, RawToken>) -> Option<i64> {
    let slice = lex.slice();
    let split = slice.find(['r', 'R'])?;
    let radix: u32 = slice[..split].parse().ok()?;
    if !(2..=36).contains(&radix) {
        return None;
    }
    i64::from_str_radix(&slice[split + 1..], radix).ok()
}

fn augmented_op(lex: &mut Lexer<'_, RawToken>) -> Option<BinaryOp> {
    let slice = lex.slice();
    let op = &slice[..slice.len() - 2];
    Some(match op {
        "+" => BinaryOp::Add,
        "-" => BinaryOp::Sub,
        "*" => BinaryOp::Mul,
        "/" => BinaryOp::Div,
        "%" => BinaryOp::Mod,
        "^" => BinaryOp::Pow,
        "++" => BinaryOp::Union,
        "--" => BinaryOp::Diff,
        "**" => BinaryOp::Inter,
        "||" => BinaryOp::Concat,
        "|||" => BinaryOp::ListConcat,
        "=" => BinaryOp::NumEq,
        "~=" => BinaryOp::NumNe,
        "<" => BinaryOp::NumLt,
        "<=" => BinaryOp::NumLe,
        ">" => BinaryOp::NumGt,
        ">=" => BinaryOp::NumGe,
        "==" => BinaryOp::StrEq,
        "~==" => BinaryOp::StrNe,
        "<<" => BinaryOp::StrLt,
        "<<=" => BinaryOp::StrLe,
        ">>" => BinaryOp::StrGt,
        ">>=" => BinaryOp::StrGe,
        "===" => BinaryOp::Same,
        "~===" => BinaryOp::NotSame,
        _ => return None,
    })
}
