//! Binary and unary operators.

/// Infix operators.
///
/// Assignment lives here too because the evaluator treats `:=` as one more
/// row of the operator table, with the left operand evaluated as a target.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,

    // Cset
    Union,
    Diff,
    Inter,

    // Concatenation
    Concat,
    ListConcat,

    // Numeric comparison
    NumEq,
    NumNe,
    NumLt,
    NumLe,
    NumGt,
    NumGe,

    // String comparison
    StrEq,
    StrNe,
    StrLt,
    StrLe,
    StrGt,
    StrGe,

    // Value identity
    Same,
    NotSame,

    // Conjunction
    And,

    // Assignment
    Assign,
    Swap,
    RevAssign,
    RevSwap,

    // Generators
    Alt,
}

impl BinaryOp {
    /// Source-level spelling, used in diagnostics.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Union => "++",
            Self::Diff => "--",
            Self::Inter => "**",
            Self::Concat => "||",
            Self::ListConcat => "|||",
            Self::NumEq => "=",
            Self::NumNe => "~=",
            Self::NumLt => "<",
            Self::NumLe => "<=",
            Self::NumGt => ">",
            Self::NumGe => ">=",
            Self::StrEq => "==",
            Self::StrNe => "~==",
            Self::StrLt => "<<",
            Self::StrLe => "<<=",
            Self::StrGt => ">>",
            Self::StrGe => ">>=",
            Self::Same => "===",
            Self::NotSame => "~===",
            Self::And => "&",
            Self::Assign => ":=",
            Self::Swap => ":=:",
            Self::RevAssign => "<-",
            Self::RevSwap => "<->",
            Self::Alt => "|",
        }
    }

    /// Operators that may be fused with `:=` (`+:=`, `||:=`, ...).
    pub const fn is_augmentable(self) -> bool {
        !matches!(
            self,
            Self::And | Self::Assign | Self::Swap | Self::RevAssign | Self::RevSwap | Self::Alt
        )
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `-x`
    Neg,
    /// `+x`
    Plus,
    /// `*x`
    Size,
    /// `\x`
    NonNull,
    /// `/x`
    IsNull,
    /// `~c`
    Complement,
    /// `.x`
    Deref,
    /// `!x`
    Bang,
    /// `?x`
    Random,
    /// `=s`
    Tab,
    /// `@c`
    Activate,
    /// `^c`
    Refresh,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Plus => "+",
            Self::Size => "*",
            Self::NonNull => "\\",
            Self::IsNull => "/",
            Self::Complement => "~",
            Self::Deref => ".",
            Self::Bang => "!",
            Self::Random => "?",
            Self::Tab => "=",
            Self::Activate => "@",
            Self::Refresh => "^",
        }
    }
}
