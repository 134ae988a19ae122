//! Operator precedence, prefix operators, calls and subscripts.

use icon_ir::{BinaryOp, Expr, ExprKind, UnaryOp};
use icon_lexer::TokenKind;
use icon_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

/// Loosest precedence level; `&` binds last.
const LOWEST: u8 = 10;

/// Infix forms, before they become AST nodes.
#[derive(Copy, Clone)]
enum Infix {
    Binary(BinaryOp),
    Augmented(BinaryOp),
    To,
}

impl Parser<'_> {
    /// Parse any expression.
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_precedence(LOWEST))
    }

    /// Expressions separated by `;` up to (not including) `terminator`.
    pub(crate) fn statements(
        &mut self,
        terminator: &TokenKind,
        what: &str,
    ) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = Vec::new();
        loop {
            self.skip_semicolons();
            if self.check(terminator) || self.at_end() {
                return Ok(exprs);
            }
            exprs.push(self.expression()?);
            if !self.check(terminator) && !self.eat(&TokenKind::Semicolon) {
                return Err(self.expected(what));
            }
        }
    }

    fn parse_precedence(&mut self, max_prec: u8) -> Result<Expr, ParseError> {
        let mut left = self.unary()?;

        while let Some((infix, prec)) = self.infix_op() {
            if prec > max_prec {
                break;
            }
            self.advance();

            // `^` and the assignment family group to the right.
            let right = if matches!(prec, 1 | 8) {
                self.parse_precedence(prec)?
            } else {
                self.parse_precedence(prec - 1)?
            };

            let span = left.span.merge(right.span);
            let kind = match infix {
                Infix::Binary(op) => ExprKind::Binary {
                    op,
                    left: left.boxed(),
                    right: right.boxed(),
                },
                Infix::Augmented(op) => ExprKind::AugAssign {
                    op,
                    target: left.boxed(),
                    value: right.boxed(),
                },
                Infix::To => {
                    if self.eat(&TokenKind::By) {
                        self.parse_precedence(6)?;
                    }
                    ExprKind::Unsupported("to-by")
                }
            };
            left = Expr::new(kind, span.merge(self.previous_span()));
        }

        Ok(left)
    }

    /// Infix operator at the cursor and its precedence (higher binds looser).
    fn infix_op(&self) -> Option<(Infix, u8)> {
        use BinaryOp as B;
        let bin = |op| Some((Infix::Binary(op), binary_precedence(op)));
        match self.current_kind() {
            TokenKind::Caret => bin(B::Pow),
            TokenKind::Star => bin(B::Mul),
            TokenKind::Slash => bin(B::Div),
            TokenKind::Percent => bin(B::Mod),
            TokenKind::StarStar => bin(B::Inter),
            TokenKind::Plus => bin(B::Add),
            TokenKind::Minus => bin(B::Sub),
            TokenKind::PlusPlus => bin(B::Union),
            TokenKind::MinusMinus => bin(B::Diff),
            TokenKind::PipePipe => bin(B::Concat),
            TokenKind::PipePipePipe => bin(B::ListConcat),
            TokenKind::Eq => bin(B::NumEq),
            TokenKind::TildeEq => bin(B::NumNe),
            TokenKind::Lt => bin(B::NumLt),
            TokenKind::LtEq => bin(B::NumLe),
            TokenKind::Gt => bin(B::NumGt),
            TokenKind::GtEq => bin(B::NumGe),
            TokenKind::EqEq => bin(B::StrEq),
            TokenKind::TildeEqEq => bin(B::StrNe),
            TokenKind::LtLt => bin(B::StrLt),
            TokenKind::LtLtEq => bin(B::StrLe),
            TokenKind::GtGt => bin(B::StrGt),
            TokenKind::GtGtEq => bin(B::StrGe),
            TokenKind::EqEqEq => bin(B::Same),
            TokenKind::TildeEqEqEq => bin(B::NotSame),
            TokenKind::Pipe => bin(B::Alt),
            TokenKind::To => Some((Infix::To, 7)),
            TokenKind::Assign => bin(B::Assign),
            TokenKind::Swap => bin(B::Swap),
            TokenKind::RevAssign => bin(B::RevAssign),
            TokenKind::RevSwap => bin(B::RevSwap),
            TokenKind::AugAssign(op) => Some((Infix::Augmented(*op), 8)),
            TokenKind::Amp => bin(B::And),
            _ => None,
        }
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        let start = self.current_span();
        let ops: &[UnaryOp] = match self.current_kind() {
            TokenKind::Minus => &[UnaryOp::Neg],
            TokenKind::MinusMinus => &[UnaryOp::Neg, UnaryOp::Neg],
            TokenKind::Plus => &[UnaryOp::Plus],
            TokenKind::PlusPlus => &[UnaryOp::Plus, UnaryOp::Plus],
            TokenKind::Star => &[UnaryOp::Size],
            TokenKind::StarStar => &[UnaryOp::Size, UnaryOp::Size],
            TokenKind::Backslash => &[UnaryOp::NonNull],
            TokenKind::Slash => &[UnaryOp::IsNull],
            TokenKind::Tilde => &[UnaryOp::Complement],
            TokenKind::Dot => &[UnaryOp::Deref],
            TokenKind::Bang => &[UnaryOp::Bang],
            TokenKind::Question => &[UnaryOp::Random],
            TokenKind::Eq => &[UnaryOp::Tab],
            TokenKind::At => &[UnaryOp::Activate],
            TokenKind::Caret => &[UnaryOp::Refresh],
            _ => return self.postfix(),
        };
        self.advance();

        let mut expr = ensure_sufficient_stack(|| self.unary())?;
        for op in ops.iter().rev() {
            let span = start.merge(expr.span);
            expr = Expr::new(
                ExprKind::Unary {
                    op: *op,
                    operand: expr.boxed(),
                },
                span,
            );
        }
        Ok(expr)
    }

    fn postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;

        loop {
            match self.current_kind() {
                TokenKind::LParen => {
                    self.advance();
                    let args = self.call_args()?;
                    let end = self.consume(&TokenKind::RParen, "\")\"")?;
                    let span = expr.span.merge(end);
                    expr = Expr::new(
                        ExprKind::Call {
                            callee: expr.boxed(),
                            args,
                        },
                        span,
                    );
                }
                TokenKind::LBracket => {
                    self.advance();
                    expr = self.subscripts(expr)?;
                }
                TokenKind::Dot => {
                    self.advance();
                    self.ident("field name")?;
                    let span = expr.span.merge(self.previous_span());
                    expr = Expr::new(ExprKind::Unsupported("field reference"), span);
                }
                _ => return Ok(expr),
            }
        }
    }

    /// `(a, , c)`: elided arguments become `None`.
    fn call_args(&mut self) -> Result<Vec<Option<Expr>>, ParseError> {
        let mut args = Vec::new();
        if self.check(&TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            if self.check(&TokenKind::Comma) || self.check(&TokenKind::RParen) {
                args.push(None);
            } else {
                args.push(Some(self.expression()?));
            }
            if !self.eat(&TokenKind::Comma) {
                return Ok(args);
            }
        }
    }

    /// `e[i]`, `e[i, j]` (same as `e[i][j]`), `e[i:j]` (unsupported section).
    fn subscripts(&mut self, target: Expr) -> Result<Expr, ParseError> {
        let start = target.span;
        let mut expr = target;
        loop {
            let index = self.expression()?;
            let kind = if self.eat(&TokenKind::Colon) {
                self.expression()?;
                ExprKind::Unsupported("string section")
            } else {
                ExprKind::Subscript {
                    target: expr.boxed(),
                    index: index.boxed(),
                }
            };
            expr = Expr::new(kind, start.merge(self.previous_span()));
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        let end = self.consume(&TokenKind::RBracket, "\"]\"")?;
        expr.span = start.merge(end);
        Ok(expr)
    }
}

/// Precedence table, tightest (1) to loosest (10).
fn binary_precedence(op: BinaryOp) -> u8 {
    use BinaryOp as B;
    match op {
        B::Pow => 1,
        B::Mul | B::Div | B::Mod | B::Inter => 2,
        B::Add | B::Sub | B::Union | B::Diff => 3,
        B::Concat | B::ListConcat => 4,
        B::NumEq
        | B::NumNe
        | B::NumLt
        | B::NumLe
        | B::NumGt
        | B::NumGe
        | B::StrEq
        | B::StrNe
        | B::StrLt
        | B::StrLe
        | B::StrGt
        | B::StrGe
        | B::Same
        | B::NotSame => 5,
        B::Alt => 6,
        B::Assign | B::Swap | B::RevAssign | B::RevSwap => 8,
        B::And => 10,
    }
}
