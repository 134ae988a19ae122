//! Literals, names, bracketed forms and control structures.

use icon_ir::{Expr, ExprKind};
use icon_lexer::TokenKind;

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn primary(&mut self) -> Result<Expr, ParseError> {
        let start = self.current_span();
        let kind = match self.current_kind().clone() {
            TokenKind::Int(n) => {
                self.advance();
                ExprKind::Integer(n)
            }
            TokenKind::Real(r) => {
                self.advance();
                ExprKind::Real(r)
            }
            TokenKind::Str(s) => {
                self.advance();
                ExprKind::Str(s)
            }
            TokenKind::Cset(s) => {
                self.advance();
                ExprKind::Cset(s)
            }
            TokenKind::Ident(name) => {
                self.advance();
                ExprKind::Ident(name)
            }
            TokenKind::Keyword(name) => {
                self.advance();
                ExprKind::Keyword(name)
            }
            TokenKind::LParen => {
                self.advance();
                self.parenthesized()?
            }
            TokenKind::LBrace => {
                self.advance();
                let body = self.statements(&TokenKind::RBrace, "\"}\"")?;
                self.consume(&TokenKind::RBrace, "\"}\"")?;
                ExprKind::Compound(body)
            }
            TokenKind::LBracket => {
                self.advance();
                let items = self.list_items()?;
                self.consume(&TokenKind::RBracket, "\"]\"")?;
                ExprKind::List(items)
            }
            TokenKind::If => {
                self.advance();
                self.if_expr()?
            }
            TokenKind::While => {
                self.advance();
                let (cond, body) = self.loop_parts()?;
                ExprKind::While { cond, body }
            }
            TokenKind::Until => {
                self.advance();
                let (cond, body) = self.loop_parts()?;
                ExprKind::Until { cond, body }
            }
            TokenKind::Repeat => {
                self.advance();
                ExprKind::Repeat(self.expression()?.boxed())
            }
            TokenKind::Not => {
                self.advance();
                ExprKind::Not(self.expression()?.boxed())
            }
            TokenKind::Return => {
                self.advance();
                ExprKind::Return(self.optional_operand()?)
            }
            TokenKind::Break => {
                self.advance();
                ExprKind::Break
            }
            TokenKind::Next => {
                self.advance();
                ExprKind::Next
            }
            TokenKind::Fail => {
                self.advance();
                ExprKind::Fail
            }
            TokenKind::Every => {
                self.advance();
                self.loop_parts()?;
                ExprKind::Unsupported("every")
            }
            TokenKind::Suspend => {
                self.advance();
                self.optional_operand()?;
                if self.eat(&TokenKind::Do) {
                    self.expression()?;
                }
                ExprKind::Unsupported("suspend")
            }
            TokenKind::Create => {
                self.advance();
                self.expression()?;
                ExprKind::Unsupported("create")
            }
            TokenKind::Case => {
                self.advance();
                self.case_expr()?;
                ExprKind::Unsupported("case")
            }
            _ => return Err(self.expected("expression")),
        };
        Ok(Expr::new(kind, start.merge(self.previous_span())))
    }

    /// After `(`: a grouping `(e)` or mutual evaluation `(e1, ..., en)`,
    /// which yields its last operand.
    fn parenthesized(&mut self) -> Result<ExprKind, ParseError> {
        let first = self.expression()?;
        if !self.check(&TokenKind::Comma) {
            self.consume(&TokenKind::RParen, "\")\"")?;
            return Ok(ExprKind::Grouping(first.boxed()));
        }

        let mut args = vec![Some(first)];
        while self.eat(&TokenKind::Comma) {
            args.push(Some(self.expression()?));
        }
        let end = self.consume(&TokenKind::RParen, "\")\"")?;
        Ok(ExprKind::Call {
            callee: Expr::new(ExprKind::Integer(-1), end).boxed(),
            args,
        })
    }

    fn list_items(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut items = Vec::new();
        if self.check(&TokenKind::RBracket) {
            return Ok(items);
        }
        items.push(self.expression()?);
        while self.eat(&TokenKind::Comma) {
            items.push(self.expression()?);
        }
        Ok(items)
    }

    /// `if c then e1 [else e2]`
    fn if_expr(&mut self) -> Result<ExprKind, ParseError> {
        let cond = self.expression()?;
        self.consume(&TokenKind::Then, "\"then\"")?;
        let then_branch = self.expression()?;
        let else_branch = if self.eat(&TokenKind::Else) {
            Some(self.expression()?.boxed())
        } else {
            None
        };
        Ok(ExprKind::If {
            cond: cond.boxed(),
            then_branch: then_branch.boxed(),
            else_branch,
        })
    }

    /// `c [do body]`
    fn loop_parts(&mut self) -> Result<(Box<Expr>, Option<Box<Expr>>), ParseError> {
        let cond = self.expression()?;
        let body = if self.eat(&TokenKind::Do) {
            Some(self.expression()?.boxed())
        } else {
            None
        };
        Ok((cond.boxed(), body))
    }

    /// Operand of `return` or `suspend`, absent when the next token can't
    /// start one.
    fn optional_operand(&mut self) -> Result<Option<Box<Expr>>, ParseError> {
        if self.current_kind().begins_expression() {
            Ok(Some(self.expression()?.boxed()))
        } else {
            Ok(None)
        }
    }

    /// `case e of { clause; ... }`, parsed only to be rejected at run time.
    fn case_expr(&mut self) -> Result<(), ParseError> {
        self.expression()?;
        self.consume(&TokenKind::Of, "\"of\"")?;
        self.consume(&TokenKind::LBrace, "\"{\"")?;
        loop {
            self.skip_semicolons();
            if self.eat(&TokenKind::RBrace) {
                return Ok(());
            }
            if !self.eat(&TokenKind::Default) {
                self.expression()?;
            }
            self.consume(&TokenKind::Colon, "\":\"")?;
            self.expression()?;
            if !self.check(&TokenKind::RBrace) {
                self.consume(&TokenKind::Semicolon, "\";\"")?;
            }
        }
    }
}
