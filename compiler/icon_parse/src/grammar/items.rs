//! Top-level declarations: `global`, `procedure`.

use std::rc::Rc;

use icon_ir::{Procedure, Program};
use icon_lexer::TokenKind;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a whole file.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut program = Program::default();
        self.skip_semicolons();

        while !self.at_end() {
            match self.current_kind() {
                TokenKind::Global => {
                    self.advance();
                    let names = self.name_list("global variable name")?;
                    program.globals.extend(names);
                }
                TokenKind::Procedure => {
                    let start = self.current_span();
                    let procedure = self.procedure()?;
                    if program.procedures.contains_key(&procedure.name) {
                        return Err(self.error_at(
                            format!("procedure {} is declared more than once", procedure.name),
                            start,
                        ));
                    }
                    program
                        .procedures
                        .insert(procedure.name.clone(), Rc::new(procedure));
                }
                TokenKind::Link | TokenKind::Record | TokenKind::Invocable => {
                    let span = self.current_span();
                    return Err(self.error_at(
                        "Unsupported declaration: link, record and invocable are not available",
                        span,
                    ));
                }
                _ => return Err(self.expected("\"procedure\" or \"global\"")),
            }
            self.skip_semicolons();
        }

        tracing::debug!(
            procedures = program.procedures.len(),
            globals = program.globals.len(),
            "parsed program"
        );
        Ok(program)
    }

    /// `procedure name(params) decls [initial e] body end`
    fn procedure(&mut self) -> Result<Procedure, ParseError> {
        let start = self.consume(&TokenKind::Procedure, "\"procedure\"")?;
        let (name, _) = self.ident("procedure name")?;
        self.consume(&TokenKind::LParen, "\"(\"")?;
        let params = if self.check(&TokenKind::RParen) {
            Vec::new()
        } else {
            self.name_list("parameter name")?
        };
        self.consume(&TokenKind::RParen, "\")\"")?;
        self.skip_semicolons();

        let mut locals = Vec::new();
        let mut statics = Vec::new();
        loop {
            if self.eat(&TokenKind::Local) {
                locals.extend(self.name_list("local variable name")?);
            } else if self.eat(&TokenKind::Static) {
                statics.extend(self.name_list("static variable name")?);
            } else {
                break;
            }
            self.skip_semicolons();
        }

        let initial = if self.eat(&TokenKind::Initial) {
            let expr = self.expression()?;
            self.skip_semicolons();
            Some(expr)
        } else {
            None
        };

        let body = self.statements(&TokenKind::End, "\"end\"")?;
        let end = self.consume(&TokenKind::End, "\"end\"")?;

        Ok(Procedure {
            name,
            params,
            locals,
            statics,
            initial,
            body,
            span: start.merge(end),
        })
    }

    /// `a, b, c`
    fn name_list(&mut self, what: &str) -> Result<Vec<String>, ParseError> {
        let mut names = vec![self.ident(what)?.0];
        while self.eat(&TokenKind::Comma) {
            names.push(self.ident(what)?.0);
        }
        Ok(names)
    }
}
