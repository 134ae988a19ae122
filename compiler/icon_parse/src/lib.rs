//! Recursive-descent parser for Icon source.
//!
//! Lexing and parsing both fail fast: the first malformed token or
//! unexpected token becomes a [`ParseError`] and nothing is evaluated.

mod error;
mod grammar;
mod parser;

use icon_ir::Program;

pub use error::ParseError;
pub use parser::Parser;

/// Parse a complete source file into a [`Program`].
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = icon_lexer::tokenize(source).map_err(|e| ParseError::from_lex(&e, source))?;
    tracing::trace!(tokens = tokens.len(), "lexed");
    Parser::new(source, &tokens).parse_program()
}

#[cfg(test)]
mod tests;
