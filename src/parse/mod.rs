mod error;
mod lexer;
mod parser;

pub use error::ParseError;
pub use lexer::{Location, Token, TokenKind};

use crate::types::Formula;

/// Compile a formula string into a [`Formula`] AST.
///
/// Compilation is stateless; the resulting AST is immutable and may be
/// shared and evaluated concurrently. Hosts that evaluate the same formula
/// repeatedly should compile once per declared rule and reuse the result.
///
/// # Errors
///
/// Returns [`ParseError`] for lexical or syntax failures, carrying the
/// [`Location`] of the offending input.
pub fn compile(formula: &str) -> Result<Formula, ParseError> {
    parser::Parser::new(formula)?.parse()
}
