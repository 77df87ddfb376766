use super::error::ParseError;
use super::lexer::{Lexer, Token, TokenKind};
use crate::types::Formula;

/// Recursive-descent parser over the lexer's token stream.
///
/// Precedence, low to high: `||`, `&&`, `!`, operand. `||` and `&&` are
/// left-associative; `!` stacks. Braces delimit a slot index only; the
/// grammar deliberately has no grouping operator.
#[derive(Debug)]
pub(crate) struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse a complete formula, consuming the entire token stream.
    pub(crate) fn parse(mut self) -> Result<Formula, ParseError> {
        if self.current.kind == TokenKind::End {
            return Err(ParseError::EmptyFormula {
                location: self.current.location,
            });
        }
        let formula = self.or_expr()?;
        if self.current.kind == TokenKind::End {
            Ok(formula)
        } else {
            Err(ParseError::TrailingTokens {
                found: self.current.lexeme.to_owned(),
                location: self.current.location,
            })
        }
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Consume the current token if it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        if self.current.kind == kind {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<(), ParseError> {
        if self.current.kind == kind {
            self.advance()
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        if self.current.kind == TokenKind::End {
            ParseError::UnexpectedEnd {
                expected,
                location: self.current.location,
            }
        } else {
            ParseError::UnexpectedToken {
                expected,
                found: self.current.lexeme.to_owned(),
                location: self.current.location,
            }
        }
    }

    fn or_expr(&mut self) -> Result<Formula, ParseError> {
        let mut node = self.and_expr()?;
        while self.eat(TokenKind::OrOr)? {
            node = node.or(self.and_expr()?);
        }
        Ok(node)
    }

    fn and_expr(&mut self) -> Result<Formula, ParseError> {
        let mut node = self.not_expr()?;
        while self.eat(TokenKind::AndAnd)? {
            node = node.and(self.not_expr()?);
        }
        Ok(node)
    }

    fn not_expr(&mut self) -> Result<Formula, ParseError> {
        if self.eat(TokenKind::Bang)? {
            Ok(!self.not_expr()?)
        } else {
            self.operand()
        }
    }

    fn operand(&mut self) -> Result<Formula, ParseError> {
        self.expect(TokenKind::LBrace, "`{`")?;
        if self.current.kind != TokenKind::Number {
            return Err(self.unexpected("a slot index"));
        }
        let index: usize =
            self.current
                .lexeme
                .parse()
                .map_err(|_| ParseError::InvalidSlotIndex {
                    lexeme: self.current.lexeme.to_owned(),
                    location: self.current.location,
                })?;
        self.advance()?;
        self.expect(TokenKind::RBrace, "`}`")?;
        Ok(Formula::Slot(index))
    }
}
