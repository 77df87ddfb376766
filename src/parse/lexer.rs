use std::fmt;

/// Position in the original formula text. Both axes are 1-based.
///
/// Used to decorate parse errors so the host can point at the offending
/// token; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub(crate) const START: Location = Location { line: 1, column: 1 };
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Token classes of the formula language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// A maximal run of ASCII digits.
    Number,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `!`
    Bang,
    /// End of input. Always the last token of a stream.
    End,
}

/// A token with its source text and starting position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
    pub location: Location,
}

/// Single-pass lexer over a formula string.
///
/// Tokens are produced on demand; a fresh lexer is created per parse.
/// Whitespace is skipped but still advances line/column tracking so token
/// locations stay accurate.
#[derive(Debug)]
pub(crate) struct Lexer<'a> {
    input: &'a str,
    offset: usize,
    location: Location,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            location: Location::START,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(ch) = self.peek() {
            self.offset += ch.len_utf8();
            if ch == '\n' {
                self.location.line += 1;
                self.location.column = 1;
            } else {
                self.location.column += 1;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    /// Produce the next token, or a lexical error located at the offending
    /// character. After `End` has been returned, every further call returns
    /// `End` again at the same location.
    pub(crate) fn next_token(&mut self) -> Result<Token<'a>, super::ParseError> {
        self.skip_whitespace();
        let location = self.location;
        let start = self.offset;

        let Some(ch) = self.peek() else {
            return Ok(Token {
                kind: TokenKind::End,
                lexeme: "",
                location,
            });
        };

        let kind = match ch {
            '{' => {
                self.bump();
                TokenKind::LBrace
            }
            '}' => {
                self.bump();
                TokenKind::RBrace
            }
            '!' => {
                self.bump();
                TokenKind::Bang
            }
            '&' | '|' => {
                self.bump();
                if self.peek() == Some(ch) {
                    self.bump();
                    if ch == '&' {
                        TokenKind::AndAnd
                    } else {
                        TokenKind::OrOr
                    }
                } else {
                    return Err(super::ParseError::UnexpectedCharacter { found: ch, location });
                }
            }
            '0'..='9' => {
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.bump();
                }
                TokenKind::Number
            }
            other => {
                return Err(super::ParseError::UnexpectedCharacter {
                    found: other,
                    location,
                });
            }
        };

        Ok(Token {
            kind,
            lexeme: &self.input[start..self.offset],
            location,
        })
    }
}
