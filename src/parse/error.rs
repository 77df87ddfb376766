use thiserror::Error;

use super::lexer::Location;

/// Errors produced while compiling a formula string.
///
/// Lexical failures (a character outside the formula alphabet) and syntax
/// failures (a malformed token sequence) both carry the [`Location`] of the
/// offending input so the host can build a precise diagnostic; see
/// [`ParseError::render`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that is not part of any formula token. A lone `&` or `|`
    /// lands here too.
    #[error("unexpected character `{found}` at {location}")]
    UnexpectedCharacter { found: char, location: Location },

    /// A well-formed token in a position the grammar does not allow.
    #[error("expected {expected} but found `{found}` at {location}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        location: Location,
    },

    /// Input ended in the middle of an expression.
    #[error("unexpected end of expression at {location}, expected {expected}")]
    UnexpectedEnd {
        expected: &'static str,
        location: Location,
    },

    /// A complete formula was parsed but input remains.
    #[error("unexpected `{found}` after a complete expression at {location}")]
    TrailingTokens { found: String, location: Location },

    /// The input contained no tokens at all.
    #[error("formula is empty at {location}")]
    EmptyFormula { location: Location },

    /// A slot index too large to represent.
    #[error("slot index `{lexeme}` is out of range at {location}")]
    InvalidSlotIndex { lexeme: String, location: Location },
}

impl ParseError {
    /// The position of the offending input.
    #[must_use]
    pub fn location(&self) -> Location {
        match self {
            ParseError::UnexpectedCharacter { location, .. }
            | ParseError::UnexpectedToken { location, .. }
            | ParseError::UnexpectedEnd { location, .. }
            | ParseError::TrailingTokens { location, .. }
            | ParseError::EmptyFormula { location }
            | ParseError::InvalidSlotIndex { location, .. } => *location,
        }
    }

    /// Render a diagnostic against the original formula text: the offending
    /// source line, a caret under the failing column, then the message.
    ///
    /// Total for any line/column against any source. An out-of-bounds line
    /// clamps to the last line of the text; a column past the end of the line
    /// (an error at end of input) places the caret one past the last
    /// character. For empty source text only the message is returned.
    #[must_use]
    pub fn render(&self, source: &str) -> String {
        let location = self.location();
        let line_index = (location.line as usize).saturating_sub(1);
        let line = source
            .lines()
            .nth(line_index)
            .or_else(|| source.lines().last());

        match line {
            None => self.to_string(),
            Some(line) => {
                let width = line.chars().count();
                let caret_at = (location.column as usize).saturating_sub(1).min(width);
                format!("{line}\n{}^ {self}", " ".repeat(caret_at))
            }
        }
    }
}
