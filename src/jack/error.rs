//! Error types for the Jack tokenizer and parser.

use std::fmt;

#[derive(Debug)]
pub enum JackError {
    /// A raw token begins with a digit but is not entirely digits.
    InvalidIdentifier { text: String, line: usize },
    /// A digit-only token's value falls outside the HACK integer-constant
    /// range `[0, 32767]`.
    IntegerConstantOutOfRange { text: String, line: usize },
    /// End of line reached while inside a string literal.
    UnterminatedString { line: usize },
    /// The parser saw a token its current grammar production disallows.
    UnexpectedToken { token: String, line: usize },
    /// The token stream was exhausted mid-production.
    UnexpectedEndOfInput,
    /// An I/O failure reading the source or writing the destination.
    Io(std::io::Error),
}

impl std::error::Error for JackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for JackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIdentifier { text, line } => {
                write!(f, "line {line}: invalid identifier \"{text}\" (begins with a digit)")
            }
            Self::IntegerConstantOutOfRange { text, line } => {
                write!(f, "line {line}: integer constant \"{text}\" out of range [0, 32767]")
            }
            Self::UnterminatedString { line } => {
                write!(f, "line {line}: unterminated string literal")
            }
            Self::UnexpectedToken { token, line } => {
                write!(f, "line {line}: unexpected token \"{token}\"")
            }
            Self::UnexpectedEndOfInput => write!(f, "unexpected end of input"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl From<std::io::Error> for JackError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}
