//! Error types for the HACK assembler pipeline.

use std::fmt;

/// Errors raised while cleaning, resolving symbols for, or encoding a HACK
/// assembly source file.
#[derive(Debug)]
pub enum AssemblerError {
    /// A `(LABEL)` declaration appeared twice in the same source.
    DuplicateLabel { symbol: String, line: usize },
    /// A `dest`, `comp`, or `jump` mnemonic did not match the fixed HACK
    /// lookup tables.
    UnknownMnemonic {
        field: &'static str,
        mnemonic: String,
        line: usize,
    },
    /// An I/O failure reading the source or writing the destination.
    Io(std::io::Error),
}

impl std::error::Error for AssemblerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for AssemblerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateLabel { symbol, line } => {
                write!(f, "line {line}: label \"{symbol}\" is already defined")
            }
            Self::UnknownMnemonic {
                field,
                mnemonic,
                line,
            } => {
                write!(f, "line {line}: unknown {field} mnemonic \"{mnemonic}\"")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl From<std::io::Error> for AssemblerError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}
