use std::fmt;

use thiserror::Error;

use crate::Position;

/// Sentinel message used in place of an OS-level reason when the character
/// source or sink reports I/O failure. Callers that want the real `errno`
/// string should inspect the underlying `std::io::Error` they get back from
/// their own reader/writer, not this message.
pub const IO_ERROR_SENTINEL: &str = "I/O error";

/// The fixed taxonomy of parse failures a HiPack document can produce.
///
/// Every variant corresponds to exactly one wording the parser is allowed
/// to report; callers that match on `ErrorKind` rather than the rendered
/// message get a stable, non-localized signal.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("unexpected input")]
    UnexpectedInput,
    #[error("unterminated string value")]
    UnterminatedString,
    #[error("unterminated list value")]
    UnterminatedList,
    #[error("unterminated dict value")]
    UnterminatedDict,
    #[error("unterminated message")]
    UnterminatedMessage,
    #[error("invalid escape sequence")]
    InvalidEscapeSequence,
    #[error("invalid boolean value")]
    InvalidBooleanValue,
    #[error("invalid numeric value")]
    InvalidNumericValue,
    #[error("missing dictionary key")]
    MissingDictionaryKey,
    #[error("missing separator")]
    MissingSeparator,
    #[error("duplicate annotation")]
    DuplicateAnnotation,
    #[error("{}", IO_ERROR_SENTINEL)]
    Io,
}

/// A parse failure: what went wrong, and where the parser had consumed up
/// to when it noticed.
///
/// A parser invocation reports at most one of these — the first error
/// detected — never a list. Discard the partial value tree on receipt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ErrorKind,
    pub position: Position,
}

impl std::error::Error for ParseError {}

impl ParseError {
    pub fn new(kind: ErrorKind, position: Position) -> Self {
        ParseError { kind, position }
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.position)
    }
}
