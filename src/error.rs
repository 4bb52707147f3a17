//! Error types for the JSON engine.
//!
//! Every lexical or grammatical failure carries a [`Position`] locating the
//! fault in the original text. Accessor misuse on an already-built value is
//! a separate, non-positional condition ([`TypeMismatch`]) — it can only
//! arise from programmatic use, never from parsing.

use std::fmt;

use thiserror::Error;

use crate::value::ValueKind;

/// A location in the input text.
///
/// `offset` is a byte index into the original buffer; `line` and `column`
/// are 1-based and derived from the offset for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Byte offset into the input.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number, counted in characters.
    pub column: usize,
}

impl Position {
    /// Derive the line/column of `offset` within `input`.
    pub(crate) fn locate(input: &str, offset: usize) -> Self {
        let offset = offset.min(input.len());
        let mut line = 1;
        let mut line_start = 0;
        for (index, byte) in input.as_bytes()[..offset].iter().enumerate() {
            if *byte == b'\n' {
                line += 1;
                line_start = index + 1;
            }
        }
        let column = input[line_start..offset].chars().count() + 1;
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {} (byte {})",
            self.line, self.column, self.offset
        )
    }
}

/// Classification of a lexical error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A byte that cannot start or continue any token, an unescaped control
    /// character inside a string, or invalid UTF-8 in a byte-slice parse.
    InvalidCharacter,
    /// Input ended inside a string literal.
    UnterminatedString,
    /// A backslash escape outside the JSON escape set.
    InvalidEscape,
    /// A malformed `\uXXXX` escape, or a surrogate escape without its pair.
    InvalidUnicodeEscape,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LexErrorKind::InvalidCharacter => "invalid character",
            LexErrorKind::UnterminatedString => "unterminated string",
            LexErrorKind::InvalidEscape => "invalid escape sequence",
            LexErrorKind::InvalidUnicodeEscape => "invalid unicode escape",
        };
        f.write_str(name)
    }
}

/// A lexical error and where it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at {position}")]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// Where it went wrong.
    pub position: Position,
}

/// A parse error.
///
/// Parsing is fail-fast: the first error aborts the parse and propagates
/// unchanged to the caller. There is no partial-tree recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lexer rejected the input.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// A token that does not fit the grammar at this point.
    #[error("unexpected {found} at {position}, expected {expected}")]
    UnexpectedToken {
        /// Description of the offending token.
        found: &'static str,
        /// What the grammar allowed instead.
        expected: &'static str,
        /// Location of the offending token.
        position: Position,
    },
    /// Unconsumed tokens after a complete top-level value.
    #[error("trailing data at {position}")]
    TrailingData {
        /// Location of the first token past the document.
        position: Position,
    },
    /// The input contained no value at all.
    #[error("empty input")]
    EmptyInput,
    /// A number literal violating the JSON number grammar, or one whose
    /// double conversion is not finite.
    #[error("invalid number at {position}")]
    InvalidNumber {
        /// Location of the literal.
        position: Position,
    },
    /// Container nesting deeper than the configured limit.
    #[error("nesting depth exceeds limit of {limit} at {position}")]
    DepthExceeded {
        /// The configured depth limit.
        limit: usize,
        /// Location of the container that crossed the limit.
        position: Position,
    },
}

impl ParseError {
    /// The location of the error, if it has one.
    pub fn position(&self) -> Option<Position> {
        match self {
            ParseError::Lex(e) => Some(e.position),
            ParseError::UnexpectedToken { position, .. }
            | ParseError::TrailingData { position }
            | ParseError::InvalidNumber { position }
            | ParseError::DepthExceeded { position, .. } => Some(*position),
            ParseError::EmptyInput => None,
        }
    }
}

/// Accessor misuse on an already-built value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected}, found {actual}")]
pub struct TypeMismatch {
    /// The kind the caller asked for.
    pub expected: ValueKind,
    /// The kind the value actually holds.
    pub actual: ValueKind,
}
