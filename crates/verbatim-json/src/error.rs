//! Error types for value access, numeric conversion and parsing.

use std::fmt;
use thiserror::Error;

use crate::types::Kind;

/// The syntactic structure that was still open when input ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    /// No value started at all (empty or whitespace-only input).
    Document,
    Object,
    Array,
    String,
    /// A backslash escape inside a string.
    Escape,
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Structure::Document => "document",
            Structure::Object => "object",
            Structure::Array => "array",
            Structure::String => "string",
            Structure::Escape => "escape sequence",
        };
        f.write_str(name)
    }
}

/// Errors raised by the value model, the numeric helpers and the parser.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonError {
    /// A typed accessor was used on a value of another kind.
    #[error("expected {expected}, found {found}")]
    WrongVariant { expected: Kind, found: Kind },

    /// Array access past the end.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Object read of a key that is not present.
    #[error("key not found: \"{0}\"")]
    KeyNotFound(String),

    /// Text could not be converted to the requested native number.
    ///
    /// The parser never surfaces this: it stores the literal as raw text instead.
    #[error("invalid numeric literal {literal:?}: {reason}")]
    InvalidNumericLiteral {
        literal: String,
        reason: &'static str,
    },

    /// A character that cannot start or continue the structure being parsed.
    #[error("unexpected character {found:?} at byte {offset}, expected {expected}")]
    UnexpectedCharacter {
        offset: usize,
        found: char,
        expected: &'static str,
    },

    /// A `t`/`f`/`n` that does not spell `true`/`false`/`null`.
    #[error("invalid literal at byte {offset}, expected `{expected}`")]
    InvalidLiteral {
        offset: usize,
        expected: &'static str,
    },

    /// Input ended inside a structure.
    #[error("unexpected end of input in {structure} at byte {offset}")]
    UnterminatedStructure { offset: usize, structure: Structure },

    /// Nesting exceeded `ParseOptions::max_depth`.
    #[error("nesting deeper than {limit} levels at byte {offset}")]
    NestingTooDeep { offset: usize, limit: usize },

    /// A value could not be converted to or from another JSON representation.
    #[error("conversion error: {0}")]
    Conversion(String),
}

impl JsonError {
    /// Byte offset into the parsed text, for syntax errors.
    pub fn offset(&self) -> Option<usize> {
        match self {
            JsonError::UnexpectedCharacter { offset, .. }
            | JsonError::InvalidLiteral { offset, .. }
            | JsonError::UnterminatedStructure { offset, .. }
            | JsonError::NestingTooDeep { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

/// Convenience alias used throughout verbatim-json.
pub type Result<T> = std::result::Result<T, JsonError>;
