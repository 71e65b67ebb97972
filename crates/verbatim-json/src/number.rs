//! The multi-representation JSON number.

use std::fmt;

use tracing::debug;

use crate::error::{JsonError, Result};
use crate::numeric::{self, Precision};

/// A JSON number in whichever representation holds it exactly.
///
/// Parsed literals become `Unsigned` (non-negative integers), `Signed`
/// (negative integers) or `Float` (anything with `.`, `e` or `E`). A literal
/// that none of those can hold under the active [`Precision`] is kept verbatim
/// as `Raw` text and serialized unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    /// Decimal literal stored as written. The serializer emits it unquoted and
    /// does not check that it is valid JSON.
    Raw(String),
}

impl Default for Number {
    fn default() -> Self {
        Number::Signed(0)
    }
}

impl Number {
    /// A raw-text number. `text` is written verbatim on serialization.
    pub fn raw(text: impl Into<String>) -> Self {
        Number::Raw(text.into())
    }

    /// Classify a number literal the way the parser does.
    ///
    /// Literals containing `.`, `e` or `E` go through the float path, negative
    /// literals through `i64`, everything else through `u64`. A failed
    /// conversion is not an error: the literal is kept as `Raw`. So is `-0`,
    /// which no integer representation can write back with its sign.
    pub fn from_literal(literal: &str, precision: Precision) -> Self {
        let converted = if literal.contains(['.', 'e', 'E']) {
            numeric::parse_f64(literal, precision).map(Number::Float)
        } else if literal.starts_with('-') {
            numeric::parse_i64(literal, precision).and_then(|v| {
                if v == 0 {
                    Err(JsonError::InvalidNumericLiteral {
                        literal: literal.to_owned(),
                        reason: "negative zero has no integer form",
                    })
                } else {
                    Ok(Number::Signed(v))
                }
            })
        } else {
            numeric::parse_u64(literal, precision).map(Number::Unsigned)
        };
        converted.unwrap_or_else(|err| {
            debug!(literal, %err, "numeric literal kept as raw text");
            Number::Raw(literal.to_owned())
        })
    }

    pub fn is_u64(&self) -> bool {
        matches!(self, Number::Unsigned(_))
    }

    pub fn is_i64(&self) -> bool {
        matches!(self, Number::Signed(_))
    }

    pub fn is_f64(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Number::Raw(_))
    }

    /// Coerce to `u64`.
    ///
    /// Native representations convert with `as` semantics (two's complement
    /// for negatives, truncation and saturation for floats). Raw text is parsed
    /// with the fast policy and fails with `InvalidNumericLiteral` if it has no
    /// leading `u64`.
    pub fn as_u64(&self) -> Result<u64> {
        match self {
            Number::Unsigned(v) => Ok(*v),
            Number::Signed(v) => Ok(*v as u64),
            Number::Float(v) => Ok(*v as u64),
            Number::Raw(text) => numeric::parse_u64(text, Precision::Fast),
        }
    }

    /// Coerce to `i64`, with the same rules as [`Number::as_u64`].
    pub fn as_i64(&self) -> Result<i64> {
        match self {
            Number::Unsigned(v) => Ok(*v as i64),
            Number::Signed(v) => Ok(*v),
            Number::Float(v) => Ok(*v as i64),
            Number::Raw(text) => numeric::parse_i64(text, Precision::Fast),
        }
    }

    /// Coerce to `f64`. Integers may round; raw text is parsed with the fast policy.
    pub fn as_f64(&self) -> Result<f64> {
        match self {
            Number::Unsigned(v) => Ok(*v as f64),
            Number::Signed(v) => Ok(*v as f64),
            Number::Float(v) => Ok(*v),
            Number::Raw(text) => numeric::parse_f64(text, Precision::Fast),
        }
    }

    /// The raw text, if this is a `Raw` number.
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Number::Raw(text) => Some(text),
            _ => None,
        }
    }

    /// Append the serialized form of the active representation.
    pub fn write_to(&self, out: &mut String) {
        match self {
            Number::Unsigned(v) => numeric::write_u64(out, *v),
            Number::Signed(v) => numeric::write_i64(out, *v),
            Number::Float(v) => numeric::write_f64(out, *v),
            Number::Raw(text) => out.push_str(text),
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            Number::Unsigned(v) => numeric::render_u64(*v),
            Number::Signed(v) => numeric::render_i64(*v),
            Number::Float(v) => numeric::render_f64(*v),
            Number::Raw(text) => text.clone(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Raw(text) => f.write_str(text),
            other => f.write_str(&other.to_text()),
        }
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Number {
                fn from(value: $source) -> Self {
                    Number::$variant(value as $target)
                }
            }
        )*
    };
}

number_from!(Unsigned as u64: u8, u16, u32, u64, usize);
number_from!(Signed as i64: i8, i16, i32, i64, isize);
number_from!(Float as f64: f32, f64);
