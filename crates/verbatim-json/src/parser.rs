//! Recursive-descent JSON parser.
//!
//! There is no separate tokenizing pass. Each `parse_*` method takes the byte
//! offset where its construct starts and returns the parsed value together
//! with the number of bytes it consumed, so callers advance a shared cursor.
//! Dispatch is on the first non-whitespace byte, with one byte of lookahead.
//!
//! # Key design decisions
//!
//! - **Escaped storage**: string content is copied verbatim and escape
//!   sequences are re-emitted in canonical form instead of being decoded, so a
//!   parsed string can be serialized by wrapping it in quotes.
//! - **Lossless numbers**: a literal that does not fit `u64`/`i64`/`f64` under
//!   the active [`Precision`] is stored as raw text, never rejected.
//! - **No recovery**: any syntax error aborts the whole parse.
//! - **Trailing input is ignored**: only the first complete value is read;
//!   [`parse_prefix`] reports how many bytes that took.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{JsonError, Result, Structure};
use crate::number::Number;
use crate::numeric::{scan_number, Precision};
use crate::types::{Map, Value};

/// Runtime parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Policy for converting number literals.
    pub precision: Precision,
    /// Maximum array/object nesting. `None` leaves nesting bounded only by the stack.
    pub max_depth: Option<usize>,
}

impl ParseOptions {
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// Parse the first JSON value in `text` with default options.
pub fn parse(text: &str) -> Result<Value> {
    parse_with(text, &ParseOptions::default())
}

/// Parse the first JSON value in `text`.
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Value> {
    parse_prefix(text, options).map(|(value, _)| value)
}

/// Parse the first JSON value in `text`, returning it with the number of bytes
/// consumed (leading whitespace included, trailing input excluded).
pub fn parse_prefix(text: &str, options: &ParseOptions) -> Result<(Value, usize)> {
    trace!(bytes = text.len(), precision = ?options.precision, "parsing JSON text");
    let parser = Parser {
        text,
        bytes: text.as_bytes(),
        options,
    };
    parser.parse_value(0, 0, Structure::Document)
}

struct Parser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    options: &'a ParseOptions,
}

impl Parser<'_> {
    fn skip_whitespace(&self, mut pos: usize) -> usize {
        while matches!(self.bytes.get(pos), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            pos += 1;
        }
        pos
    }

    /// Parse any value at `pos` (after optional whitespace). `depth` is the
    /// nesting of the enclosing container; `within` names it for EOF errors.
    fn parse_value(&self, pos: usize, depth: usize, within: Structure) -> Result<(Value, usize)> {
        let start = self.skip_whitespace(pos);
        let Some(&byte) = self.bytes.get(start) else {
            return Err(self.unterminated(start, within));
        };

        let (value, len) = match byte {
            b'{' => self.parse_object(start, depth + 1)?,
            b'[' => self.parse_array(start, depth + 1)?,
            b'"' => {
                let (content, len) = self.parse_string(start)?;
                (Value::String(content), len)
            }
            b't' => self.parse_literal(start, "true", Value::Bool(true))?,
            b'f' => self.parse_literal(start, "false", Value::Bool(false))?,
            b'n' => self.parse_literal(start, "null", Value::Null)?,
            b'-' | b'0'..=b'9' => self.parse_number(start),
            _ => return Err(self.unexpected(start, "a JSON value")),
        };

        Ok((value, start - pos + len))
    }

    fn parse_object(&self, start: usize, depth: usize) -> Result<(Value, usize)> {
        self.check_depth(start, depth)?;
        let mut map = Map::new();
        let mut pos = self.skip_whitespace(start + 1);

        if self.bytes.get(pos) == Some(&b'}') {
            return Ok((Value::Object(map), pos + 1 - start));
        }

        loop {
            pos = self.skip_whitespace(pos);
            match self.bytes.get(pos) {
                Some(b'"') => {}
                Some(_) => return Err(self.unexpected(pos, "a string key")),
                None => return Err(self.unterminated(pos, Structure::Object)),
            }
            let (key, len) = self.parse_string(pos)?;

            pos = self.skip_whitespace(pos + len);
            match self.bytes.get(pos) {
                Some(b':') => pos += 1,
                Some(_) => return Err(self.unexpected(pos, "':'")),
                None => return Err(self.unterminated(pos, Structure::Object)),
            }

            let (value, len) = self.parse_value(pos, depth, Structure::Object)?;
            // Last write wins for duplicate keys.
            map.insert(key, value);

            pos = self.skip_whitespace(pos + len);
            match self.bytes.get(pos) {
                Some(b',') => pos += 1,
                Some(b'}') => return Ok((Value::Object(map), pos + 1 - start)),
                Some(_) => return Err(self.unexpected(pos, "',' or '}'")),
                None => return Err(self.unterminated(pos, Structure::Object)),
            }
        }
    }

    fn parse_array(&self, start: usize, depth: usize) -> Result<(Value, usize)> {
        self.check_depth(start, depth)?;
        let mut items = Vec::new();
        let mut pos = self.skip_whitespace(start + 1);

        if self.bytes.get(pos) == Some(&b']') {
            return Ok((Value::Array(items), pos + 1 - start));
        }

        loop {
            let (item, len) = self.parse_value(pos, depth, Structure::Array)?;
            items.push(item);

            pos = self.skip_whitespace(pos + len);
            match self.bytes.get(pos) {
                Some(b',') => pos += 1,
                Some(b']') => return Ok((Value::Array(items), pos + 1 - start)),
                Some(_) => return Err(self.unexpected(pos, "',' or ']'")),
                None => return Err(self.unterminated(pos, Structure::Array)),
            }
        }
    }

    /// Scan a string literal starting at the opening quote. Returns the
    /// escaped content (without quotes) and the literal's length.
    ///
    /// Unescaped runs are copied verbatim. After a backslash:
    /// - `"` `\` `/` `b` `f` `n` `r` `t` are re-emitted as the same two-character escape;
    /// - `u` is re-emitted with the next four bytes copied unchecked;
    /// - any other character is kept and the backslash dropped.
    fn parse_string(&self, start: usize) -> Result<(String, usize)> {
        let mut out = String::new();
        let mut pos = start + 1;
        let mut run_start = pos;

        loop {
            let Some(&byte) = self.bytes.get(pos) else {
                return Err(self.unterminated(pos, Structure::String));
            };
            match byte {
                b'"' => {
                    out.push_str(&self.text[run_start..pos]);
                    return Ok((out, pos + 1 - start));
                }
                b'\\' => {
                    out.push_str(&self.text[run_start..pos]);
                    pos += 1;
                    let Some(&marker) = self.bytes.get(pos) else {
                        return Err(self.unterminated(pos, Structure::Escape));
                    };
                    match marker {
                        b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => {
                            out.push('\\');
                            out.push(char::from(marker));
                            pos += 1;
                        }
                        b'u' => {
                            let mut end = pos + 5;
                            if end > self.bytes.len() {
                                return Err(self.unterminated(self.bytes.len(), Structure::Escape));
                            }
                            // Four bytes may end inside a multi-byte character;
                            // take the rest of it along.
                            while !self.text.is_char_boundary(end) {
                                end += 1;
                            }
                            out.push_str("\\u");
                            out.push_str(&self.text[pos + 1..end]);
                            pos = end;
                        }
                        // The marker starts the next verbatim run.
                        _ => {}
                    }
                    run_start = pos;
                }
                _ => pos += 1,
            }
        }
    }

    fn parse_literal(&self, start: usize, word: &'static str, value: Value) -> Result<(Value, usize)> {
        if self.bytes[start..].starts_with(word.as_bytes()) {
            Ok((value, word.len()))
        } else {
            Err(JsonError::InvalidLiteral {
                offset: start,
                expected: word,
            })
        }
    }

    fn parse_number(&self, start: usize) -> (Value, usize) {
        let len = scan_number(&self.bytes[start..]);
        let literal = &self.text[start..start + len];
        let number = Number::from_literal(literal, self.options.precision);
        (Value::Number(number), len)
    }

    fn check_depth(&self, offset: usize, depth: usize) -> Result<()> {
        match self.options.max_depth {
            Some(limit) if depth > limit => Err(JsonError::NestingTooDeep { offset, limit }),
            _ => Ok(()),
        }
    }

    fn unexpected(&self, offset: usize, expected: &'static str) -> JsonError {
        let found = self
            .text
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        JsonError::UnexpectedCharacter {
            offset,
            found,
            expected,
        }
    }

    fn unterminated(&self, offset: usize, structure: Structure) -> JsonError {
        JsonError::UnterminatedStructure { offset, structure }
    }
}
