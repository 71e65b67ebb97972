//! JSON serializer: walks a [`Value`] tree and writes text.
//!
//! Strings are written as quote-wrapped escaped content, numbers in their
//! active representation (raw text verbatim). Object members come out in key
//! order because the map is ordered. Empty arrays and objects are always the
//! compact `[]` / `{}`.
//!
//! # Layout
//!
//! For a non-empty container at depth `d` with indent width `w`:
//!
//! - the opening bracket, then a newline if enabled;
//! - each child indented by `(d + 1) * w` spaces, followed by `,` unless last,
//!   then a newline if enabled;
//! - the closing bracket indented by `d * w` spaces.
//!
//! Object members print as `"key":` plus a space when `w > 0`. Indentation and
//! newlines are independent: `w = 0` with newlines gives one child per line with
//! no indent; `w > 0` without newlines keeps the indent spaces on a single line.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::types::Value;

/// Output formatting options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializeOptions {
    /// Spaces per nesting level; 0 disables indentation.
    pub indent_width: usize,
    /// Emit a newline after opening brackets and after each child.
    pub newlines: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            newlines: true,
        }
    }
}

impl SerializeOptions {
    /// Single-line output with no whitespace.
    pub fn compact() -> Self {
        Self {
            indent_width: 0,
            newlines: false,
        }
    }

    /// Multi-line output indented by `indent_width` spaces per level.
    pub fn pretty(indent_width: usize) -> Self {
        Self {
            indent_width,
            newlines: true,
        }
    }

    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    pub fn with_newlines(mut self, newlines: bool) -> Self {
        self.newlines = newlines;
        self
    }
}

/// Serialize `value` to a new string.
pub fn serialize(value: &Value, options: &SerializeOptions) -> String {
    let mut out = String::with_capacity(1024);
    serialize_into(value, options, &mut out);
    trace!(bytes = out.len(), "serialized JSON value");
    out
}

/// Append the serialization of `value` to `out`.
pub fn serialize_into(value: &Value, options: &SerializeOptions, out: &mut String) {
    let mut writer = Writer { options, out };
    writer.write_value(value, 0);
}

struct Writer<'a> {
    options: &'a SerializeOptions,
    out: &'a mut String,
}

impl Writer<'_> {
    fn write_value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(true) => self.out.push_str("true"),
            Value::Bool(false) => self.out.push_str("false"),
            Value::Number(number) => number.write_to(self.out),
            Value::String(content) => {
                self.out.push('"');
                self.out.push_str(content);
                self.out.push('"');
            }
            Value::Array(items) if items.is_empty() => self.out.push_str("[]"),
            Value::Array(items) => {
                self.out.push('[');
                self.newline();
                for (i, item) in items.iter().enumerate() {
                    self.indent(depth + 1);
                    self.write_value(item, depth + 1);
                    if i + 1 < items.len() {
                        self.out.push(',');
                    }
                    self.newline();
                }
                self.indent(depth);
                self.out.push(']');
            }
            Value::Object(map) if map.is_empty() => self.out.push_str("{}"),
            Value::Object(map) => {
                self.out.push('{');
                self.newline();
                for (i, (key, item)) in map.iter().enumerate() {
                    self.indent(depth + 1);
                    self.out.push('"');
                    self.out.push_str(key);
                    self.out.push_str("\":");
                    if self.options.indent_width > 0 {
                        self.out.push(' ');
                    }
                    self.write_value(item, depth + 1);
                    if i + 1 < map.len() {
                        self.out.push(',');
                    }
                    self.newline();
                }
                self.indent(depth);
                self.out.push('}');
            }
        }
    }

    fn newline(&mut self) {
        if self.options.newlines {
            self.out.push('\n');
        }
    }

    fn indent(&mut self, depth: usize) {
        let width = depth * self.options.indent_width;
        self.out.extend(std::iter::repeat_n(' ', width));
    }
}
