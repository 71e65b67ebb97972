//! # verbatim-json
//!
//! A JSON value model with a recursive-descent parser and a matching serializer
//! that round-trip text without losing information.
//!
//! Two things set it apart from a typical JSON library:
//!
//! - **Numbers never lose precision silently in storage.** A literal is stored
//!   as `u64`, `i64` or `f64` when that representation holds it, and as the
//!   original text otherwise (e.g. integers beyond 64 bits).
//! - **Strings keep their escape sequences.** `"a\nb"` is stored as the four
//!   characters `a`, `\`, `n`, `b`, so serialization is a plain quote-wrap and
//!   escapes come out exactly as they went in.
//!
//! ## Quick start
//!
//! ```rust
//! use verbatim_json::{parse, serialize, SerializeOptions};
//!
//! let value = parse(r#"{"b": 18446744073709551616, "a": "x\ny"}"#).unwrap();
//! let text = serialize(&value, &SerializeOptions::compact());
//! assert_eq!(text, r#"{"a":"x\ny","b":18446744073709551616}"#);
//! ```
//!
//! ## Modules
//!
//! - [`types`] — `Value`, `Kind`, literal construction (`KeyValue`, `Item`)
//! - [`number`] — the multi-representation `Number`
//! - [`numeric`] — text ↔ number conversion under a `Precision` policy
//! - [`parser`] — text → `Value`
//! - [`serializer`] — `Value` → text
//! - [`escape`] — plain text ↔ escaped string content
//! - [`interop`] — `serde::Serialize` and `serde_json` conversions
//! - [`error`] — `JsonError`

pub mod error;
pub mod escape;
pub mod interop;
pub mod number;
pub mod numeric;
pub mod parser;
pub mod serializer;
pub mod types;

pub use error::{JsonError, Result, Structure};
pub use number::Number;
pub use numeric::Precision;
pub use parser::{parse, parse_prefix, parse_with, ParseOptions};
pub use serializer::{serialize, serialize_into, SerializeOptions};
pub use types::{Item, KeyValue, Kind, Map, Value};

/// Build a [`Value`] from a literal list, choosing object or array the way
/// [`Value::from_items`] does.
///
/// ```rust
/// use verbatim_json::literal;
///
/// let person = literal![("name", "Alice"), ("age", 30)];
/// assert!(person.is_object());
///
/// let mixed = literal![1, "two", true];
/// assert!(mixed.is_array());
/// ```
#[macro_export]
macro_rules! literal {
    ($($item:expr),* $(,)?) => {
        $crate::Value::from_items([$($crate::Item::from($item)),*])
    };
}
