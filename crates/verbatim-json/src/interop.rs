//! Bridges to `serde` and `serde_json`.
//!
//! Going through serde decodes escaped strings and keys, and turns raw-text
//! numbers into the nearest native number, so this path is not lossless. It is
//! meant for handing values to other serde formats and for comparing results
//! against `serde_json`.

use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::error::{JsonError, Result};
use crate::escape::{escape, unescape};
use crate::number::Number;
use crate::numeric::{self, Precision};
use crate::types::{Map, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(number) => number.serialize(serializer),
            Value::String(content) => {
                let text = unescape(content).map_err(S::Error::custom)?;
                serializer.serialize_str(&text)
            }
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, item) in map {
                    let key = unescape(key).map_err(S::Error::custom)?;
                    out.serialize_entry(&key, item)?;
                }
                out.end()
            }
        }
    }
}

/// Raw text is emitted as an exact `u64`/`i64` when it is one, otherwise as
/// the nearest finite `f64`.
impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Number::Unsigned(v) => serializer.serialize_u64(*v),
            Number::Signed(v) => serializer.serialize_i64(*v),
            Number::Float(v) => serializer.serialize_f64(*v),
            Number::Raw(text) => {
                if let Ok(v) = numeric::parse_u64(text, Precision::Strict) {
                    serializer.serialize_u64(v)
                } else if let Ok(v) = numeric::parse_i64(text, Precision::Strict) {
                    serializer.serialize_i64(v)
                } else {
                    let v = numeric::parse_f64(text, Precision::Fast).map_err(S::Error::custom)?;
                    serializer.serialize_f64(v)
                }
            }
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => Value::Number(number_from_serde(n)),
            serde_json::Value::String(s) => Value::String(escape(s)),
            serde_json::Value::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            serde_json::Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, item)| (escape(key), Value::from(item)))
                    .collect::<Map>(),
            ),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Value::from(&value)
    }
}

fn number_from_serde(n: &serde_json::Number) -> Number {
    if let Some(v) = n.as_u64() {
        Number::Unsigned(v)
    } else if let Some(v) = n.as_i64() {
        Number::Signed(v)
    } else if let Some(v) = n.as_f64() {
        Number::Float(v)
    } else {
        Number::Raw(n.to_string())
    }
}

impl Value {
    /// Convert to a `serde_json::Value` (decoding strings, see module docs).
    pub fn to_serde_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|err| JsonError::Conversion(err.to_string()))
    }
}
