//! The JSON value tree.
//!
//! A [`Value`] exclusively owns its children: cloning deep-copies the subtree,
//! moving transfers it. Objects are [`BTreeMap`]s, so members are always
//! iterated and serialized in lexicographic key order regardless of the order
//! they were inserted or parsed in.
//!
//! Strings and object keys hold **escaped** text: the bytes between the quotes
//! of a JSON string literal, with escape sequences left in place. Key arguments
//! to the accessors below are matched against that stored form. Constructors
//! that take plain Rust text (`Value::string`, `From<&str>`, `KeyValue::new`)
//! escape it first.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{JsonError, Result};
use crate::escape;
use crate::number::Number;
use crate::serializer::{serialize, SerializeOptions};

/// Object storage: escaped key → value, ordered by key.
pub type Map = BTreeMap<String, Value>;

/// The kind of a [`Value`], used in accessor errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    /// Name used in messages: `null`, `boolean`, `number`, `string`, `array`, `object`.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A JSON value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    /// Escaped string content, without the surrounding quotes.
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

impl Value {
    /// A string value holding `text` escaped into JSON form.
    pub fn string(text: &str) -> Self {
        Value::String(escape::escape(text))
    }

    /// A string value from text that is already escaped. Stored verbatim.
    pub fn escaped(text: impl Into<String>) -> Self {
        Value::String(text.into())
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Kind name for messages; see [`Kind::as_str`].
    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.wrong_variant(Kind::Bool)),
        }
    }

    pub fn as_bool_mut(&mut self) -> Result<&mut bool> {
        match self {
            Value::Bool(b) => Ok(b),
            other => Err(other.wrong_variant(Kind::Bool)),
        }
    }

    pub fn as_number(&self) -> Result<&Number> {
        match self {
            Value::Number(n) => Ok(n),
            other => Err(other.wrong_variant(Kind::Number)),
        }
    }

    pub fn as_number_mut(&mut self) -> Result<&mut Number> {
        match self {
            Value::Number(n) => Ok(n),
            other => Err(other.wrong_variant(Kind::Number)),
        }
    }

    /// The escaped string content.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.wrong_variant(Kind::String)),
        }
    }

    /// Mutable access to the escaped buffer. Callers keep it escaped.
    pub fn as_string_mut(&mut self) -> Result<&mut String> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.wrong_variant(Kind::String)),
        }
    }

    /// The string content with escape sequences decoded.
    pub fn decoded(&self) -> Result<String> {
        escape::unescape(self.as_str()?)
    }

    pub fn as_array(&self) -> Result<&Vec<Value>> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.wrong_variant(Kind::Array)),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.wrong_variant(Kind::Array)),
        }
    }

    pub fn as_object(&self) -> Result<&Map> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(other.wrong_variant(Kind::Object)),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut Map> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(other.wrong_variant(Kind::Object)),
        }
    }

    /// Array element by position; bounds-checked.
    pub fn get(&self, index: usize) -> Result<&Value> {
        let items = self.as_array()?;
        items.get(index).ok_or(JsonError::IndexOutOfRange {
            index,
            len: items.len(),
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Value> {
        let items = self.as_array_mut()?;
        let len = items.len();
        items
            .get_mut(index)
            .ok_or(JsonError::IndexOutOfRange { index, len })
    }

    /// Object member by (escaped) key; `KeyNotFound` when absent.
    pub fn get_key(&self, key: &str) -> Result<&Value> {
        self.as_object()?
            .get(key)
            .ok_or_else(|| JsonError::KeyNotFound(key.to_owned()))
    }

    pub fn get_key_mut(&mut self, key: &str) -> Result<&mut Value> {
        self.as_object_mut()?
            .get_mut(key)
            .ok_or_else(|| JsonError::KeyNotFound(key.to_owned()))
    }

    /// Object member by (escaped) key, inserting `Null` first if absent.
    pub fn entry(&mut self, key: &str) -> Result<&mut Value> {
        Ok(self
            .as_object_mut()?
            .entry(key.to_owned())
            .or_default())
    }

    /// Append to an array.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        self.as_array_mut()?.push(value.into());
        Ok(())
    }

    /// Insert into an object, returning the previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Option<Value>> {
        Ok(self.as_object_mut()?.insert(key.into(), value.into()))
    }

    /// Remove an object member, returning it if it was present.
    pub fn remove(&mut self, key: &str) -> Result<Option<Value>> {
        Ok(self.as_object_mut()?.remove(key))
    }

    /// Number of elements or members; zero for scalars.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move the value out, leaving `Null` behind.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Serialize with explicit formatting options.
    pub fn to_string_with(&self, options: &SerializeOptions) -> String {
        serialize(self, options)
    }

    fn wrong_variant(&self, expected: Kind) -> JsonError {
        JsonError::WrongVariant {
            expected,
            found: self.kind(),
        }
    }
}

/// Renders with [`SerializeOptions::default`]: two-space indent and newlines.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self, &SerializeOptions::default()))
    }
}

// Indexing is panicking sugar over `get`/`get_key`/`entry`.

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl IndexMut<usize> for Value {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self.get_key(key) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Inserts `Null` for a missing key.
impl IndexMut<&str> for Value {
    fn index_mut(&mut self, key: &str) -> &mut Value {
        match self.entry(key) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

macro_rules! value_from_number {
    ($($source:ty),*) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

value_from_number!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

/// Escapes `text`; see [`Value::string`].
impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::string(text)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::string(&text)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Literal construction
// ---------------------------------------------------------------------------

/// A key and its value, used only while building an object from a literal list.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValue {
    key: String,
    value: Value,
}

impl KeyValue {
    /// Pair plain-text `key` (escaped on the way in) with `value`.
    pub fn new(key: &str, value: impl Into<Value>) -> Self {
        Self {
            key: escape::escape(key),
            value: value.into(),
        }
    }

    /// The escaped key.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_parts(self) -> (String, Value) {
        (self.key, self.value)
    }
}

/// One entry of a literal list passed to [`Value::from_items`].
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Value(Value),
    Pair(KeyValue),
}

impl Item {
    /// A `KeyValue`, or a two-element array whose first element is a string.
    fn is_pair_like(&self) -> bool {
        match self {
            Item::Pair(_) => true,
            Item::Value(Value::Array(items)) => items.len() == 2 && items[0].is_string(),
            Item::Value(_) => false,
        }
    }

    fn into_entry(self) -> Option<(String, Value)> {
        match self {
            Item::Pair(pair) => Some(pair.into_parts()),
            Item::Value(Value::Array(items)) => {
                let mut items = items.into_iter();
                match (items.next(), items.next()) {
                    (Some(Value::String(key)), Some(value)) => Some((key, value)),
                    _ => None,
                }
            }
            Item::Value(_) => None,
        }
    }

    /// Array element form; a pair becomes `[key, value]`.
    fn into_value(self) -> Value {
        match self {
            Item::Value(value) => value,
            Item::Pair(pair) => {
                let (key, value) = pair.into_parts();
                Value::Array(vec![Value::String(key), value])
            }
        }
    }
}

impl Value {
    /// Build an object or an array from a literal list.
    ///
    /// If the list is non-empty and every item is pair-like (a [`KeyValue`], or
    /// a two-element array starting with a string), the result is an object;
    /// later duplicates overwrite earlier ones. Otherwise it is an array, with
    /// any `KeyValue` items turned into `[key, value]` arrays. An empty list is
    /// an empty array.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Value {
        let items: Vec<Item> = items.into_iter().collect();
        if !items.is_empty() && items.iter().all(Item::is_pair_like) {
            Value::Object(items.into_iter().filter_map(Item::into_entry).collect())
        } else {
            Value::Array(items.into_iter().map(Item::into_value).collect())
        }
    }
}

impl From<Value> for Item {
    fn from(value: Value) -> Self {
        Item::Value(value)
    }
}

impl From<KeyValue> for Item {
    fn from(pair: KeyValue) -> Self {
        Item::Pair(pair)
    }
}

impl<V: Into<Value>> From<(&str, V)> for Item {
    fn from((key, value): (&str, V)) -> Self {
        Item::Pair(KeyValue::new(key, value))
    }
}

impl<V: Into<Value>> From<(String, V)> for Item {
    fn from((key, value): (String, V)) -> Self {
        Item::Pair(KeyValue::new(&key, value))
    }
}

macro_rules! item_from_value {
    ($($source:ty),*) => {
        $(
            impl From<$source> for Item {
                fn from(value: $source) -> Self {
                    Item::Value(Value::from(value))
                }
            }
        )*
    };
}

item_from_value!(
    bool, Number, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64, &str, String
);
