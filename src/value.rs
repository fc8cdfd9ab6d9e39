//! Dynamic value representation for the object builder's output.
//!
//! This module provides the [`Value`] enum produced by
//! [`to_object`](crate::to_object). VSV's object markup has exactly three
//! shapes: string scalars (every leaf, including accumulated function
//! literals), sequences, and insertion-ordered objects.
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use vsv::{Value, vsv};
//!
//! let text = Value::from("hello");
//! let list = Value::Array(vec![Value::from("a"), Value::from("b")]);
//!
//! // Or with the vsv! macro
//! let obj = vsv!({
//!     "name": "Alice",
//!     "tags": ["admin", "user"]
//! });
//! assert!(obj.is_object());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use vsv::to_object;
//!
//! let value = to_object("{config\n,retries,3\n}");
//! let config = value.get("config").expect("config");
//! assert_eq!(config.get("retries").and_then(|v| v.as_str()), Some("3"));
//! ```
//!
//! ### Display
//!
//! `Value` renders as JSON-like text for display, and implements
//! `serde::Serialize`, so callers needing strict JSON can re-serialize
//! with `serde_json`.

use crate::VsvMap;
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed VSV object value.
///
/// Every scalar the markup can express is a string; function literals are
/// accumulated strings too. Containers are sequences and insertion-ordered
/// objects.
///
/// # Examples
///
/// ```rust
/// use vsv::{Value, VsvMap};
///
/// let text = Value::from("hello");
/// let empty = Value::Object(VsvMap::new());
///
/// assert!(text.is_string());
/// assert!(empty.is_object());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// A string scalar (or an accumulated function literal).
    String(String),
    /// An ordered sequence.
    Array(Vec<Value>),
    /// An insertion-ordered object.
    Object(VsvMap),
}

impl Value {
    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// If the value is a string, returns a reference to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vsv::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::Array(vec![]).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&VsvMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Looks up a key in an object value. Returns `None` for non-objects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vsv::vsv;
    ///
    /// let value = vsv!({"a": "1"});
    /// assert_eq!(value.get("a").and_then(|v| v.as_str()), Some("1"));
    /// assert_eq!(value.get("b"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(obj) => obj.get(key),
            _ => None,
        }
    }
}

/// The default value is an empty object, matching the root the object
/// builder starts from.
impl Default for Value {
    fn default() -> Self {
        Value::Object(VsvMap::new())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<VsvMap> for Value {
    fn from(value: VsvMap) -> Self {
        Value::Object(value)
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "\"")?;
    for ch in s.chars() {
        match ch {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            other => write!(f, "{other}")?,
        }
    }
    write!(f, "\"")
}

/// Renders the value as JSON-like text. Best-effort for display; callers
/// needing strict JSON should serialize through `serde` instead.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write_escaped(f, s),
            Value::Array(arr) => {
                write!(f, "[")?;
                for (i, element) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            }
            Value::Object(obj) => {
                write!(f, "{{")?;
                for (i, (key, value)) in obj.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write_escaped(f, key)?;
                    write!(f, ": {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, sequence, or map")
            }

            // scalars other than strings arrive stringified, which is the
            // markup's native scalar representation
            fn visit_bool<E>(self, value: bool) -> Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_str<E>(self, value: &str) -> Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Value, E> {
                Ok(Value::String(String::new()))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut elements = Vec::new();
                while let Some(element) = seq.next_element()? {
                    elements.push(element);
                }
                Ok(Value::Array(elements))
            }

            fn visit_map<A>(self, mut access: A) -> Result<Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = VsvMap::new();
                while let Some((key, value)) = access.next_entry()? {
                    map.insert(key, value);
                }
                Ok(Value::Object(map))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}
