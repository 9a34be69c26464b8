//! Primitive values used as key components
//!
//! A `PrimitiveValue` is one component of a document key or one subkey of a
//! document path: a scalar (string, integer, double, bool, null) or a
//! structural selector such as an array index.
//!
//! # Ordering
//!
//! `Ord` on `PrimitiveValue` is defined to agree with the byte encoding:
//! for any `a` and `b`, `a.cmp(&b) == a.to_key_bytes().cmp(&b.to_key_bytes())`.
//! Values of different kinds are ordered by their [`ValueType`] tag byte.
//! Doubles are ordered by the IEEE-754 total order, so `-0.0 < 0.0` and the two
//! are not equal.

use crate::error::KeyDecodeError;
use crate::key_bytes::{
    f64_order_key, read_escaped_str, read_f64_ordered, read_i64_ordered, read_value_type,
    KeyBytes,
};
use crate::value_type::ValueType;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A scalar or structural selector usable as a key component
///
/// # Examples
///
/// ```
/// use docpath_core::PrimitiveValue;
///
/// let field = PrimitiveValue::string("address");
/// let index = PrimitiveValue::array_index(3);
/// assert!(field.to_key_bytes() > index.to_key_bytes());
/// assert!(field > index);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PrimitiveValue {
    /// Null
    Null,
    /// Boolean, encoded as its own `False`/`True` tag
    Bool(bool),
    /// 64-bit signed integer
    Int64(i64),
    /// 64-bit float, serialized as its IEEE-754 bit pattern so NaN and
    /// infinities survive formats without them
    Double(#[serde(with = "f64_bits")] f64),
    /// UTF-8 string
    String(String),
    /// Array element selector
    ArrayIndex(i64),
}

mod f64_bits {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.to_bits().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(f64::from_bits)
    }
}

impl PrimitiveValue {
    /// Null value
    pub fn null() -> Self {
        PrimitiveValue::Null
    }

    /// Boolean value
    pub fn bool(value: bool) -> Self {
        PrimitiveValue::Bool(value)
    }

    /// Integer value
    pub fn int64(value: i64) -> Self {
        PrimitiveValue::Int64(value)
    }

    /// Double value
    pub fn double(value: f64) -> Self {
        PrimitiveValue::Double(value)
    }

    /// String value
    pub fn string(value: impl Into<String>) -> Self {
        PrimitiveValue::String(value.into())
    }

    /// Array index selector
    pub fn array_index(index: i64) -> Self {
        PrimitiveValue::ArrayIndex(index)
    }

    /// Tag this value is encoded under
    pub fn value_type(&self) -> ValueType {
        match self {
            PrimitiveValue::Null => ValueType::Null,
            PrimitiveValue::Bool(false) => ValueType::False,
            PrimitiveValue::Bool(true) => ValueType::True,
            PrimitiveValue::Int64(_) => ValueType::Int64,
            PrimitiveValue::Double(_) => ValueType::Double,
            PrimitiveValue::String(_) => ValueType::String,
            PrimitiveValue::ArrayIndex(_) => ValueType::ArrayIndex,
        }
    }

    /// Get the string payload, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PrimitiveValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Append the tag and ordered payload to `key`
    pub fn append_to_key(&self, key: &mut KeyBytes) {
        key.append_value_type(self.value_type());
        match self {
            PrimitiveValue::Null | PrimitiveValue::Bool(_) => {}
            PrimitiveValue::Int64(v) | PrimitiveValue::ArrayIndex(v) => key.append_i64_ordered(*v),
            PrimitiveValue::Double(v) => key.append_f64_ordered(*v),
            PrimitiveValue::String(s) => key.append_escaped_str(s),
        }
    }

    /// Encode this value on its own
    pub fn to_key_bytes(&self) -> KeyBytes {
        let mut key = KeyBytes::new();
        self.append_to_key(&mut key);
        key
    }

    /// Decode one value from the front of `input`, advancing it
    ///
    /// Structural tags (`GroupEnd`, `UInt16Hash`) are rejected: they delimit
    /// document keys and never start a primitive value.
    pub fn decode_from_key(input: &mut &[u8]) -> Result<Self, KeyDecodeError> {
        let value_type = read_value_type(input)?;
        let value = match value_type {
            ValueType::Null => PrimitiveValue::Null,
            ValueType::False => PrimitiveValue::Bool(false),
            ValueType::True => PrimitiveValue::Bool(true),
            ValueType::Int64 => PrimitiveValue::Int64(read_i64_ordered(input)?),
            ValueType::ArrayIndex => PrimitiveValue::ArrayIndex(read_i64_ordered(input)?),
            ValueType::Double => PrimitiveValue::Double(read_f64_ordered(input)?),
            ValueType::String => PrimitiveValue::String(read_escaped_str(input)?),
            ValueType::GroupEnd | ValueType::UInt16Hash => {
                return Err(KeyDecodeError::NotAPrimitiveValue(value_type))
            }
        };
        Ok(value)
    }
}

impl Ord for PrimitiveValue {
    fn cmp(&self, other: &Self) -> Ordering {
        use PrimitiveValue::*;

        match (self, other) {
            (Int64(a), Int64(b)) | (ArrayIndex(a), ArrayIndex(b)) => a.cmp(b),
            (Double(a), Double(b)) => f64_order_key(*a).cmp(&f64_order_key(*b)),
            (String(a), String(b)) => a.as_bytes().cmp(b.as_bytes()),
            _ => self.value_type().cmp(&other.value_type()),
        }
    }
}

impl PartialOrd for PrimitiveValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PrimitiveValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PrimitiveValue {}

impl Hash for PrimitiveValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value_type().hash(state);
        match self {
            PrimitiveValue::Null | PrimitiveValue::Bool(_) => {}
            PrimitiveValue::Int64(v) | PrimitiveValue::ArrayIndex(v) => v.hash(state),
            PrimitiveValue::Double(v) => f64_order_key(*v).hash(state),
            PrimitiveValue::String(s) => s.hash(state),
        }
    }
}

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveValue::Null => write!(f, "null"),
            PrimitiveValue::Bool(b) => write!(f, "{}", b),
            PrimitiveValue::Int64(v) => write!(f, "{}", v),
            PrimitiveValue::Double(v) => write!(f, "{}", v),
            PrimitiveValue::String(s) => write!(f, "{:?}", s),
            PrimitiveValue::ArrayIndex(i) => write!(f, "ArrayIndex({})", i),
        }
    }
}

impl From<&str> for PrimitiveValue {
    fn from(s: &str) -> Self {
        PrimitiveValue::String(s.to_string())
    }
}

impl From<String> for PrimitiveValue {
    fn from(s: String) -> Self {
        PrimitiveValue::String(s)
    }
}

impl From<i64> for PrimitiveValue {
    fn from(v: i64) -> Self {
        PrimitiveValue::Int64(v)
    }
}

impl From<bool> for PrimitiveValue {
    fn from(b: bool) -> Self {
        PrimitiveValue::Bool(b)
    }
}
