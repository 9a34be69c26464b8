//! Key-encoding type tags
//!
//! Every encoded key component starts with a single tag byte. The numeric
//! value of the tag decides how components of different types sort against
//! each other, so these bytes are part of the on-disk key format.
//!
//! ## Contract
//!
//! The byte values are FROZEN. Reassigning a tag reorders every existing key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tag preceding every encoded key component
///
/// Ordering: GroupEnd < Null < ArrayIndex < Double < False < UInt16Hash < Int64 < String < True
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[repr(u8)]
pub enum ValueType {
    /// Terminates a group of components (hashed or range group)
    GroupEnd = b'!',
    /// Null value
    Null = b'$',
    /// Array element index
    ArrayIndex = b'A',
    /// 64-bit float
    Double = b'D',
    /// Boolean false
    False = b'F',
    /// 16-bit partition hash at the start of a document key
    UInt16Hash = b'G',
    /// 64-bit signed integer
    Int64 = b'I',
    /// UTF-8 string
    String = b'S',
    /// Boolean true
    True = b'T',
}

impl ValueType {
    /// Convert to byte representation
    pub fn as_byte(&self) -> u8 {
        *self as u8
    }

    /// Try to create from byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'!' => Some(ValueType::GroupEnd),
            b'$' => Some(ValueType::Null),
            b'A' => Some(ValueType::ArrayIndex),
            b'D' => Some(ValueType::Double),
            b'F' => Some(ValueType::False),
            b'G' => Some(ValueType::UInt16Hash),
            b'I' => Some(ValueType::Int64),
            b'S' => Some(ValueType::String),
            b'T' => Some(ValueType::True),
            _ => None,
        }
    }

    /// Human-readable tag name
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::GroupEnd => "GroupEnd",
            ValueType::Null => "Null",
            ValueType::ArrayIndex => "ArrayIndex",
            ValueType::Double => "Double",
            ValueType::False => "False",
            ValueType::UInt16Hash => "UInt16Hash",
            ValueType::Int64 => "Int64",
            ValueType::String => "String",
            ValueType::True => "True",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
