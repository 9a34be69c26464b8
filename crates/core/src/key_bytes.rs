//! Encoded key bytes
//!
//! `KeyBytes` is the byte buffer every key component is appended into. The
//! underlying store compares keys byte-lexicographically, so each appender
//! here writes its component in a form where byte order equals logical order:
//!
//! | Component | Encoding |
//! |-----------|----------|
//! | u16 | big-endian |
//! | i64 | big-endian with the sign bit flipped |
//! | f64 | big-endian bits, sign bit flipped for positives, all bits flipped for negatives |
//! | string | `0x00` escaped as `0x00 0x01`, terminated by `0x00 0x00` |
//!
//! The string terminator sorts below every escaped or literal byte, so a
//! string always sorts before any longer string it prefixes.

use crate::error::KeyDecodeError;
use crate::value_type::ValueType;
use serde::{Deserialize, Serialize};
use std::fmt;

const SIGN_BIT_64: u64 = 0x8000_0000_0000_0000;
const STRING_ESCAPE: u8 = 0x00;
const ESCAPED_ZERO: u8 = 0x01;
const STRING_TERMINATOR: u8 = 0x00;

/// Opaque, ordered, concatenable key buffer
///
/// # Examples
///
/// ```
/// use docpath_core::KeyBytes;
///
/// let mut a = KeyBytes::new();
/// a.append_escaped_str("apple");
/// let mut b = KeyBytes::new();
/// b.append_escaped_str("banana");
/// assert!(a < b);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBytes(Vec<u8>);

impl KeyBytes {
    /// Create an empty key
    pub fn new() -> Self {
        KeyBytes(Vec::new())
    }

    /// Wrap bytes that are already encoded
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        KeyBytes(bytes.into())
    }

    /// Borrow the raw bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Take ownership of the raw bytes
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the key has no bytes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if `prefix` is a byte prefix of this key
    pub fn starts_with(&self, prefix: &KeyBytes) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Concatenate another encoded key onto this one
    pub fn append(&mut self, other: &KeyBytes) {
        self.0.extend_from_slice(&other.0);
    }

    /// Append bytes verbatim
    pub fn append_raw(&mut self, bytes: &[u8]) {
        self.0.extend_from_slice(bytes);
    }

    /// Append a single type tag
    pub fn append_value_type(&mut self, value_type: ValueType) {
        self.0.push(value_type.as_byte());
    }

    /// Append a u16 in big-endian order
    pub fn append_u16_be(&mut self, value: u16) {
        self.0.extend_from_slice(&value.to_be_bytes());
    }

    /// Append an i64 so that byte order matches numeric order
    pub fn append_i64_ordered(&mut self, value: i64) {
        let biased = (value as u64) ^ SIGN_BIT_64;
        self.0.extend_from_slice(&biased.to_be_bytes());
    }

    /// Append an f64 so that byte order matches the IEEE-754 total order
    pub fn append_f64_ordered(&mut self, value: f64) {
        self.0.extend_from_slice(&ordered_f64_bits(value).to_be_bytes());
    }

    /// Append a string with zero bytes escaped, followed by the terminator
    pub fn append_escaped_str(&mut self, value: &str) {
        for &b in value.as_bytes() {
            if b == STRING_ESCAPE {
                self.0.push(STRING_ESCAPE);
                self.0.push(ESCAPED_ZERO);
            } else {
                self.0.push(b);
            }
        }
        self.0.push(STRING_ESCAPE);
        self.0.push(STRING_TERMINATOR);
    }
}

impl From<Vec<u8>> for KeyBytes {
    fn from(bytes: Vec<u8>) -> Self {
        KeyBytes(bytes)
    }
}

impl From<&[u8]> for KeyBytes {
    fn from(bytes: &[u8]) -> Self {
        KeyBytes(bytes.to_vec())
    }
}

impl AsRef<[u8]> for KeyBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for KeyBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_bytes_as_str(&self.0))
    }
}

/// Render arbitrary bytes as a quoted, printable string
///
/// Printable ASCII is kept; quotes and backslashes are escaped and every other
/// byte is rendered as `\xNN`. Intended for logs only.
pub fn format_bytes_as_str(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for &b in bytes {
        match b {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7e => out.push(b as char),
            _ => out.push_str(&format!("\\x{:02x}", b)),
        }
    }
    out.push('"');
    out
}

fn ordered_f64_bits(value: f64) -> u64 {
    let bits = value.to_bits();
    if bits & SIGN_BIT_64 == 0 {
        bits ^ SIGN_BIT_64
    } else {
        !bits
    }
}

fn f64_from_ordered_bits(ordered: u64) -> f64 {
    let bits = if ordered & SIGN_BIT_64 != 0 {
        ordered ^ SIGN_BIT_64
    } else {
        !ordered
    };
    f64::from_bits(bits)
}

/// Ordered bit pattern of an f64, shared with `PrimitiveValue` comparison
pub(crate) fn f64_order_key(value: f64) -> u64 {
    ordered_f64_bits(value)
}

// =============================================================================
// Decoding helpers
// =============================================================================
//
// Each reader consumes from the front of `input` and advances the slice.

fn take<'a>(
    input: &mut &'a [u8],
    n: usize,
    expected: &'static str,
) -> Result<&'a [u8], KeyDecodeError> {
    if input.len() < n {
        return Err(KeyDecodeError::UnexpectedEnd { expected });
    }
    let (head, rest) = input.split_at(n);
    *input = rest;
    Ok(head)
}

pub(crate) fn read_value_type(input: &mut &[u8]) -> Result<ValueType, KeyDecodeError> {
    let byte = take(input, 1, "value type")?[0];
    ValueType::from_byte(byte).ok_or(KeyDecodeError::UnknownValueType(byte))
}

pub(crate) fn peek_value_type(input: &[u8]) -> Result<ValueType, KeyDecodeError> {
    let mut probe = input;
    read_value_type(&mut probe)
}

pub(crate) fn read_u16_be(input: &mut &[u8]) -> Result<u16, KeyDecodeError> {
    let bytes = take(input, 2, "u16 hash")?;
    Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
}

pub(crate) fn read_i64_ordered(input: &mut &[u8]) -> Result<i64, KeyDecodeError> {
    let bytes = take(input, 8, "int64")?;
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    Ok((u64::from_be_bytes(buf) ^ SIGN_BIT_64) as i64)
}

pub(crate) fn read_f64_ordered(input: &mut &[u8]) -> Result<f64, KeyDecodeError> {
    let bytes = take(input, 8, "double")?;
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    Ok(f64_from_ordered_bits(u64::from_be_bytes(buf)))
}

pub(crate) fn read_escaped_str(input: &mut &[u8]) -> Result<String, KeyDecodeError> {
    let mut out = Vec::new();
    let mut pos = 0;
    loop {
        let b = take(input, 1, "string")?[0];
        if b != STRING_ESCAPE {
            out.push(b);
            pos += 1;
            continue;
        }
        match take(input, 1, "string escape")?[0] {
            STRING_TERMINATOR => break,
            ESCAPED_ZERO => out.push(0),
            _ => return Err(KeyDecodeError::InvalidStringEscape { position: pos }),
        }
        pos += 2;
    }
    String::from_utf8(out).map_err(|_| KeyDecodeError::InvalidUtf8)
}
