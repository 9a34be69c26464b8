//! Top-level document keys
//!
//! A `DocKey` identifies the root of one document. It has up to three parts:
//!
//! - an optional 16-bit partition hash
//! - hashed components (only present together with the hash)
//! - range components
//!
//! # Encoding
//!
//! ```text
//! [ 'G' hash_be16 hashed_component* '!' ] range_component* '!'
//! ```
//!
//! Every component is a `PrimitiveValue` encoding. The trailing group end
//! makes a document key self-delimiting, so subkeys can be appended directly
//! after it and decoded back off again.

use crate::error::KeyDecodeError;
use crate::key_bytes::{
    format_bytes_as_str, peek_value_type, read_u16_be, read_value_type, KeyBytes,
};
use crate::primitive_value::PrimitiveValue;
use crate::value_type::ValueType;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Structured description of a document's top-level key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "RawDocKey")]
pub struct DocKey {
    hash: Option<u16>,
    hashed_components: Vec<PrimitiveValue>,
    range_components: Vec<PrimitiveValue>,
}

/// Wire shape of `DocKey` before its invariants are checked
#[derive(Deserialize)]
struct RawDocKey {
    hash: Option<u16>,
    hashed_components: Vec<PrimitiveValue>,
    range_components: Vec<PrimitiveValue>,
}

impl TryFrom<RawDocKey> for DocKey {
    type Error = KeyDecodeError;

    fn try_from(raw: RawDocKey) -> Result<Self, Self::Error> {
        // encode() only writes the hashed group when a hash is present
        if raw.hash.is_none() && !raw.hashed_components.is_empty() {
            return Err(KeyDecodeError::HashedComponentsWithoutHash {
                count: raw.hashed_components.len(),
            });
        }
        Ok(DocKey {
            hash: raw.hash,
            hashed_components: raw.hashed_components,
            range_components: raw.range_components,
        })
    }
}

impl DocKey {
    /// Create a key with only range components and no hash
    pub fn new(range_components: Vec<PrimitiveValue>) -> Self {
        DocKey {
            hash: None,
            hashed_components: Vec::new(),
            range_components,
        }
    }

    /// Create a hash-partitioned key
    pub fn with_hash(
        hash: u16,
        hashed_components: Vec<PrimitiveValue>,
        range_components: Vec<PrimitiveValue>,
    ) -> Self {
        DocKey {
            hash: Some(hash),
            hashed_components,
            range_components,
        }
    }

    /// Build the key for a flat Redis-style entry
    ///
    /// `hash` is a 16-bit partition hash carried in a `u32` because the
    /// serialization format this value comes from has no 16-bit integer.
    /// Only the low 16 bits are meaningful; any higher bits are masked off
    /// and logged at `warn`. Redis callers work with a 16-bit hash slot, so
    /// a value that needs masking usually points to a bug at the call site.
    ///
    /// The key string becomes the single hashed component; there are no
    /// range components.
    pub fn from_redis_key(hash: u32, key: &str) -> Self {
        let masked = (hash & u32::from(u16::MAX)) as u16;
        if hash > u32::from(u16::MAX) {
            warn!(hash, masked, "Redis key hash has bits above the low 16, masking");
        }
        DocKey::with_hash(masked, vec![PrimitiveValue::string(key)], Vec::new())
    }

    /// Partition hash, if the key is hash-partitioned
    pub fn hash(&self) -> Option<u16> {
        self.hash
    }

    /// Components covered by the partition hash
    pub fn hashed_components(&self) -> &[PrimitiveValue] {
        &self.hashed_components
    }

    /// Range components
    pub fn range_components(&self) -> &[PrimitiveValue] {
        &self.range_components
    }

    /// Encode into ordered key bytes
    pub fn encode(&self) -> KeyBytes {
        let mut key = KeyBytes::new();
        if let Some(hash) = self.hash {
            key.append_value_type(ValueType::UInt16Hash);
            key.append_u16_be(hash);
            for component in &self.hashed_components {
                component.append_to_key(&mut key);
            }
            key.append_value_type(ValueType::GroupEnd);
        }
        for component in &self.range_components {
            component.append_to_key(&mut key);
        }
        key.append_value_type(ValueType::GroupEnd);
        key
    }

    /// Decode a document key from the front of `bytes`
    ///
    /// Returns the key and the number of bytes it occupied. Anything after
    /// that (typically encoded subkeys) is left for the caller.
    pub fn decode(bytes: &[u8]) -> Result<(DocKey, usize), KeyDecodeError> {
        let mut input = bytes;
        let mut doc_key = DocKey::default();

        if peek_value_type(input)? == ValueType::UInt16Hash {
            read_value_type(&mut input)?;
            doc_key.hash = Some(read_u16_be(&mut input)?);
            doc_key.hashed_components = decode_group(&mut input)?;
        }
        doc_key.range_components = decode_group(&mut input)?;

        Ok((doc_key, bytes.len() - input.len()))
    }

    /// Decode a document key that must span all of `bytes`
    pub fn decode_exact(bytes: &[u8]) -> Result<DocKey, KeyDecodeError> {
        let (doc_key, consumed) = DocKey::decode(bytes)?;
        if consumed != bytes.len() {
            return Err(KeyDecodeError::TrailingBytes(bytes.len() - consumed));
        }
        Ok(doc_key)
    }
}

fn decode_group(input: &mut &[u8]) -> Result<Vec<PrimitiveValue>, KeyDecodeError> {
    let mut components = Vec::new();
    loop {
        if peek_value_type(input)? == ValueType::GroupEnd {
            read_value_type(input)?;
            return Ok(components);
        }
        components.push(PrimitiveValue::decode_from_key(input)?);
    }
}

/// Render a list of values as `[a, b, c]`
pub(crate) fn format_values(values: &[PrimitiveValue]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

impl fmt::Display for DocKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hash {
            Some(hash) => write!(
                f,
                "DocKey(0x{:04x}, {}, {})",
                hash,
                format_values(&self.hashed_components),
                format_values(&self.range_components)
            ),
            None => write!(
                f,
                "DocKey({}, {})",
                format_values(&self.hashed_components),
                format_values(&self.range_components)
            ),
        }
    }
}

/// Render encoded key bytes for diagnostics
///
/// Tries to decode a document key followed by zero or more subkeys. If the
/// bytes do not decode, falls back to the escaped raw bytes. The output is
/// for logs only and is never parsed back.
pub fn best_effort_key_to_str(bytes: &[u8]) -> String {
    let (doc_key, consumed) = match DocKey::decode(bytes) {
        Ok(decoded) => decoded,
        Err(e) => {
            debug!(error = %e, "Key is not a document key, rendering raw bytes");
            return format_bytes_as_str(bytes);
        }
    };

    let mut rest = &bytes[consumed..];
    if rest.is_empty() {
        return doc_key.to_string();
    }

    let mut subkeys = Vec::new();
    while !rest.is_empty() {
        match PrimitiveValue::decode_from_key(&mut rest) {
            Ok(subkey) => subkeys.push(subkey),
            Err(e) => {
                debug!(error = %e, "Key has undecodable subkeys, rendering raw bytes");
                return format_bytes_as_str(bytes);
            }
        }
    }
    format!("SubDocKey({}, {})", doc_key, format_values(&subkeys))
}
