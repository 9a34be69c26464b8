//! Error types for document path addressing
//!
//! Decoding a byte key back into components and checking caller limits are the
//! only fallible operations in this crate. Misuse of a `DocPath` (indexing past
//! the last subkey, asking an empty path for its last subkey) is a caller bug
//! and panics instead of returning one of these errors.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::limits::LimitError;
use crate::value_type::ValueType;
use thiserror::Error;

/// Result type alias for docpath operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the addressing layer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Encoded key bytes could not be decoded
    #[error("Key decode error: {0}")]
    KeyDecode(#[from] KeyDecodeError),

    /// A caller-configured limit was exceeded
    #[error("Limit exceeded: {0}")]
    Limit(#[from] LimitError),
}

/// Failures while decoding encoded key bytes
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyDecodeError {
    /// Input ended in the middle of a component
    #[error("unexpected end of key while reading {expected}")]
    UnexpectedEnd {
        /// What the decoder was reading when input ran out
        expected: &'static str,
    },

    /// Tag byte does not name any value type
    #[error("unknown value type byte 0x{0:02x}")]
    UnknownValueType(u8),

    /// Tag byte is a structural marker, not the start of a primitive value
    #[error("value type {0} does not start a primitive value")]
    NotAPrimitiveValue(ValueType),

    /// String component is not valid UTF-8
    #[error("string component is not valid UTF-8")]
    InvalidUtf8,

    /// Zero byte inside a string component followed by an unknown escape
    #[error("invalid escape sequence in string component at byte {position}")]
    InvalidStringEscape {
        /// Offset of the zero byte from the start of the string payload
        position: usize,
    },

    /// Hashed components present on a document key with no partition hash
    #[error("{count} hashed components without a partition hash")]
    HashedComponentsWithoutHash {
        /// Number of hashed components found
        count: usize,
    },

    /// Bytes left over after a complete key was decoded
    #[error("{0} trailing bytes after encoded key")]
    TrailingBytes(usize),
}

impl KeyDecodeError {
    /// Stable reason code for diagnostics
    pub fn reason_code(&self) -> &'static str {
        match self {
            KeyDecodeError::UnexpectedEnd { .. } => "unexpected_end",
            KeyDecodeError::UnknownValueType(_) => "unknown_value_type",
            KeyDecodeError::NotAPrimitiveValue(_) => "not_a_primitive_value",
            KeyDecodeError::InvalidUtf8 => "invalid_utf8",
            KeyDecodeError::InvalidStringEscape { .. } => "invalid_string_escape",
            KeyDecodeError::HashedComponentsWithoutHash { .. } => {
                "hashed_components_without_hash"
            }
            KeyDecodeError::TrailingBytes(_) => "trailing_bytes",
        }
    }
}
