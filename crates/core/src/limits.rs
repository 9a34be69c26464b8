//! Size limits for document paths and keys
//!
//! A `DocPath` grows without bound; how deep a path may go or how large an
//! encoded key may be is a policy of the layer building it. That layer opts in
//! by holding a `Limits` and calling its validators before a path is used.

use crate::doc_path::DocPath;
use crate::key_bytes::KeyBytes;
use crate::primitive_value::PrimitiveValue;
use thiserror::Error;

/// Size limits for paths and keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of subkeys in a path (default: 256)
    pub max_subkeys: usize,

    /// Maximum encoded document key length in bytes (default: 4096)
    pub max_encoded_key_bytes: usize,

    /// Maximum length of one string subkey in bytes (default: 64KB)
    pub max_string_subkey_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_subkeys: 256,
            max_encoded_key_bytes: 4096,
            max_string_subkey_bytes: 64 * 1024, // 64KB
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_subkeys: 4,
            max_encoded_key_bytes: 64,
            max_string_subkey_bytes: 16,
        }
    }

    /// Validate an encoded document key length
    pub fn validate_encoded_key(&self, key: &KeyBytes) -> Result<(), LimitError> {
        let len = key.len();
        if len > self.max_encoded_key_bytes {
            return Err(LimitError::KeyTooLong {
                actual: len,
                max: self.max_encoded_key_bytes,
            });
        }
        Ok(())
    }

    /// Validate a single subkey
    pub fn validate_subkey(&self, subkey: &PrimitiveValue) -> Result<(), LimitError> {
        if let Some(s) = subkey.as_str() {
            if s.len() > self.max_string_subkey_bytes {
                return Err(LimitError::SubkeyTooLong {
                    actual: s.len(),
                    max: self.max_string_subkey_bytes,
                });
            }
        }
        Ok(())
    }

    /// Validate a whole path: depth, document key size and every subkey
    ///
    /// Returns the first violation found.
    pub fn validate_path(&self, path: &DocPath) -> Result<(), LimitError> {
        let depth = path.num_subkeys();
        if depth > self.max_subkeys {
            return Err(LimitError::TooManySubkeys {
                actual: depth,
                max: self.max_subkeys,
            });
        }
        self.validate_encoded_key(path.encoded_doc_key())?;
        for subkey in path.subkeys() {
            self.validate_subkey(subkey)?;
        }
        Ok(())
    }
}

/// Limit validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LimitError {
    /// Path has more subkeys than allowed
    #[error("path has {actual} subkeys, maximum is {max}")]
    TooManySubkeys {
        /// Actual subkey count
        actual: usize,
        /// Maximum allowed
        max: usize,
    },

    /// Encoded document key exceeds maximum length
    #[error("encoded key too long: {actual} bytes exceeds maximum {max}")]
    KeyTooLong {
        /// Actual length in bytes
        actual: usize,
        /// Maximum allowed
        max: usize,
    },

    /// String subkey exceeds maximum length
    #[error("subkey too long: {actual} bytes exceeds maximum {max}")]
    SubkeyTooLong {
        /// Actual length in bytes
        actual: usize,
        /// Maximum allowed
        max: usize,
    },
}

impl LimitError {
    /// Get the reason code for diagnostics
    pub fn reason_code(&self) -> &'static str {
        match self {
            LimitError::TooManySubkeys { .. } => "too_many_subkeys",
            LimitError::KeyTooLong { .. } => "key_too_long",
            LimitError::SubkeyTooLong { .. } => "subkey_too_long",
        }
    }
}
