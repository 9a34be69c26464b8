//! Core addressing types for the document store
//!
//! This crate defines how a subdocument is named on top of a sorted,
//! byte-ordered key-value store:
//! - ValueType: Single-byte tags prefixing every encoded key component
//! - KeyBytes: Ordered, concatenable key buffer
//! - PrimitiveValue: Scalar or selector used as a key component or subkey
//! - DocKey: Top-level document key (hash, hashed and range components)
//! - DocPath: Encoded document key + ordered chain of subkeys
//! - Limits: Opt-in depth and size policy for callers
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod doc_key;
pub mod doc_path;
pub mod error;
pub mod key_bytes;
pub mod limits;
pub mod primitive_value;
pub mod value_type;

pub use doc_key::{best_effort_key_to_str, DocKey};
pub use doc_path::DocPath;
pub use error::{Error, KeyDecodeError, Result};
pub use key_bytes::{format_bytes_as_str, KeyBytes};
pub use limits::{LimitError, Limits};
pub use primitive_value::PrimitiveValue;
pub use value_type::ValueType;
